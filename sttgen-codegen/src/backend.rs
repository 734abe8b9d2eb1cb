//! Target language descriptions.
//!
//! The renderer walks the same [`MachineIr`] for every backend; a
//! [`Backend`] only decides how scopes, enums and qualified names are
//! spelled.
//!
//! [`MachineIr`]: crate::ir::MachineIr

use std::fmt;

use crate::helpers::RUNTIME_MODULE;

/// How a group of declarations is scoped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// `#ifdef __cplusplus extern "C" { ... }` guards.
    ExternC,
    /// `namespace Name { ... }` with the body indented.
    Namespace,
}

/// How aggregate and enum types are declared and referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeStyle {
    /// `typedef struct X { ... } X;` and `typedef enum STT_STATE_T { ... }
    /// STT_STATE_T;` with bare enumerants.
    Typedef,
    /// `struct X { ... };` and `enum STT_STATE : uint8_t { ... };` with
    /// enumerants referenced as `STT_STATE::NAME`.
    Scoped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backend {
    pub name: &'static str,
    /// Suffix of the output directory: `<table>_<tag>`.
    pub tag: &'static str,
    pub source_extension: &'static str,
    pub scope: Scope,
    pub type_style: TypeStyle,
    /// System headers pulled in by the runtime header.
    pub system_includes: &'static [&'static str],
}

impl Backend {
    pub const C: Backend = Backend {
        name: "C",
        tag: "c",
        source_extension: "c",
        scope: Scope::ExternC,
        type_style: TypeStyle::Typedef,
        system_includes: &["stdint.h", "stdbool.h"],
    };

    pub const CPP: Backend = Backend {
        name: "C++",
        tag: "cpp",
        source_extension: "cpp",
        scope: Scope::Namespace,
        type_style: TypeStyle::Scoped,
        system_includes: &["stdint.h"],
    };

    pub const ALL: [Backend; 2] = [Backend::C, Backend::CPP];

    /// Namespace of the runtime module, when the backend has namespaces.
    pub const RUNTIME_NAMESPACE: &'static str = "StateMachine";

    pub fn output_dir(&self, project: &str) -> String {
        format!("{project}_{}", self.tag)
    }

    pub fn header_file(&self, module: &str) -> String {
        format!("{module}.h")
    }

    pub fn source_file(&self, module: &str) -> String {
        format!("{module}.{}", self.source_extension)
    }

    pub fn runtime_header(&self) -> String {
        self.header_file(RUNTIME_MODULE)
    }

    pub fn runtime_source(&self) -> String {
        self.source_file(RUNTIME_MODULE)
    }

    /// Qualifies a runtime type or function for use outside its scope.
    pub fn runtime_item(&self, item: &str) -> String {
        self.qualify(Self::RUNTIME_NAMESPACE, item)
    }

    /// Qualifies a table-module item for an out-of-scope definition.
    pub fn table_item(&self, namespace: &str, item: &str) -> String {
        self.qualify(namespace, item)
    }

    /// References an enumerant of the table's state enum.
    pub fn state_ref(&self, constant: &str) -> String {
        match self.type_style {
            TypeStyle::Typedef => constant.to_string(),
            TypeStyle::Scoped => format!("STT_STATE::{constant}"),
        }
    }

    fn qualify(&self, namespace: &str, item: &str) -> String {
        match self.scope {
            Scope::ExternC => item.to_string(),
            Scope::Namespace => format!("{namespace}::{item}"),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
