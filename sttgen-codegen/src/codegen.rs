//! Renders a [`MachineIr`] into the four artifacts of one table.

mod declarations;
mod definitions;
mod runtime;

use crate::backend::{Backend, Scope};
use crate::ir::MachineIr;
use crate::meta::BuildMetadata;
use crate::writer::CodeWriter;

const RUNTIME_DESCRIPTION: &str =
    "Table driven state machine runtime: action dispatcher and super state helper.";
const TABLE_DESCRIPTION: &str =
    "States, events and action functions generated from the state table.";

/// One generated file, relative to the backend's output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub contents: String,
}

/// Generate every artifact for one table: runtime header, runtime source,
/// table header, table source.
pub fn generate(ir: &MachineIr, backend: &Backend, meta: &dyn BuildMetadata) -> Vec<Artifact> {
    vec![
        runtime::render_header(ir, backend, meta),
        runtime::render_source(backend, meta),
        declarations::render(ir, backend, meta),
        definitions::render(ir, backend, meta),
    ]
}

/// Writes the banner every artifact starts with.
fn write_stamp(w: &mut CodeWriter, file_name: &str, description: &str, meta: &dyn BuildMetadata) {
    w.comment([
        format!("Name        : {file_name}"),
        format!("Created     : {}", meta.timestamp()),
        format!("Author      : {}", meta.author()),
        format!("Description : {description}"),
    ])
    .blank()
    .blank();
}

/// Opens the scope that wraps a module's declarations. Namespaced scopes
/// indent everything until [`close_scope`].
fn open_scope(w: &mut CodeWriter, backend: &Backend, namespace: &str, doc: &[&str]) {
    match backend.scope {
        Scope::ExternC => {
            w.line("#ifdef __cplusplus")
                .line("extern \"C\" {")
                .line("#endif")
                .blank();
        }
        Scope::Namespace => {
            w.doc(doc).open(format!("namespace {namespace}"));
        }
    }
}

fn close_scope(w: &mut CodeWriter, backend: &Backend) {
    match backend.scope {
        Scope::ExternC => {
            w.blank()
                .line("#ifdef __cplusplus")
                .line("}")
                .line("#endif");
        }
        Scope::Namespace => {
            w.close("}");
        }
    }
    w.blank();
}

/// `A`, `A, or B`, `A, B, or C`
fn join_outcomes(outcomes: &[String]) -> String {
    let mut out = String::new();
    for (i, outcome) in outcomes.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
            if i == outcomes.len() - 1 {
                out.push_str("or ");
            }
        }
        out.push_str(outcome);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_outcomes_with_trailing_or() {
        let list = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert_eq!(join_outcomes(&list(&["A"])), "A");
        assert_eq!(join_outcomes(&list(&["A", "B"])), "A, or B");
        assert_eq!(join_outcomes(&list(&["A", "B", "C"])), "A, B, or C");
    }
}
