//! Structural errors detected while building a state graph.

use std::fmt;

use crate::token::Marker;

/// The relation a target cell was resolved for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relation {
    Default,
    Super,
    Event(String),
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("default"),
            Self::Super => f.write_str("super state"),
            Self::Event(name) => write!(f, "event `{name}`"),
        }
    }
}

/// Why a row's marker sequence could not be tokenized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkerFault {
    /// A marker appeared while another one was still waiting for its target.
    #[error("marker `{marker}` appears while {pending} is still open")]
    MarkerWhileOpen { marker: Marker, pending: String },
    /// The row ended before an open marker received its target.
    #[error("row ends before {pending} receives a target")]
    MissingTarget { pending: String },
    /// The subject cell itself is a reserved marker.
    #[error("row begins with reserved marker `{marker}`")]
    MarkerAsSubject { marker: Marker },
}

/// Error raised while turning one table into a validated [`StateGraph`].
///
/// Every variant aborts the current table only.
///
/// [`StateGraph`]: crate::StateGraph
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// Two rows share the same first-column name.
    #[error("duplicate state `{state}` in table")]
    DuplicateStateName { state: String },

    /// A target cell names a state that is not declared in the table.
    #[error("row `{row}`: {relation} target `{target}` is not a declared state")]
    UnresolvedReference {
        row: String,
        relation: Relation,
        target: String,
    },

    /// A cell in event position names a declared state.
    #[error("row `{row}`: state `{name}` cannot be used as an event name")]
    StateNameUsedAsEvent { row: String, name: String },

    /// Markers are out of order in a row.
    #[error("row `{row}`: {fault}")]
    MalformedMarkerSequence { row: String, fault: MarkerFault },

    /// The table has no rows at all.
    #[error("table contains no states")]
    EmptyTable,
}

impl TableError {
    /// The subject state of the offending row, if the error is tied to one.
    pub fn row(&self) -> Option<&str> {
        match self {
            Self::DuplicateStateName { state } => Some(state),
            Self::UnresolvedReference { row, .. }
            | Self::StateNameUsedAsEvent { row, .. }
            | Self::MalformedMarkerSequence { row, .. } => Some(row),
            Self::EmptyTable => None,
        }
    }
}
