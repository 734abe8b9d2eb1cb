//! Front end of sttgen: state table rows in, validated [`StateGraph`] out.
//!
//! ```rust
//! use sttgen_core::StateGraph;
//!
//! let rows = vec![
//!     vec!["idle", "start", "running"],
//!     vec!["running", "\\DEFAULT", "idle"],
//! ];
//! let graph = StateGraph::build(&rows).unwrap();
//! assert_eq!(graph.len(), 2);
//! ```

pub mod analysis;
mod builder;
mod error;
mod graph;
pub mod naming;
pub mod token;

pub use crate::analysis::{Finding, analyze};
pub use crate::error::{MarkerFault, Relation, TableError};
pub use crate::graph::{State, StateGraph, StateId, StateSummary};
