//! # sttgen
//!
//! Compiles CSV state-transition tables into C and C++ state machine
//! scaffolds.
//!
//! Each `.csv` file in the input directory describes one machine. The first
//! cell of a row names a state; the remaining cells are events paired with
//! target states, or markers:
//!
//! - `\s` flags the row's state as a super state
//! - `\DEFAULT <target>` sets the state returned when no event fires
//! - `\SUPER <target>` makes the row's state a sub-state of `<target>`
//!
//! ## Example
//!
//! ```no_run
//! use sttgen::{Config, SystemMetadata, run};
//!
//! let config = Config::default();
//! let summary = run(&config, &SystemMetadata).unwrap();
//! println!("{} tables generated", summary.succeeded());
//! ```

mod config;
mod error;
mod pipeline;
pub mod table;

pub use crate::config::{BackendSelection, Config};
pub use crate::error::RunError;
pub use crate::pipeline::{RunSummary, TableReport, process_table, run};

#[doc(inline)]
pub use sttgen_codegen::{Backend, BuildMetadata, FixedMetadata, SystemMetadata};
#[doc(inline)]
pub use sttgen_core::{Finding, StateGraph, TableError};
