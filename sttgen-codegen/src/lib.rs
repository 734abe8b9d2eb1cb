//! C and C++ scaffold generation for validated state tables.
//!
//! A [`StateGraph`] is lowered once into a [`MachineIr`], then rendered by
//! the single engine in [`codegen`] for each [`Backend`].
//!
//! [`StateGraph`]: sttgen_core::StateGraph

pub mod backend;
pub mod codegen;
pub mod helpers;
pub mod ir;
pub mod meta;
mod writer;

pub use crate::backend::{Backend, Scope, TypeStyle};
pub use crate::codegen::{Artifact, generate};
pub use crate::ir::MachineIr;
pub use crate::meta::{BuildMetadata, FixedMetadata, SystemMetadata};

/// Lowers `graph` and renders it for `backend` in one step.
pub fn render(
    graph: &sttgen_core::StateGraph,
    stem: &str,
    backend: &Backend,
    meta: &dyn BuildMetadata,
) -> Vec<Artifact> {
    generate(&MachineIr::new(graph, stem), backend, meta)
}
