//! Symbolic manipulation of expression trees.

pub(crate) mod build;
pub mod derivative;
pub mod simplify;
pub mod step_collector;
pub mod substitute;
pub mod taylor;
pub mod variables;
