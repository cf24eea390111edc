//! Operations over [`Node`](exproc_parser::Node) trees.
//!
//! - [`numerical`]: evaluating a tree to a number, given values for its variables.
//! - [`symbolic`]: tree-to-tree transformations, such as differentiation, simplification,
//!   substitution, and Taylor expansion.

pub mod numerical;
pub mod symbolic;

pub use numerical::eval::{eval, Eval};
pub use symbolic::{
    derivative::derivative,
    simplify::{simplify, simplify_with_steps},
    substitute::substitute,
    taylor::{taylor, taylor_with, TaylorOptions},
    variables::free_variables,
};
