//! Numerical evaluation of expression trees.

pub mod error;
pub mod eval;
pub mod func;
