pub mod kind;

pub use exproc_error::Error;
