//! Parsing and printing of infix arithmetic expressions.
//!
//! Text is tokenized with [`tokenizer`] and turned into a [`Node`] tree by the precedence-climbing
//! [`parser`]. Trees print back to round-trippable infix text through [`std::fmt::Display`], and
//! to LaTeX through [`parser::fmt::Latex`].

pub mod parser;
pub mod tokenizer;

pub use parser::{ast::Node, parse, print_infix, print_tex};
