use ariadne::Fmt;
use exproc_attrs::ErrorKind;
use exproc_error::EXPR;
use crate::{parser::ast::MAX_NAME_LEN, tokenizer::TokenKind};
use std::fmt;

pub use exproc_error::ErrorKind;

/// An intentionally useless error. This should only be used for non-fatal errors, as it contains
/// no useful information.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "an internal non-fatal error occurred while parsing",
    labels = ["here"],
    help = "you should never see this error; please report this as a bug"
)]
pub struct NonFatal;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
    help = "operators must appear between each pair of operands",
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A character sequence that no token matches.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown symbol `{}`", lexeme),
    labels = ["I don't know what this means"],
    help = "expressions may only contain numbers, names, `+ - * / ^`, and parentheses",
)]
pub struct UnknownToken {
    /// The unrecognized source text.
    pub lexeme: String,
}

/// A number, identifier, or opening parenthesis was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected a number, variable, or parenthesized expression",
    labels = [format!("found {:?} here", found)],
    help = if *found == TokenKind::Name {
        format!("to apply one function to another, wrap the inner one in parentheses: {}", "sin(cos(x))".fg(EXPR))
    } else {
        format!("you might need to add an {} here", "operand".fg(EXPR))
    },
)]
pub struct ExpectedAtom {
    /// The token that was found instead.
    pub found: TokenKind,
}

/// A parenthesis was opened but never closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing closing parenthesis",
    labels = ["this parenthesis is never closed", "add a `)` here"],
)]
pub struct UnclosedParenthesis;

/// A variable name is longer than [`MAX_NAME_LEN`] bytes.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "variable name is too long",
    labels = [format!("this name is {} bytes long", len)],
    help = format!("variable names can be at most {} bytes long", MAX_NAME_LEN),
)]
pub struct NameTooLong {
    /// The length of the offending name, in bytes.
    pub len: usize,
}

impl fmt::Display for NameTooLong {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "variable name is {} bytes long, the maximum is {}", self.len, MAX_NAME_LEN)
    }
}

impl std::error::Error for NameTooLong {}

/// A numeric literal could not be converted to a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid number",
    labels = [format!("`{}` is not a valid number", lexeme)],
)]
pub struct InvalidNumber {
    /// The source text of the literal.
    pub lexeme: String,
}

/// An identifier was used like a function, but no function has that name.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown function `{}`", name),
    labels = ["this function"],
    help = if suggestions.is_empty() {
        format!("known functions are: {}", crate::parser::token::op::FUNCTION_NAMES.join(", "))
    } else {
        format!("did you mean {}?", suggestions.iter().map(|s| format!("`{}`", s.fg(EXPR))).collect::<Vec<_>>().join(" or "))
    },
)]
pub struct UnknownFunction {
    /// The name that was used.
    pub name: String,

    /// Known function names that are close to the given name.
    pub suggestions: Vec<&'static str>,
}
