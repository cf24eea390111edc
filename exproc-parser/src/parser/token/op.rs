use crate::{
    parser::{error::{kind, Error}, Parse, Parser, Precedence},
    tokenizer::TokenKind,
};
use std::{fmt::{self, Display, Formatter}, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Every spelling of a function operator that the parser accepts.
pub const FUNCTION_NAMES: &[&str] = &[
    "ln",
    "sin",
    "cos",
    "tan",
    "cot",
    "arcsin",
    "arccos",
    "arctan",
    "arccot",
    "asin",
    "acos",
    "atan",
    "acot",
];

/// The binary operators.
///
/// All binary operators are left-associative, including exponentiation: `a ^ b ^ c` is
/// `(a ^ b) ^ c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOpKind {
    /// Returns the precedence of the binary operation.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Term,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Pow => Precedence::Exp,
        }
    }

    /// Returns the integer priority of the operator: `1` for `+ -`, `2` for `* /`, `3` for `^`.
    pub fn priority(&self) -> u8 {
        self.precedence() as u8
    }

    /// Returns the symbol used to write the operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }
}

impl Display for BinOpKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The unary operators: negation and the named functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOpKind {
    Neg,
    Ln,
    Sin,
    Cos,
    Tan,
    Cot,
    Asin,
    Acos,
    Atan,
    Acot,
}

impl UnaryOpKind {
    /// Returns the display token of the operator, which is `-` for negation and the function name
    /// otherwise.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Ln => "ln",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Cot => "cot",
            Self::Asin => "arcsin",
            Self::Acos => "arccos",
            Self::Atan => "arctan",
            Self::Acot => "arccot",
        }
    }

    /// Resolves a function name, accepting both `arcsin` and `asin` style spellings.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "ln" => Self::Ln,
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "cot" => Self::Cot,
            "arcsin" | "asin" => Self::Asin,
            "arccos" | "acos" => Self::Acos,
            "arctan" | "atan" => Self::Atan,
            "arccot" | "acot" => Self::Acot,
            _ => return None,
        })
    }

    /// Returns true if the operator is written as a function application, i.e. everything except
    /// negation.
    pub fn is_function(&self) -> bool {
        !matches!(self, Self::Neg)
    }

    /// Returns the LaTeX command for the operator.
    pub fn latex(&self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Ln => "\\ln",
            Self::Sin => "\\sin",
            Self::Cos => "\\cos",
            Self::Tan => "\\tan",
            Self::Cot => "\\cot",
            Self::Asin => "\\arcsin",
            Self::Acos => "\\arccos",
            Self::Atan => "\\arctan",
            Self::Acot => "\\operatorname{arccot}",
        }
    }
}

impl Display for UnaryOpKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A binary operator token.
#[derive(Debug, Clone, PartialEq)]
pub struct BinOp {
    /// The kind of binary operator.
    pub kind: BinOpKind,

    /// The region of the source code that this operator was parsed from.
    pub span: Range<usize>,
}

impl BinOp {
    /// Returns the precedence of the binary operation.
    pub fn precedence(&self) -> Precedence {
        self.kind.precedence()
    }
}

impl Parse for BinOp {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        let kind = match token.kind {
            TokenKind::Add => BinOpKind::Add,
            TokenKind::Sub => BinOpKind::Sub,
            TokenKind::Mul => BinOpKind::Mul,
            TokenKind::Div => BinOpKind::Div,
            TokenKind::Exp => BinOpKind::Pow,
            found => return Err(Error::new(vec![token.span], kind::UnexpectedToken {
                expected: &[
                    TokenKind::Add,
                    TokenKind::Sub,
                    TokenKind::Mul,
                    TokenKind::Div,
                    TokenKind::Exp,
                ],
                found,
            })),
        };

        Ok(Self { kind, span: token.span })
    }
}

/// A prefix operator: `-` or a function name.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOp {
    /// The kind of unary operator.
    pub kind: UnaryOpKind,

    /// The region of the source code that this operator was parsed from.
    pub span: Range<usize>,
}

impl Parse for UnaryOp {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        let kind = match token.kind {
            TokenKind::Sub => Some(UnaryOpKind::Neg),
            TokenKind::Name => UnaryOpKind::from_name(token.lexeme),
            _ => None,
        };

        match kind {
            Some(kind) => Ok(Self { kind, span: token.span }),
            None => Err(Error::new(vec![token.span], kind::UnexpectedToken {
                expected: &[TokenKind::Sub, TokenKind::Name],
                found: token.kind,
            })),
        }
    }
}
