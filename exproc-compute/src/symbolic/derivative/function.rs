//! Derivatives of the unary operators, with the chain rule applied.

use exproc_parser::{parser::token::op::UnaryOpKind, Node};
use super::{
    derivative,
    super::build::{add, cos, div, mul, neg, num, pow, sin, sub},
};

/// `1 - f^2`, raised to `0.5`.
fn sqrt_one_minus_square(f: &Node) -> Node {
    pow(sub(num(1.0), pow(f.clone(), num(2.0))), num(0.5))
}

/// `1 + f^2`
fn one_plus_square(f: &Node) -> Node {
    add(num(1.0), pow(f.clone(), num(2.0)))
}

/// Computes the derivative of `op(f)`.
pub(super) fn unary_derivative(op: UnaryOpKind, f: &Node, with: &str) -> Node {
    let df = derivative(f, with);

    match op {
        UnaryOpKind::Neg => neg(df),
        UnaryOpKind::Ln => div(df, f.clone()),
        UnaryOpKind::Sin => mul(df, cos(f.clone())),
        UnaryOpKind::Cos => mul(neg(df), sin(f.clone())),
        UnaryOpKind::Tan => div(df, pow(cos(f.clone()), num(2.0))),
        UnaryOpKind::Cot => div(neg(df), pow(sin(f.clone()), num(2.0))),
        UnaryOpKind::Asin => div(df, sqrt_one_minus_square(f)),
        UnaryOpKind::Acos => div(neg(df), sqrt_one_minus_square(f)),
        UnaryOpKind::Atan => div(df, one_plus_square(f)),
        UnaryOpKind::Acot => div(neg(df), one_plus_square(f)),
    }
}
