//! Numeric meaning of each operator.

use exproc_parser::parser::token::op::{BinOpKind, UnaryOpKind};
use std::f64::consts::FRAC_PI_2;

/// Applies a binary operator to two numbers.
pub fn apply_binary(op: BinOpKind, lhs: f64, rhs: f64) -> f64 {
    match op {
        BinOpKind::Add => lhs + rhs,
        BinOpKind::Sub => lhs - rhs,
        BinOpKind::Mul => lhs * rhs,
        BinOpKind::Div => lhs / rhs,
        BinOpKind::Pow => lhs.powf(rhs),
    }
}

/// Applies a unary operator to a number.
///
/// `cot(x)` is `1 / tan(x)`, and `arccot(x)` is `arctan(-x) + π/2`, which takes values in
/// `(0, π)`.
pub fn apply_unary(op: UnaryOpKind, x: f64) -> f64 {
    match op {
        UnaryOpKind::Neg => -x,
        UnaryOpKind::Ln => x.ln(),
        UnaryOpKind::Sin => x.sin(),
        UnaryOpKind::Cos => x.cos(),
        UnaryOpKind::Tan => x.tan(),
        UnaryOpKind::Cot => 1.0 / x.tan(),
        UnaryOpKind::Asin => x.asin(),
        UnaryOpKind::Acos => x.acos(),
        UnaryOpKind::Atan => x.atan(),
        UnaryOpKind::Acot => (-x).atan() + FRAC_PI_2,
    }
}
