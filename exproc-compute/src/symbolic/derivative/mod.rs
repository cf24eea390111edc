//! Symbolic differentiation.
//!
//! Every rule is total: any tree has a derivative tree. The rules do not try to keep their output
//! small (the product rule keeps both terms even if one side is constant, for example); run the
//! result through [`simplify`](super::simplify::simplify) to clean it up.

mod function;

use exproc_parser::{parser::token::op::BinOpKind, Node};
use super::build::{add, div, ln, mul, num, pow, sub};
use tracing::trace;

/// `(f * g)' = f * g' + g * f'`
fn product_rule(lhs: &Node, rhs: &Node, with: &str) -> Node {
    add(
        mul(lhs.clone(), derivative(rhs, with)),
        mul(rhs.clone(), derivative(lhs, with)),
    )
}

/// `(f / g)' = (f' * g - g' * f) / (g * g)`
fn quotient_rule(lhs: &Node, rhs: &Node, with: &str) -> Node {
    div(
        sub(
            mul(derivative(lhs, with), rhs.clone()),
            mul(derivative(rhs, with), lhs.clone()),
        ),
        mul(rhs.clone(), rhs.clone()),
    )
}

/// `(f ^ g)' = f ^ g * (g' * ln(f) + (f' / f) * g)`
///
/// This holds for any `f` and `g`, but introduces `ln(f)`, which is undefined where `f <= 0`.
/// [`derivative`] only uses it when both sides depend on the variable.
pub fn general_power_rule(base: &Node, exponent: &Node, with: &str) -> Node {
    mul(
        pow(base.clone(), exponent.clone()),
        add(
            mul(derivative(exponent, with), ln(base.clone())),
            mul(div(derivative(base, with), base.clone()), exponent.clone()),
        ),
    )
}

/// Differentiates `base ^ exponent`.
fn power_rule(base: &Node, exponent: &Node, with: &str) -> Node {
    if exponent.is_constant_wrt(with) {
        // (f ^ c)' = c * f ^ (c - 1) * f'
        mul(
            mul(exponent.clone(), pow(base.clone(), sub(exponent.clone(), num(1.0)))),
            derivative(base, with),
        )
    } else if base.is_constant_wrt(with) {
        // (c ^ g)' = c ^ g * ln(c) * g'
        mul(
            mul(pow(base.clone(), exponent.clone()), ln(base.clone())),
            derivative(exponent, with),
        )
    } else {
        general_power_rule(base, exponent, with)
    }
}

/// Computes the derivative of the tree with respect to the variable `with`. Other variables are
/// treated as constants.
pub fn derivative(f: &Node, with: &str) -> Node {
    trace!(node = %f, with, "differentiating");
    match f {
        Node::Constant(_) => num(0.0),
        Node::Variable(name) => num(if name == with { 1.0 } else { 0.0 }),
        Node::Binary { op, lhs, rhs } => match op {
            BinOpKind::Add => add(derivative(lhs, with), derivative(rhs, with)),
            BinOpKind::Sub => sub(derivative(lhs, with), derivative(rhs, with)),
            BinOpKind::Mul => product_rule(lhs, rhs, with),
            BinOpKind::Div => quotient_rule(lhs, rhs, with),
            BinOpKind::Pow => power_rule(lhs, rhs, with),
        },
        Node::Unary { op, operand } => function::unary_derivative(*op, operand, with),
    }
}
