//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the node to simplify as an argument, and
//! returns `Some(node)` with the rewritten node if the rule applies, or `None` if the rule does
//! not apply. Rules only look at the top of the node; its children are expected to be simplified
//! already.

pub mod add;
pub mod fold;
pub mod multiply;
pub mod power;
pub mod sign;

use crate::symbolic::step_collector::StepCollector;
use exproc_parser::{parser::token::op::{BinOpKind, UnaryOpKind}, Node};
use super::step::Step;

/// If the node is a binary operation with the given operator, calls the given transformation
/// function with the left and right-hand-side.
///
/// Returns `Some(node)` with the transformed node if a transformation was applied.
pub(crate) fn do_binary(
    node: &Node,
    target: BinOpKind,
    f: impl Fn(&Node, &Node) -> Option<Node>,
) -> Option<Node> {
    match node {
        Node::Binary { op, lhs, rhs } if *op == target => f(lhs, rhs),
        _ => None,
    }
}

/// If the node is a unary operation with the given operator, calls the given transformation
/// function with the operand.
///
/// Returns `Some(node)` with the transformed node if a transformation was applied.
pub(crate) fn do_unary(
    node: &Node,
    target: UnaryOpKind,
    f: impl Fn(&Node) -> Option<Node>,
) -> Option<Node> {
    match node {
        Node::Unary { op, operand } if *op == target => f(operand),
        _ => None,
    }
}

/// If the node is a negation, returns its operand.
pub(crate) fn strip_neg(node: &Node) -> Option<&Node> {
    match node {
        Node::Unary { op: UnaryOpKind::Neg, operand } => Some(&**operand),
        _ => None,
    }
}

/// Applies all rules, in this order: constant folding, sign normalization, then the identity
/// rules for each operator.
pub fn all(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    fold::all(node, step_collector)
        .or_else(|| sign::all(node, step_collector))
        .or_else(|| add::all(node, step_collector))
        .or_else(|| multiply::all(node, step_collector))
        .or_else(|| power::all(node, step_collector))
}
