//! Constant folding.

use crate::{
    numerical::func::{apply_binary, apply_unary},
    symbolic::{simplify::step::Step, step_collector::StepCollector},
};
use exproc_parser::Node;

/// `2+3 = 5`, and likewise for every binary operator with two constant operands.
pub fn fold_binary(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let Node::Binary { op, lhs, rhs } = node else {
        return None;
    };
    let value = apply_binary(*op, lhs.as_constant()?, rhs.as_constant()?);

    step_collector.push(Step::FoldConstant);
    Some(Node::constant(value))
}

/// `sin(0) = 0`, and likewise for every unary operator with a constant operand.
pub fn fold_unary(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let Node::Unary { op, operand } = node else {
        return None;
    };
    let value = apply_unary(*op, operand.as_constant()?);

    step_collector.push(Step::FoldConstant);
    Some(Node::constant(value))
}

/// Applies all constant folding rules.
pub fn all(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    fold_binary(node, step_collector)
        .or_else(|| fold_unary(node, step_collector))
}
