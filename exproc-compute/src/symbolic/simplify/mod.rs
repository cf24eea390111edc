//! Module to simplify expressions.
//!
//! [`simplify`] rewrites a tree bottom-up: the children of a node are simplified first, then
//! rules from [`rules`] are applied to the node itself until none of them apply. Constant
//! operands are folded into a single constant, and negations are normalized before the identity
//! rules run, so that `x - -x` still reaches `2 * x`.
//!
//! Equality between subtrees (for rules like `a - a = 0`) is syntactic, see
//! [`Node::same`].

pub mod rules;
pub mod step;

use crate::symbolic::step_collector::StepCollector;
use exproc_parser::Node;
use step::Step;
use tracing::debug;

/// Applies rules to the top of the node until none apply. The children must already be
/// simplified.
fn rewrite(mut node: Node, step_collector: &mut dyn StepCollector<Step>) -> Node {
    while let Some(new_node) = rules::all(&node, step_collector) {
        debug!(from = %node, to = %new_node, "applied simplification rule");
        node = new_node;
    }
    node
}

/// Simplifies the tree, reporting each rule that fires to the step collector.
pub fn simplify_with(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Node {
    let node = match node {
        Node::Variable(_) | Node::Constant(_) => return node.clone(),
        Node::Binary { op, lhs, rhs } => Node::binary(
            *op,
            simplify_with(lhs, step_collector),
            simplify_with(rhs, step_collector),
        ),
        Node::Unary { op, operand } => Node::unary(*op, simplify_with(operand, step_collector)),
    };

    rewrite(node, step_collector)
}

/// Simplifies the tree.
pub fn simplify(node: &Node) -> Node {
    simplify_with(node, &mut ())
}

/// Simplifies the tree, returning the steps taken in the order they were applied.
pub fn simplify_with_steps(node: &Node) -> (Node, Vec<Step>) {
    let mut steps = Vec::new();
    let simplified = simplify_with(node, &mut steps);
    (simplified, steps)
}

#[cfg(test)]
mod tests {
    use exproc_parser::{parse, parser::token::op::UnaryOpKind};
    use pretty_assertions::assert_eq;
    use super::*;

    /// Parses and simplifies the expression.
    fn simplified(source: &str) -> Node {
        simplify(&parse(source).unwrap())
    }

    #[test]
    fn constant_folding() {
        assert_eq!(simplified("(2 + 3) * 4"), Node::constant(20.0));
        assert_eq!(simplified("2 ^ 10 - 24"), Node::constant(1000.0));
        assert_eq!(simplified("-(3)"), Node::constant(-3.0));
        assert_eq!(simplified("cos(0) + x"), parse("1 + x").unwrap());
    }

    #[test]
    fn identity_elimination() {
        assert_eq!(simplified("x * 1"), parse("x").unwrap());
        assert_eq!(simplified("1 * x"), parse("x").unwrap());
        assert_eq!(simplified("0 + x"), parse("x").unwrap());
        assert_eq!(simplified("x + 0"), parse("x").unwrap());
        assert_eq!(simplified("x - 0"), parse("x").unwrap());
        assert_eq!(simplified("x / 1"), parse("x").unwrap());
        assert_eq!(simplified("x ^ 1"), parse("x").unwrap());
    }

    #[test]
    fn subtract_from_zero() {
        let node = simplified("0 - x");
        assert_eq!(node, Node::unary(UnaryOpKind::Neg, parse("x").unwrap()));
    }

    #[test]
    fn absorbing_elements() {
        assert_eq!(simplified("0 * sin(x)"), Node::constant(0.0));
        assert_eq!(simplified("sin(x) * 0"), Node::constant(0.0));
        assert_eq!(simplified("0 / (x + 1)"), Node::constant(0.0));
        assert_eq!(simplified("1 ^ x"), Node::constant(1.0));
        assert_eq!(simplified("x ^ 0"), Node::constant(1.0));
    }

    #[test]
    fn self_operations() {
        assert_eq!(simplified("x + x"), parse("2 * x").unwrap());
        assert_eq!(simplified("x * x"), parse("x ^ 2").unwrap());
        assert_eq!(simplified("sin(x) - sin(x)"), Node::constant(0.0));
        assert_eq!(simplified("(x + 1) / (x + 1)"), Node::constant(1.0));
    }

    #[test]
    fn equality_is_syntactic() {
        assert_eq!(simplified("x * y - y * x"), parse("x * y - y * x").unwrap());
    }

    #[test]
    fn sign_normalization() {
        assert_eq!(simplified("-x * -y"), parse("x * y").unwrap());
        assert_eq!(simplified("-x / -x"), Node::constant(1.0));
        assert_eq!(simplified("x + -x"), Node::constant(0.0));
        assert_eq!(simplified("x - -x"), parse("2 * x").unwrap());
        assert_eq!(simplified("0 - -x"), parse("x").unwrap());
    }

    #[test]
    fn nested() {
        assert_eq!(simplified("(x * 1 + 0) * (y ^ (3 - 2))"), parse("x * y").unwrap());
        assert_eq!(simplified("((x - x) + 2) * z"), parse("2 * z").unwrap());
    }

    #[test]
    fn no_rule_returns_copy() {
        let node = parse("sin(x) / y + z ^ 2").unwrap();
        assert_eq!(simplify(&node), node);
    }

    #[test]
    fn steps() {
        let (node, steps) = simplify_with_steps(&parse("(x + 0) * 1").unwrap());
        assert_eq!(node, parse("x").unwrap());
        assert_eq!(steps, vec![Step::AddZero, Step::MultiplyOne]);

        let (_, steps) = simplify_with_steps(&parse("0 - (2 - 3)").unwrap());
        assert_eq!(steps, vec![Step::FoldConstant, Step::FoldConstant]);
    }
}
