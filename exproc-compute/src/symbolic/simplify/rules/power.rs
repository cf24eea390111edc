//! Simplification rules for power expressions.

use crate::symbolic::{
    build::num,
    simplify::{rules::do_binary, step::Step},
    step_collector::StepCollector,
};
use exproc_parser::{parser::token::op::BinOpKind, Node};

/// `1^a = 1`
pub fn power_one_left(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOpKind::Pow, |lhs, _| {
        lhs.is_constant(1.0).then(|| num(1.0))
    })?;

    step_collector.push(Step::PowerOneLeft);
    Some(opt)
}

/// `a^0 = 1`
///
/// `0^0` is defined as `1` by this rule, though it may be undefined in other mathematical
/// contexts.
pub fn power_zero(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOpKind::Pow, |_, rhs| {
        rhs.is_constant(0.0).then(|| num(1.0))
    })?;

    step_collector.push(Step::PowerZero);
    Some(opt)
}

/// `a^1 = a`
pub fn power_one(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOpKind::Pow, |lhs, rhs| {
        rhs.is_constant(1.0).then(|| lhs.clone())
    })?;

    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// Applies all power rules.
pub fn all(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    power_one_left(node, step_collector)
        .or_else(|| power_zero(node, step_collector))
        .or_else(|| power_one(node, step_collector))
}
