//! Simplification rules for sums and differences.

use crate::symbolic::{
    build::{mul, neg, num},
    simplify::{rules::do_binary, step::Step},
    step_collector::StepCollector,
};
use exproc_parser::{parser::token::op::BinOpKind, Node};

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOpKind::Add, |lhs, rhs| {
        if lhs.is_constant(0.0) {
            Some(rhs.clone())
        } else if rhs.is_constant(0.0) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::AddZero);
    Some(opt)
}

/// `a+a = 2*a`
pub fn add_self(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOpKind::Add, |lhs, rhs| {
        lhs.same(rhs).then(|| mul(num(2.0), lhs.clone()))
    })?;

    step_collector.push(Step::AddSelf);
    Some(opt)
}

/// `a-0 = a`
pub fn subtract_zero(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOpKind::Sub, |lhs, rhs| {
        rhs.is_constant(0.0).then(|| lhs.clone())
    })?;

    step_collector.push(Step::SubtractZero);
    Some(opt)
}

/// `0-a = -a`
pub fn subtract_from_zero(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOpKind::Sub, |lhs, rhs| {
        lhs.is_constant(0.0).then(|| neg(rhs.clone()))
    })?;

    step_collector.push(Step::SubtractFromZero);
    Some(opt)
}

/// `a-a = 0`
pub fn subtract_self(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOpKind::Sub, |lhs, rhs| {
        lhs.same(rhs).then(|| num(0.0))
    })?;

    step_collector.push(Step::SubtractSelf);
    Some(opt)
}

/// Applies all addition and subtraction rules.
pub fn all(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    add_zero(node, step_collector)
        .or_else(|| add_self(node, step_collector))
        .or_else(|| subtract_zero(node, step_collector))
        .or_else(|| subtract_from_zero(node, step_collector))
        .or_else(|| subtract_self(node, step_collector))
}
