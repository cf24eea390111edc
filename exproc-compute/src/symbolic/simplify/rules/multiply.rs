//! Simplification rules for products and quotients.

use crate::symbolic::{
    build::{num, pow},
    simplify::{rules::do_binary, step::Step},
    step_collector::StepCollector,
};
use exproc_parser::{parser::token::op::BinOpKind, Node};

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOpKind::Mul, |lhs, rhs| {
        if lhs.is_constant(1.0) {
            Some(rhs.clone())
        } else if rhs.is_constant(1.0) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOpKind::Mul, |lhs, rhs| {
        (lhs.is_constant(0.0) || rhs.is_constant(0.0)).then(|| num(0.0))
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `a*a = a^2`
pub fn multiply_self(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOpKind::Mul, |lhs, rhs| {
        lhs.same(rhs).then(|| pow(lhs.clone(), num(2.0)))
    })?;

    step_collector.push(Step::MultiplySelf);
    Some(opt)
}

/// `0/a = 0`
///
/// This rule also applies when `a` could be zero.
pub fn divide_zero(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOpKind::Div, |lhs, _| {
        lhs.is_constant(0.0).then(|| num(0.0))
    })?;

    step_collector.push(Step::DivideZero);
    Some(opt)
}

/// `a/1 = a`
pub fn divide_one(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOpKind::Div, |lhs, rhs| {
        rhs.is_constant(1.0).then(|| lhs.clone())
    })?;

    step_collector.push(Step::DivideOne);
    Some(opt)
}

/// `a/a = 1`
pub fn divide_self(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOpKind::Div, |lhs, rhs| {
        lhs.same(rhs).then(|| num(1.0))
    })?;

    step_collector.push(Step::DivideSelf);
    Some(opt)
}

/// Applies all multiplication and division rules.
pub fn all(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    multiply_one(node, step_collector)
        .or_else(|| multiply_zero(node, step_collector))
        .or_else(|| multiply_self(node, step_collector))
        .or_else(|| divide_zero(node, step_collector))
        .or_else(|| divide_one(node, step_collector))
        .or_else(|| divide_self(node, step_collector))
}
