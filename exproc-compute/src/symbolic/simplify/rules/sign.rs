//! Sign normalization.
//!
//! These rules move negations out of the way of the identity rules, by peeling one level of `-`
//! off each operand. They run before the identity rules, and never fold constants themselves.

use crate::symbolic::{
    build::{add, div, mul, sub},
    simplify::{rules::{do_binary, do_unary, strip_neg}, step::Step},
    step_collector::StepCollector,
};
use exproc_parser::{parser::token::op::{BinOpKind, UnaryOpKind}, Node};

/// `-(-a) = a`
pub fn double_negation(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_unary(node, UnaryOpKind::Neg, |operand| {
        strip_neg(operand).cloned()
    })?;

    step_collector.push(Step::DoubleNegation);
    Some(opt)
}

/// `-a*-b = a*b`
pub fn multiply_negatives(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOpKind::Mul, |lhs, rhs| {
        Some(mul(strip_neg(lhs)?.clone(), strip_neg(rhs)?.clone()))
    })?;

    step_collector.push(Step::MultiplyNegatives);
    Some(opt)
}

/// `-a/-b = a/b`
pub fn divide_negatives(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOpKind::Div, |lhs, rhs| {
        Some(div(strip_neg(lhs)?.clone(), strip_neg(rhs)?.clone()))
    })?;

    step_collector.push(Step::DivideNegatives);
    Some(opt)
}

/// `a+(-b) = a-b`
pub fn add_negative(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOpKind::Add, |lhs, rhs| {
        Some(sub(lhs.clone(), strip_neg(rhs)?.clone()))
    })?;

    step_collector.push(Step::AddNegative);
    Some(opt)
}

/// `a-(-b) = a+b`
pub fn subtract_negative(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOpKind::Sub, |lhs, rhs| {
        Some(add(lhs.clone(), strip_neg(rhs)?.clone()))
    })?;

    step_collector.push(Step::SubtractNegative);
    Some(opt)
}

/// Applies all sign normalization rules.
pub fn all(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    double_negation(node, step_collector)
        .or_else(|| multiply_negatives(node, step_collector))
        .or_else(|| divide_negatives(node, step_collector))
        .or_else(|| add_negative(node, step_collector))
        .or_else(|| subtract_negative(node, step_collector))
}
