//! Short constructors used to write rewrite rules.

use exproc_parser::{parser::token::op::{BinOpKind, UnaryOpKind}, Node};

pub(crate) fn num(value: f64) -> Node {
    Node::constant(value)
}

pub(crate) fn add(lhs: Node, rhs: Node) -> Node {
    Node::binary(BinOpKind::Add, lhs, rhs)
}

pub(crate) fn sub(lhs: Node, rhs: Node) -> Node {
    Node::binary(BinOpKind::Sub, lhs, rhs)
}

pub(crate) fn mul(lhs: Node, rhs: Node) -> Node {
    Node::binary(BinOpKind::Mul, lhs, rhs)
}

pub(crate) fn div(lhs: Node, rhs: Node) -> Node {
    Node::binary(BinOpKind::Div, lhs, rhs)
}

pub(crate) fn pow(lhs: Node, rhs: Node) -> Node {
    Node::binary(BinOpKind::Pow, lhs, rhs)
}

pub(crate) fn neg(operand: Node) -> Node {
    Node::unary(UnaryOpKind::Neg, operand)
}

pub(crate) fn ln(operand: Node) -> Node {
    Node::unary(UnaryOpKind::Ln, operand)
}

pub(crate) fn sin(operand: Node) -> Node {
    Node::unary(UnaryOpKind::Sin, operand)
}

pub(crate) fn cos(operand: Node) -> Node {
    Node::unary(UnaryOpKind::Cos, operand)
}
