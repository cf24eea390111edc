//! The expression tree.

pub mod iter;

use iter::NodeIter;
use super::{error::kind::NameTooLong, token::op::{BinOpKind, UnaryOpKind}};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The maximum length of a variable name, in bytes.
pub const MAX_NAME_LEN: usize = 15;

/// Two constants closer than this are considered the same.
pub const EPSILON: f64 = 1e-7;

/// Returns true if the two numbers differ by less than [`EPSILON`].
pub fn is_same(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// A node of an expression tree. Each node exclusively owns its children.
///
/// Trees are never mutated after they are built; every transformation builds a new tree.
///
/// The [`PartialEq`] implementation is [`Node::same`], so two trees are equal if they are
/// syntactically identical up to [`EPSILON`] in their constants. It is not transitive, which is why
/// [`Eq`] is not implemented.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    /// A named variable, such as `x`.
    Variable(String),

    /// A numeric constant.
    Constant(f64),

    /// A binary operation, such as `lhs + rhs`.
    Binary {
        op: BinOpKind,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },

    /// A unary operation, such as `-operand` or `sin(operand)`.
    Unary {
        op: UnaryOpKind,
        operand: Box<Node>,
    },
}

impl Node {
    /// Creates a constant node.
    pub fn constant(value: f64) -> Self {
        Self::Constant(value)
    }

    /// Creates a variable node, failing if the name is longer than [`MAX_NAME_LEN`] bytes.
    pub fn variable(name: impl Into<String>) -> Result<Self, NameTooLong> {
        let name = name.into();
        if name.len() > MAX_NAME_LEN {
            return Err(NameTooLong { len: name.len() });
        }
        Ok(Self::Variable(name))
    }

    /// Creates a binary operation node that owns both operands.
    pub fn binary(op: BinOpKind, lhs: Node, rhs: Node) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Creates a unary operation node that owns its operand.
    pub fn unary(op: UnaryOpKind, operand: Node) -> Self {
        Self::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// Returns true if the two trees are syntactically identical, comparing constants with
    /// [`is_same`].
    ///
    /// `x * x` and `x ^ 2` are not the same tree.
    pub fn same(&self, other: &Node) -> bool {
        match (self, other) {
            (Self::Variable(a), Self::Variable(b)) => a == b,
            (Self::Constant(a), Self::Constant(b)) => is_same(*a, *b),
            (
                Self::Binary { op: op_a, lhs: lhs_a, rhs: rhs_a },
                Self::Binary { op: op_b, lhs: lhs_b, rhs: rhs_b },
            ) => op_a == op_b && lhs_a.same(lhs_b) && rhs_a.same(rhs_b),
            (
                Self::Unary { op: op_a, operand: operand_a },
                Self::Unary { op: op_b, operand: operand_b },
            ) => op_a == op_b && operand_a.same(operand_b),
            _ => false,
        }
    }

    /// If the node is a constant, returns its value.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Self::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// If the node is a variable, returns its name.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true if the node is a constant equal to `value`, within [`EPSILON`].
    pub fn is_constant(&self, value: f64) -> bool {
        self.as_constant().map_or(false, |c| is_same(c, value))
    }

    /// Returns the priority of the node's operator if it is a binary operation.
    pub fn priority(&self) -> Option<u8> {
        match self {
            Self::Binary { op, .. } => Some(op.priority()),
            _ => None,
        }
    }

    /// Returns true if the tree does not depend on the variable `var`.
    pub fn is_constant_wrt(&self, var: &str) -> bool {
        match self {
            Self::Variable(name) => name != var,
            Self::Constant(_) => true,
            Self::Binary { lhs, rhs, .. } => lhs.is_constant_wrt(var) && rhs.is_constant_wrt(var),
            Self::Unary { operand, .. } => operand.is_constant_wrt(var),
        }
    }

    /// Returns the number of nodes in the tree.
    pub fn size(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Returns an iterator that traverses the tree in left-to-right post-order (i.e.
    /// depth-first).
    pub fn post_order_iter(&self) -> NodeIter {
        NodeIter::new(self)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Self::Constant(value)
    }
}
