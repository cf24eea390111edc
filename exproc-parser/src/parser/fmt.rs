use std::fmt::{Display, Formatter, Result};
use super::{
    ast::{Node, EPSILON},
    token::op::{BinOpKind, UnaryOpKind},
};

/// A trait for types that can be formatted as LaTeX.
pub trait Latex {
    /// Format the value as LaTeX.
    fn fmt_latex(&self, f: &mut Formatter) -> Result;

    /// Wraps the value in a [`LatexFormatter`], which implements [`Display`].
    fn as_display(&self) -> LatexFormatter<'_, Self> {
        LatexFormatter(self)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Latex`].
pub struct LatexFormatter<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Display for LatexFormatter<'_, T>
where
    T: Latex,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_latex(f)
    }
}

/// Returns true if the node is a negative constant, which cannot be written without a leading
/// `-` and so must be bracketed wherever an operand is expected.
fn is_negative_constant(node: &Node) -> bool {
    node.as_constant().map_or(false, |value| value.is_sign_negative())
}

/// Returns true if the node parses back as a single atom.
fn is_atom(node: &Node) -> bool {
    matches!(node, Node::Variable(_) | Node::Constant(_)) && !is_negative_constant(node)
}

/// Returns true if the left operand of `op` must be parenthesized.
fn lhs_needs_parens(op: BinOpKind, lhs: &Node) -> bool {
    lhs.priority().map_or(false, |priority| priority < op.priority()) || is_negative_constant(lhs)
}

/// Returns true if the right operand of `op` must be parenthesized. Since every operator is
/// left-associative, equal priority also needs parentheses on this side.
fn rhs_needs_parens(op: BinOpKind, rhs: &Node) -> bool {
    rhs.priority().map_or(false, |priority| priority <= op.priority()) || is_negative_constant(rhs)
}

/// Writes the node, surrounded by parentheses if `parens` is true.
fn fmt_operand(f: &mut Formatter, node: &Node, parens: bool) -> Result {
    if parens {
        write!(f, "({})", node)
    } else {
        write!(f, "{}", node)
    }
}

/// Infix form of the tree, with the fewest parentheses needed to parse back to the same tree.
impl Display for Node {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Node::Variable(name) => f.write_str(name),
            Node::Constant(value) => write!(f, "{}", value),
            Node::Binary { op, lhs, rhs } => {
                fmt_operand(f, lhs, lhs_needs_parens(*op, lhs))?;
                write!(f, " {} ", op)?;
                fmt_operand(f, rhs, rhs_needs_parens(*op, rhs))
            },
            Node::Unary { op: UnaryOpKind::Neg, operand } => {
                f.write_str("-")?;
                fmt_operand(f, operand, !is_atom(operand))
            },
            Node::Unary { op, operand } => write!(f, "{}({})", op, operand),
        }
    }
}

/// Helper to format LaTeX with `\left( \right)` around the node if `parens` is true.
fn fmt_latex_operand(f: &mut Formatter, node: &Node, parens: bool) -> Result {
    if parens {
        write!(f, "\\left(")?;
        node.fmt_latex(f)?;
        write!(f, "\\right)")
    } else {
        node.fmt_latex(f)
    }
}

/// Returns true if the node is a negation or a negative constant.
fn is_negative(node: &Node) -> bool {
    matches!(node, Node::Unary { op: UnaryOpKind::Neg, .. }) || is_negative_constant(node)
}

/// Returns true if the node is a sum or difference.
fn is_term_level(node: &Node) -> bool {
    node.priority() == Some(BinOpKind::Add.priority())
}

/// Helper to format powers. The base is bracketed unless it is a variable or a non-negative
/// constant.
pub fn fmt_pow(f: &mut Formatter, base: &Node, exponent: &Node) -> Result {
    fmt_latex_operand(f, base, !is_atom(base))?;
    write!(f, "^{{")?;
    exponent.fmt_latex(f)?;
    write!(f, "}}")
}

/// Formats a constant, dropping the decimal point from integer values.
fn fmt_latex_constant(f: &mut Formatter, value: f64) -> Result {
    let rounded = value.round();
    if (value - rounded).abs() < EPSILON {
        // adding zero turns `-0` into `0`
        write!(f, "{:.0}", rounded + 0.0)
    } else {
        write!(f, "{}", value)
    }
}

impl Latex for Node {
    fn fmt_latex(&self, f: &mut Formatter) -> Result {
        match self {
            Node::Variable(name) => f.write_str(name),
            Node::Constant(value) => fmt_latex_constant(f, *value),
            Node::Binary { op: BinOpKind::Div, lhs, rhs } => {
                write!(f, "\\frac{{")?;
                lhs.fmt_latex(f)?;
                write!(f, "}}{{")?;
                rhs.fmt_latex(f)?;
                write!(f, "}}")
            },
            Node::Binary { op: BinOpKind::Pow, lhs, rhs } => fmt_pow(f, lhs, rhs),
            Node::Binary { op: BinOpKind::Mul, lhs, rhs } => {
                fmt_latex_operand(f, lhs, is_term_level(lhs))?;
                write!(f, " \\cdot ")?;
                fmt_latex_operand(f, rhs, is_term_level(rhs) || is_negative(rhs))
            },
            Node::Binary { op, lhs, rhs } => {
                lhs.fmt_latex(f)?;
                write!(f, " {} ", op)?;
                let parens = is_negative(rhs) || (*op == BinOpKind::Sub && is_term_level(rhs));
                fmt_latex_operand(f, rhs, parens)
            },
            Node::Unary { op: UnaryOpKind::Neg, operand } => {
                f.write_str("-")?;
                fmt_latex_operand(f, operand, is_term_level(operand) || is_negative(operand))
            },
            Node::Unary { op, operand } => {
                write!(f, "{}", op.latex())?;
                fmt_latex_operand(f, operand, true)
            },
        }
    }
}
