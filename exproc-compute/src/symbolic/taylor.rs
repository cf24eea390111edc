//! Taylor expansion.
//!
//! Each term of the expansion needs the next derivative of the function, which is computed by
//! differentiating the previous one. Derivative trees grow quickly with each step, so by default
//! every derivative is simplified before it is differentiated again. Turning that off with
//! [`TaylorOptions::simplify_between_steps`] produces the same polynomial (the result is always
//! simplified at the end), but can be much slower for higher orders.

use exproc_parser::Node;
use super::{
    build::{add, div, mul, num, pow, sub},
    derivative::derivative,
    simplify::simplify,
    substitute::substitute,
};
use tracing::debug;

/// Options for [`taylor_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaylorOptions {
    /// Simplify each derivative before differentiating it again.
    pub simplify_between_steps: bool,
}

impl Default for TaylorOptions {
    fn default() -> Self {
        Self {
            simplify_between_steps: true,
        }
    }
}

/// Builds the Taylor polynomial of `f` in `var` around `point`, up to and including the term of
/// degree `order`:
///
/// ```text
/// f(point) + sum for k = 1 to order of f⁽ᵏ⁾(point) / k! * (var - point)^k
/// ```
///
/// The result is simplified.
pub fn taylor(f: &Node, var: &str, point: &Node, order: usize) -> Node {
    taylor_with(f, var, point, order, TaylorOptions::default())
}

/// [`taylor`] with explicit options.
pub fn taylor_with(
    f: &Node,
    var: &str,
    point: &Node,
    order: usize,
    options: TaylorOptions,
) -> Node {
    let at_point = |node: &Node| substitute(node, &[(var, point)]);
    let offset = sub(Node::Variable(var.to_owned()), point.clone());

    let mut current = f.clone();
    let mut polynomial = at_point(&current);
    let mut factorial = 1.0;

    for k in 1..=order {
        current = derivative(&current, var);
        if options.simplify_between_steps {
            current = simplify(&current);
        }
        debug!(k, size = current.size(), "computed derivative for taylor term");

        factorial *= k as f64;
        let term = mul(
            div(at_point(&current), num(factorial)),
            pow(offset.clone(), num(k as f64)),
        );
        polynomial = add(polynomial, term);
    }

    simplify(&polynomial)
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_absolute_error_msg,
        afe_is_absolute_eq,
        assert_float_absolute_eq,
    };
    use crate::numerical::eval::Eval;
    use exproc_parser::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn order_zero_is_simplified_value() {
        let f = parse("sin(x) * x + cos(x) ^ 2 - y").unwrap();
        let zero = Node::constant(0.0);
        assert_eq!(
            taylor(&f, "x", &zero, 0),
            simplify(&substitute(&f, &[("x", &zero)])),
        );
    }

    #[test]
    fn polynomial_is_exact() {
        let f = parse("x ^ 3 - 2 * x + 1").unwrap();
        let series = taylor(&f, "x", &Node::constant(1.0), 3);
        for x in [-2.0, 0.0, 0.5, 3.0] {
            let expected = f.eval(&[("x", x)]).unwrap();
            assert_float_absolute_eq!(series.eval(&[("x", x)]).unwrap(), expected, 1e-9);
        }
    }

    #[test]
    fn sine_around_zero() {
        let f = parse("sin(x)").unwrap();
        let series = taylor(&f, "x", &Node::constant(0.0), 7);
        let x = 0.3_f64;
        assert_float_absolute_eq!(series.eval(&[("x", x)]).unwrap(), x.sin(), 1e-8);
    }

    #[test]
    fn exponential_around_symbolic_point() {
        let f = parse("2.718281828459045 ^ x").unwrap();
        let a = parse("a").unwrap();
        let series = taylor(&f, "x", &a, 6);
        let value = series.eval(&[("x", 1.1), ("a", 1.0)]).unwrap();
        assert_float_absolute_eq!(value, 1.1_f64.exp(), 1e-6);
    }

    #[test]
    fn simplifying_between_steps_does_not_change_values() {
        let f = parse("ln(1 + x) / (2 - x)").unwrap();
        let point = Node::constant(0.0);
        let fast = taylor(&f, "x", &point, 4);
        let slow = taylor_with(&f, "x", &point, 4, TaylorOptions { simplify_between_steps: false });
        for x in [-0.2, 0.1, 0.3] {
            let fast = fast.eval(&[("x", x)]).unwrap();
            let slow = slow.eval(&[("x", x)]).unwrap();
            assert_float_absolute_eq!(fast, slow, 1e-9);
        }
    }
}
