use exproc_parser::Node;
use super::{error::UndefinedVariable, func::{apply_binary, apply_unary}};

/// Any type that can be evaluated to a number.
pub trait Eval {
    /// Evaluates the value with the given variable bindings.
    ///
    /// Variables are looked up by scanning `vars` from the start; the first binding with a
    /// matching name is used.
    fn eval(&self, vars: &[(&str, f64)]) -> Result<f64, UndefinedVariable>;

    /// Evaluates the value without any variables bound.
    fn eval_default(&self) -> Result<f64, UndefinedVariable> {
        self.eval(&[])
    }
}

impl Eval for Node {
    fn eval(&self, vars: &[(&str, f64)]) -> Result<f64, UndefinedVariable> {
        match self {
            Node::Variable(name) => vars.iter()
                .find(|(bound, _)| *bound == name.as_str())
                .map(|(_, value)| *value)
                .ok_or_else(|| UndefinedVariable::new(name, vars)),
            Node::Constant(value) => Ok(*value),
            Node::Binary { op, lhs, rhs } => {
                let lhs = lhs.eval(vars)?;
                let rhs = rhs.eval(vars)?;
                Ok(apply_binary(*op, lhs, rhs))
            },
            Node::Unary { op, operand } => Ok(apply_unary(*op, operand.eval(vars)?)),
        }
    }
}

/// Evaluates the tree with the given variable bindings. See [`Eval::eval`].
pub fn eval(node: &Node, vars: &[(&str, f64)]) -> Result<f64, UndefinedVariable> {
    node.eval(vars)
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_absolute_error_msg,
        afe_is_absolute_eq,
        assert_float_absolute_eq,
    };
    use exproc_parser::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    /// Parses and evaluates the expression.
    fn eval_str(source: &str, vars: &[(&str, f64)]) -> Result<f64, UndefinedVariable> {
        parse(source).unwrap().eval(vars)
    }

    #[test]
    fn constants() {
        assert_float_absolute_eq!(eval_str("(2 + 3) * 4", &[]).unwrap(), 20.0);
        assert_float_absolute_eq!(eval_str("2 ^ 3 ^ 2", &[]).unwrap(), 64.0);
        assert_float_absolute_eq!(eval_str("-2 ^ 2", &[]).unwrap(), 4.0);
        assert_float_absolute_eq!(parse("ln(1)").unwrap().eval_default().unwrap(), 0.0);
    }

    #[test]
    fn with_variables() {
        let value = eval_str("x * y - sin(x)", &[("x", 2.0), ("y", 3.0)]).unwrap();
        assert_float_absolute_eq!(value, 6.0 - 2.0_f64.sin());
    }

    #[test]
    fn first_binding_wins() {
        let value = eval_str("x", &[("x", 1.0), ("x", 2.0)]).unwrap();
        assert_float_absolute_eq!(value, 1.0);
    }

    #[test]
    fn undefined_variable() {
        let err = eval_str("x + y", &[("x", 1.0)]).unwrap_err();
        assert_eq!(err.name, "y");
        assert_eq!(err.to_string(), "undefined variable `y`; did you mean `x`?");
    }

    #[test]
    fn first_undefined_variable_is_reported() {
        let err = eval_str("a * (b + c)", &[("c", 1.0)]).unwrap_err();
        assert_eq!(err.name, "a");

        let err = eval_str("theta + b", &[("thetta", 1.0)]).unwrap_err();
        assert_eq!(err.name, "theta");
        assert_eq!(err.suggestions, vec!["thetta".to_string()]);
    }

    #[test]
    fn inverse_trig() {
        assert_float_absolute_eq!(eval_str("arcsin(1)", &[]).unwrap(), std::f64::consts::FRAC_PI_2);
        assert_float_absolute_eq!(eval_str("acos(1)", &[]).unwrap(), 0.0);
        assert_float_absolute_eq!(eval_str("arccot(0)", &[]).unwrap(), std::f64::consts::FRAC_PI_2);
    }
}
