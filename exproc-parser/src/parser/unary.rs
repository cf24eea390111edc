use super::{
    ast::Node,
    atom::parse_atom,
    error::Error,
    token::op::UnaryOp,
    Parser,
};

/// Parses an optional prefix operator followed by an atom.
///
/// Only one prefix operator is allowed, so `--x` and `sin cos x` are errors. Parentheses are
/// needed to nest them: `-(-x)`, `sin(cos(x))`.
pub fn parse_unary(input: &mut Parser) -> Result<Node, Error> {
    match input.try_parse::<UnaryOp>() {
        Ok(op) => {
            let operand = parse_atom(input)?;
            Ok(Node::unary(op.kind, operand))
        },
        Err(_) => parse_atom(input),
    }
}
