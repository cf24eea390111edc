use super::{
    ast::Node,
    error::{kind, Error},
    token::op::{BinOp, BinOpKind},
    unary::parse_unary,
    Parse,
    Parser,
};

/// Parses a full expression with precedence climbing. Every binary operator is left-associative,
/// so an operator only binds its right operand tighter when the next operator's precedence is
/// strictly higher.
impl Parse for Node {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let mut lhs = parse_unary(input)?;

        while let Ok(op) = input.try_parse::<BinOp>() {
            // past an operator, any error is fatal
            let rhs = parse_unary(input)?;
            lhs = complete_rhs(input, lhs, op.kind, rhs)?;
        }

        Ok(lhs)
    }
}

/// Having parsed `lhs op rhs`, absorbs any following operators of higher precedence than `op`
/// into `rhs`, then builds the binary node.
fn complete_rhs(
    input: &mut Parser,
    lhs: Node,
    op: BinOpKind,
    mut rhs: Node,
) -> Result<Node, Error> {
    loop {
        let next_op = input.try_parse_then::<BinOp, _>(|next_op, input| {
            if next_op.precedence() > op.precedence() {
                Ok(())
            } else {
                Err(input.error(kind::NonFatal))
            }
        });

        match next_op {
            Ok(next_op) => {
                let next_rhs = parse_unary(input)?;
                rhs = complete_rhs(input, rhs, next_op.kind, next_rhs)?;
            },
            Err(_) => break,
        }
    }

    Ok(Node::binary(op, lhs, rhs))
}
