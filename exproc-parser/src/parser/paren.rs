use std::ops::Range;
use super::{
    ast::Node,
    error::{kind, Error},
    token::{CloseParen, OpenParen},
    Parse,
    Parser,
};

/// A parenthesized expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Paren {
    /// The inner expression.
    pub node: Node,

    /// The region of the source code that this expression was parsed from, including the
    /// parentheses.
    pub span: Range<usize>,
}

impl Parse for Paren {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let open_paren = input.try_parse::<OpenParen>()?;

        // running out of input inside the parentheses means the closing one is missing
        let node = input.try_parse::<Node>().map_err(|err| {
            if err.is::<kind::UnexpectedEof>() {
                Error::new(vec![open_paren.span.clone(), input.eof_span()], kind::UnclosedParenthesis)
            } else {
                err
            }
        })?;

        let close_paren = input.try_parse::<CloseParen>()
            .map_err(|_| Error::new(vec![open_paren.span.clone(), input.span()], kind::UnclosedParenthesis))?;

        Ok(Self {
            node,
            span: open_paren.span.start..close_paren.span.end,
        })
    }
}
