use std::ops::Range;
use super::{
    ast::MAX_NAME_LEN,
    error::{kind, Error},
    token::{Name, Number},
    Parse,
    Parser,
};

/// A number literal.
#[derive(Debug, Clone, PartialEq)]
pub struct LitNum {
    /// The value of the number literal.
    pub value: f64,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitNum {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let num = input.try_parse::<Number>()?;
        let value = num.lexeme.parse::<f64>()
            .map_err(|_| Error::new(vec![num.span.clone()], kind::InvalidNumber {
                lexeme: num.lexeme.clone(),
            }))?;

        Ok(Self { value, span: num.span })
    }
}

/// A symbol / identifier literal, naming a variable.
#[derive(Debug, Clone, PartialEq)]
pub struct LitSym {
    /// The name of the symbol.
    pub name: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitSym {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let name = input.try_parse::<Name>()?;
        if name.lexeme.len() > MAX_NAME_LEN {
            return Err(Error::new(vec![name.span], kind::NameTooLong {
                len: name.lexeme.len(),
            }));
        }

        Ok(Self {
            name: name.lexeme,
            span: name.span,
        })
    }
}
