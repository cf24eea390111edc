use super::{
    ast::Node,
    error::{kind, Error},
    literal::{LitNum, LitSym},
    paren::Paren,
    token::op::{UnaryOpKind, FUNCTION_NAMES},
    Parser,
};
use crate::tokenizer::TokenKind;

/// The largest edit distance at which a known function name is suggested for an unknown one.
const SUGGESTION_DISTANCE: usize = 2;

/// Parses a number, a variable, or a parenthesized expression.
pub fn parse_atom(input: &mut Parser) -> Result<Node, Error> {
    let Some(token) = input.current_token().cloned() else {
        return Err(input.error(kind::UnexpectedEof));
    };

    match token.kind {
        TokenKind::Number => input.try_parse::<LitNum>().map(|num| Node::constant(num.value)),
        TokenKind::OpenParen => input.try_parse::<Paren>().map(|paren| paren.node),
        TokenKind::Name => {
            if UnaryOpKind::from_name(token.lexeme).is_some() {
                return Err(Error::new(vec![token.span], kind::ExpectedAtom {
                    found: token.kind,
                }));
            }

            // a name directly followed by `(` is an attempted function call
            if let Some(next) = input.peek_token() {
                if next.kind == TokenKind::OpenParen && next.span.start == token.span.end {
                    return Err(Error::new(vec![token.span], kind::UnknownFunction {
                        name: token.lexeme.to_owned(),
                        suggestions: suggest_functions(token.lexeme),
                    }));
                }
            }

            input.try_parse::<LitSym>().map(|sym| Node::Variable(sym.name))
        },
        TokenKind::Symbol => Err(Error::new(vec![token.span], kind::UnknownToken {
            lexeme: token.lexeme.to_owned(),
        })),
        found => Err(Error::new(vec![token.span], kind::ExpectedAtom { found })),
    }
}

/// Returns the known function names that are close to `name`.
fn suggest_functions(name: &str) -> Vec<&'static str> {
    FUNCTION_NAMES.iter()
        .copied()
        .filter(|candidate| levenshtein::levenshtein(name, candidate) <= SUGGESTION_DISTANCE)
        .collect()
}
