pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. This allows us
/// to backtrack in case of an error.
///
/// Input the lexer cannot match becomes a [`TokenKind::Symbol`] token, so that the parser can
/// report it with its position.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind: result.unwrap_or(TokenKind::Symbol),
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                (TokenKind::Number, "1"),
                (TokenKind::Add, "+"),
                (TokenKind::Number, "2"),
            ],
        );
    }

    #[test]
    fn functions_and_names() {
        compare_tokens(
            "sin(x_1) / arccot y",
            [
                (TokenKind::Name, "sin"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Name, "x_1"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Div, "/"),
                (TokenKind::Name, "arccot"),
                (TokenKind::Name, "y"),
            ],
        );
    }

    #[test]
    fn numbers() {
        compare_tokens(
            "3.14 2. .5 1e10 6.02E-23",
            [
                (TokenKind::Number, "3.14"),
                (TokenKind::Number, "2."),
                (TokenKind::Number, ".5"),
                (TokenKind::Number, "1e10"),
                (TokenKind::Number, "6.02E-23"),
            ],
        );
    }

    #[test]
    fn unknown_symbol() {
        compare_tokens(
            "x $ 2",
            [
                (TokenKind::Name, "x"),
                (TokenKind::Symbol, "$"),
                (TokenKind::Number, "2"),
            ],
        );
    }

    #[test]
    fn spans_skip_whitespace() {
        let tokens = tokenize_complete("  x\t^\n2 ");
        let spans = tokens.iter().map(|token| token.span.clone()).collect::<Vec<_>>();
        assert_eq!(spans, vec![2..3, 4..5, 6..7]);
    }
}
