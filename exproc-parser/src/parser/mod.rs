pub mod ast;
pub mod atom;
pub mod error;
pub mod expr;
pub mod fmt;
pub mod literal;
pub mod paren;
pub mod token;
pub mod unary;

use ast::Node;
use error::{Error, kind::{self, ErrorKind}};
use fmt::Latex;
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;

/// A high-level parser for infix expressions. This is the type to use to parse an arbitrary piece
/// of text into a [`Node`] tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Returns the token after the current token, without moving the cursor.
    pub fn peek_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor + 1)
    }

    /// Returns the next token to be parsed, then advances the cursor.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                // cloning is cheap: only Range<_> is cloned
                Ok(token.clone())
            },
            None => Err(self.error(kind::UnexpectedEof)),
        }
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Speculatively parses a value from the given stream of tokens, using a custom parsing
    /// function to parse the value.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Speculatively parses a value from the given stream of tokens, with a validation predicate.
    /// The value must parse successfully, **and** the predicate must return [`Ok`] for this
    /// function to return successfully.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_then<T: Parse, F>(&mut self, predicate: F) -> Result<T, Error>
    where
        F: FnOnce(&T, &Parser) -> Result<(), Error>,
    {
        self.try_parse_with_fn(|input| {
            let value = T::parse(input)?;
            predicate(&value, &*input)?;
            Ok(value)
        })
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        match self.current_token() {
            None => Ok(value),
            Some(token) if token.kind == TokenKind::Symbol => {
                Err(Error::new(vec![token.span.clone()], kind::UnknownToken {
                    lexeme: token.lexeme.to_owned(),
                }))
            },
            Some(token) => Err(Error::new(
                vec![token.span.start..self.eof_span().end],
                kind::ExpectedEof,
            )),
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    ///
    /// This function should be used by consumers of the library.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The precedence of a binary operation, in order from lowest precedence (evaluated last) to
/// highest precedence (evaluated first).
///
/// The discriminants are the operator priorities used by the printer and simplifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precedence {
    /// Any precedence.
    Any = 0,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term = 1,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor = 2,

    /// Precedence of exponentiation (`^`).
    Exp = 3,
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let left = *self as u8;
        let right = *other as u8;
        left.partial_cmp(&right)
    }
}

/// Parses the given text into an expression tree. The whole input must be consumed.
pub fn parse(text: &str) -> Result<Node, Error> {
    Parser::new(text).try_parse_full::<Node>()
}

/// Renders the tree as infix text that parses back into an equal tree.
pub fn print_infix(node: &Node) -> String {
    node.to_string()
}

/// Renders the tree as LaTeX math.
pub fn print_tex(node: &Node) -> String {
    node.as_display().to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use ast::Node;
    use token::op::{BinOpKind, UnaryOpKind};

    fn var(name: &str) -> Node {
        Node::variable(name).unwrap()
    }

    fn num(value: f64) -> Node {
        Node::constant(value)
    }

    /// Parses the input, expecting an error of kind `K`.
    fn parse_err<K: ErrorKind + 'static>(input: &str) -> Error {
        let err = parse(input).unwrap_err();
        assert!(err.is::<K>(), "expected {}, got {:?}", std::any::type_name::<K>(), err.kind);
        err
    }

    #[test]
    fn literal_int() {
        assert_eq!(parse("16").unwrap(), num(16.0));
    }

    #[test]
    fn literal_float() {
        assert_eq!(parse("3.14").unwrap(), num(3.14));
        assert_eq!(parse("1.5e3").unwrap(), num(1500.0));
    }

    #[test]
    fn literal_symbol() {
        assert_eq!(parse("long_name_1").unwrap(), var("long_name_1"));
    }

    #[test]
    fn binary_precedence() {
        let expr = parse("1 + 2 * x").unwrap();
        assert_eq!(expr, Node::binary(
            BinOpKind::Add,
            num(1.0),
            Node::binary(BinOpKind::Mul, num(2.0), var("x")),
        ));
    }

    #[test]
    fn binary_left_associativity() {
        let expr = parse("a - b - c").unwrap();
        assert_eq!(expr, Node::binary(
            BinOpKind::Sub,
            Node::binary(BinOpKind::Sub, var("a"), var("b")),
            var("c"),
        ));
    }

    #[test]
    fn exponent_left_associativity() {
        let expr = parse("2 ^ 3 ^ x").unwrap();
        assert_eq!(expr, Node::binary(
            BinOpKind::Pow,
            Node::binary(BinOpKind::Pow, num(2.0), num(3.0)),
            var("x"),
        ));
    }

    #[test]
    fn mixed_precedence() {
        let expr = parse("a + b ^ c * d - e / f").unwrap();
        assert_eq!(expr, Node::binary(
            BinOpKind::Sub,
            Node::binary(
                BinOpKind::Add,
                var("a"),
                Node::binary(
                    BinOpKind::Mul,
                    Node::binary(BinOpKind::Pow, var("b"), var("c")),
                    var("d"),
                ),
            ),
            Node::binary(BinOpKind::Div, var("e"), var("f")),
        ));
    }

    #[test]
    fn parenthesized() {
        let expr = parse("(x + 3) / (1000 - 7)").unwrap();
        assert_eq!(expr, Node::binary(
            BinOpKind::Div,
            Node::binary(BinOpKind::Add, var("x"), num(3.0)),
            Node::binary(BinOpKind::Sub, num(1000.0), num(7.0)),
        ));
    }

    #[test]
    fn unary_binds_tighter_than_power() {
        let expr = parse("-x ^ 2").unwrap();
        assert_eq!(expr, Node::binary(
            BinOpKind::Pow,
            Node::unary(UnaryOpKind::Neg, var("x")),
            num(2.0),
        ));
    }

    #[test]
    fn unary_in_operand_position() {
        let expr = parse("2 * -3").unwrap();
        assert_eq!(expr, Node::binary(
            BinOpKind::Mul,
            num(2.0),
            Node::unary(UnaryOpKind::Neg, num(3.0)),
        ));
    }

    #[test]
    fn functions() {
        let expr = parse("sin(x ^ 2) + arccot y - ln(2)").unwrap();
        assert_eq!(expr, Node::binary(
            BinOpKind::Sub,
            Node::binary(
                BinOpKind::Add,
                Node::unary(UnaryOpKind::Sin, Node::binary(BinOpKind::Pow, var("x"), num(2.0))),
                Node::unary(UnaryOpKind::Acot, var("y")),
            ),
            Node::unary(UnaryOpKind::Ln, num(2.0)),
        ));
    }

    #[test]
    fn function_aliases() {
        assert_eq!(parse("asin(x)").unwrap(), parse("arcsin(x)").unwrap());
        assert_eq!(parse("acot x").unwrap(), parse("arccot x").unwrap());
    }

    #[test]
    fn function_prefix_is_not_split() {
        assert_eq!(parse("sinx").unwrap(), var("sinx"));
    }

    #[test]
    fn nested_functions() {
        let expr = parse("sin(cos(x))").unwrap();
        assert_eq!(expr, Node::unary(
            UnaryOpKind::Sin,
            Node::unary(UnaryOpKind::Cos, var("x")),
        ));
    }

    #[test]
    fn whitespace_is_insignificant() {
        assert_eq!(parse("  (x+3)\n*\t2 ").unwrap(), parse("(x + 3) * 2").unwrap());
    }

    #[test]
    fn unclosed_paren_at_eof() {
        let err = parse_err::<kind::UnclosedParenthesis>("(1 + ");
        assert_eq!(err.spans[0], 0..1);
    }

    #[test]
    fn unclosed_paren_before_other_token() {
        let err = parse_err::<kind::UnclosedParenthesis>("(1 + 2 3");
        assert_eq!(err.spans, vec![0..1, 7..8]);
    }

    #[test]
    fn unclosed_nested_paren() {
        let err = parse_err::<kind::UnclosedParenthesis>("((x)");
        assert_eq!(err.spans[0], 0..1);
    }

    #[test]
    fn unexpected_eof() {
        parse_err::<kind::UnexpectedEof>("1 +");
        parse_err::<kind::UnexpectedEof>("");
        parse_err::<kind::UnexpectedEof>("sin");
    }

    #[test]
    fn expected_atom() {
        let err = parse_err::<kind::ExpectedAtom>("1 + )");
        assert_eq!(err.spans[0], 4..5);
        parse_err::<kind::ExpectedAtom>("* 2");
        parse_err::<kind::ExpectedAtom>("sin sin x");
        parse_err::<kind::ExpectedAtom>("--x");
    }

    #[test]
    fn expected_eof() {
        let err = parse_err::<kind::ExpectedEof>("1 2 3");
        assert_eq!(err.spans[0], 2..5);
        parse_err::<kind::ExpectedEof>("x)");
    }

    #[test]
    fn unknown_token() {
        let err = parse_err::<kind::UnknownToken>("1 + $");
        assert_eq!(err.spans[0], 4..5);
        parse_err::<kind::UnknownToken>("x # y");
    }

    #[test]
    fn name_too_long() {
        assert_eq!(parse("abcdefghijklmno").unwrap(), var("abcdefghijklmno"));

        let err = parse_err::<kind::NameTooLong>("1 + abcdefghijklmnop");
        assert_eq!(err.spans[0], 4..20);
        assert_eq!(err.downcast_ref::<kind::NameTooLong>(), Some(&kind::NameTooLong { len: 16 }));
    }

    #[test]
    fn unknown_function() {
        let err = parse_err::<kind::UnknownFunction>("sine(x)");
        let kind = err.downcast_ref::<kind::UnknownFunction>().unwrap();
        assert_eq!(kind.name, "sine");
        assert!(kind.suggestions.contains(&"sin"));

        // a space separates a variable from a parenthesized expression
        parse_err::<kind::ExpectedEof>("f (x)");
    }

    #[test]
    fn error_report_mentions_parenthesis() {
        let source = "(1 + ";
        let err = parse(source).unwrap_err();
        let rendered = err.render("input", source);
        let plain = String::from_utf8(strip_ansi_escapes::strip(rendered)).unwrap();
        assert!(plain.contains("missing closing parenthesis"));
    }
}
