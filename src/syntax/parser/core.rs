use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    syntax::{
        parser::binary::parse_equality,
        token::{Token, TokenKind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses one expression from a scanned token sequence.
///
/// This is the public entry point for parsing. The sequence is expected to
/// end with the end-of-input token the lexer always appends; parsing stops
/// after one top-level expression and does not inspect what follows it.
///
/// # Parameters
/// - `tokens`: The token sequence produced by [`crate::syntax::lexer::scan`].
///
/// # Returns
/// The expression tree, or the first syntactic error.
///
/// # Errors
/// Returns a `ParseError` when no expression can be built from the sequence;
/// the partially built tree is discarded.
///
/// # Example
/// ```
/// use loxa::syntax::{lexer::scan, parser::core::parse};
///
/// let (tokens, errors) = scan("1 + 2 * 3");
/// assert!(errors.is_empty());
///
/// let expression = parse(&tokens).expect("valid expression");
/// assert_eq!(expression.to_string(), "(+ 1 (* 2 3))");
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Expr> {
    parse_expression(&mut tokens.iter().peekable())
}

/// Parses a full expression.
///
/// This is the root of the grammar. It begins at the lowest-precedence
/// level, equality, and recursively descends through the precedence
/// hierarchy.
///
/// Grammar: `expression := equality`
///
/// # Parameters
/// - `tokens`: Token iterator with single-token lookahead.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_equality(tokens)
}

/// Discards tokens up to the next statement boundary.
///
/// After a syntax error, a statement-level grammar resumes parsing at a
/// reliable boundary: just past a semicolon, or just before a keyword that
/// starts a new statement. The offending token is discarded outright.
///
/// With only the expression grammar in place there is a single top-level
/// parse attempt, so nothing calls this yet; it is kept separate so that
/// statement support can activate it without changing the expression entry
/// point.
pub fn synchronize<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    let mut previous = tokens.next();

    while let Some(token) = tokens.peek() {
        if let Some(previous) = previous
           && previous.kind == TokenKind::Semicolon
        {
            return;
        }

        match token.kind {
            TokenKind::Class
            | TokenKind::Fun
            | TokenKind::Var
            | TokenKind::For
            | TokenKind::If
            | TokenKind::While
            | TokenKind::Print
            | TokenKind::Return
            | TokenKind::Eof => return,
            _ => previous = tokens.next(),
        }
    }
}
