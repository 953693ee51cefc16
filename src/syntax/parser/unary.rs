use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    syntax::{
        parser::core::{ParseResult, parse_expression},
        token::{Literal, Token, TokenKind},
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators:
/// - `!` (logical not)
/// - `-` (numeric negation)
///
/// The rule is right-recursive, so chained prefixes such as `!!ready` or
/// `--5` nest correctly. Without a prefix operator the function delegates to
/// [`parse_primary`].
///
/// Grammar: `unary := ("!" | "-") unary | primary`
///
/// # Parameters
/// - `tokens`: Token iterator with single-token lookahead.
///
/// # Returns
/// An `Expr::Unary` node, or the primary expression itself.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    if let Some(token) = tokens.peek()
       && matches!(token.kind, TokenKind::Bang | TokenKind::Minus)
    {
        let operator = (*token).clone();
        tokens.next();
        let right = parse_unary(tokens)?;
        return Ok(Expr::Unary { operator,
                                right: Box::new(right) });
    }

    parse_primary(tokens)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar:
/// - number and string literals, carrying the token's literal payload
/// - the keyword literals `true`, `false`, and `nil`, carrying their spelling
/// - parenthesized groupings
///
/// This is the sole production that can fail outright: a token none of these
/// forms start with is reported as the offending token without being
/// consumed. There is no backtracking; once `(` commits to a grouping, the
/// closing `)` is required.
///
/// Grammar:
/// ```text
///     primary := NUMBER | STRING | "true" | "false" | "nil"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`].
///
/// # Errors
/// Returns a `ParseError` if:
/// - the current token cannot start an expression,
/// - a grouping is missing its closing parenthesis.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let Some(token) = tokens.peek() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };

    match token.kind {
        TokenKind::False | TokenKind::True | TokenKind::Nil => {
            let spelling = token.lexeme.clone();
            tokens.next();
            Ok(Expr::Literal { value: Some(Literal::Identifier(spelling)) })
        },
        TokenKind::Number | TokenKind::String => {
            let value = token.literal.clone();
            tokens.next();
            Ok(Expr::Literal { value })
        },
        TokenKind::LeftParen => {
            tokens.next();
            let expression = parse_expression(tokens)?;
            match tokens.peek() {
                Some(token) if token.kind == TokenKind::RightParen => {
                    tokens.next();
                    Ok(Expr::Grouping { expression: Box::new(expression) })
                },
                Some(token) => {
                    Err(ParseError::ExpectedToken { token:    (*token).clone(),
                                                    expected: TokenKind::RightParen,
                                                    message:
                                                        "Expect ')' after expression.".to_string(), })
                },
                None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
            }
        },
        _ => Err(ParseError::ExpectedExpression { token: (*token).clone() }),
    }
}
