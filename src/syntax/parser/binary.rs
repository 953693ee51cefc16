use std::iter::Peekable;

use crate::{
    ast::Expr,
    syntax::{
        parser::{core::ParseResult, unary::parse_unary},
        token::{Token, TokenKind},
    },
};

/// Parses equality expressions.
///
/// Handles left-associative binary operators: `!=` and `==`.
///
/// The rule is: `equality := comparison (("!=" | "==") comparison)*`
///
/// # Parameters
/// - `tokens`: Token iterator with single-token lookahead.
///
/// # Returns
/// An `Expr::Binary` tree folding comparison-level operands to the left.
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_comparison(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && matches!(token.kind, TokenKind::BangEqual | TokenKind::EqualEqual)
        {
            let operator = (*token).clone();
            tokens.next();
            let right = parse_comparison(tokens)?;
            left = Expr::Binary { left: Box::new(left),
                                  operator,
                                  right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses comparison expressions.
///
/// Handles left-associative relational operators: `>`, `>=`, `<`, `<=`.
///
/// The rule is: `comparison := term ((">" | ">=" | "<" | "<=") term)*`
///
/// # Parameters
/// - `tokens`: Token iterator with single-token lookahead.
///
/// # Returns
/// A binary expression tree combining term-level operands.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_term(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && matches!(token.kind,
                       TokenKind::Greater
                       | TokenKind::GreaterEqual
                       | TokenKind::Less
                       | TokenKind::LessEqual)
        {
            let operator = (*token).clone();
            tokens.next();
            let right = parse_term(tokens)?;
            left = Expr::Binary { left: Box::new(left),
                                  operator,
                                  right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `-` and `+`.
///
/// The rule is: `term := factor (("-" | "+") factor)*`
///
/// # Parameters
/// - `tokens`: Token iterator with single-token lookahead.
///
/// # Returns
/// A binary expression tree combining factor-level operands.
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_factor(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && matches!(token.kind, TokenKind::Minus | TokenKind::Plus)
        {
            let operator = (*token).clone();
            tokens.next();
            let right = parse_factor(tokens)?;
            left = Expr::Binary { left: Box::new(left),
                                  operator,
                                  right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// Handles left-associative binary operators: `/` and `*`. A chain such as
/// `8 / 4 / 2` folds to `(8 / 4) / 2`.
///
/// The rule is: `factor := unary (("/" | "*") unary)*`
///
/// # Parameters
/// - `tokens`: Token iterator with single-token lookahead.
///
/// # Returns
/// A binary expression tree combining unary-level operands.
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_unary(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && matches!(token.kind, TokenKind::Slash | TokenKind::Star)
        {
            let operator = (*token).clone();
            tokens.next();
            let right = parse_unary(tokens)?;
            left = Expr::Binary { left: Box::new(left),
                                  operator,
                                  right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}
