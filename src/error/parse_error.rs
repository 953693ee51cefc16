use crate::{
    error::Diagnostic,
    syntax::token::{Token, TokenKind},
};

/// Represents all errors that can occur while parsing a token sequence.
///
/// Each variant carries the token the parser was looking at, so the boundary
/// can report the lexeme and line without the parser doing any formatting.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// No primary production matched the current token.
    ExpectedExpression {
        /// The token that no expression can start with.
        token: Token,
    },
    /// A required delimiter was missing.
    ExpectedToken {
        /// The token found instead of the expected one.
        token:    Token,
        /// The kind that was required here.
        expected: TokenKind,
        /// Context for the report, e.g. `Expect ')' after expression.`.
        message:  String,
    },
    /// The token sequence ended without its end-of-input terminator.
    UnexpectedEndOfInput {
        /// The source line where the sequence ended.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Diagnostic::from(self))
    }
}

impl std::error::Error for ParseError {}
