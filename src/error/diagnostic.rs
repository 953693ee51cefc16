use crate::{
    error::{LexError, ParseError},
    syntax::token::{Token, TokenKind},
};

/// A rendered, line-tagged error report.
///
/// Diagnostics are the boundary between the structured errors the lexer and
/// parser return and the one-line messages the driver writes to its error
/// stream. The `location` is empty for lexical errors, ` at end` when the
/// offending token is the end-of-input marker, and ` at '<lexeme>'` otherwise.
///
/// # Example
/// ```
/// use loxa::error::Diagnostic;
///
/// let diagnostic = Diagnostic { line:     1,
///                               location: " at ')'".to_string(),
///                               message:  "Expect expression.".to_string(), };
/// assert_eq!(diagnostic.to_string(), "[line 1] Error at ')': Expect expression.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The 1-based source line the report points at.
    pub line:     usize,
    /// Where on the line the report points, already formatted.
    pub location: String,
    /// What went wrong.
    pub message:  String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[line {}] Error{}: {}", self.line, self.location, self.message)
    }
}

/// Formats the location text for a token-carrying report.
fn token_location(token: &Token) -> String {
    if token.kind == TokenKind::Eof {
        " at end".to_string()
    } else {
        format!(" at '{}'", token.lexeme)
    }
}

impl From<&LexError> for Diagnostic {
    fn from(error: &LexError) -> Self {
        let message = match error {
            LexError::UnexpectedCharacter { .. } => "Unexpected character.",
            LexError::UnterminatedString { .. } => "Unterminated string.",
        };

        Self { line:     error.line(),
               location: String::new(),
               message:  message.to_string(), }
    }
}

impl From<&ParseError> for Diagnostic {
    fn from(error: &ParseError) -> Self {
        match error {
            ParseError::ExpectedExpression { token } => {
                Self { line:     token.line,
                       location: token_location(token),
                       message:  "Expect expression.".to_string(), }
            },
            ParseError::ExpectedToken { token, message, .. } => {
                Self { line:     token.line,
                       location: token_location(token),
                       message:  message.clone(), }
            },
            ParseError::UnexpectedEndOfInput { line } => {
                Self { line:     *line,
                       location: " at end".to_string(),
                       message:  "Unexpected end of input.".to_string(), }
            },
        }
    }
}
