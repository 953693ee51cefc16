use crate::error::Diagnostic;

/// Represents all errors that can occur during lexical analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// Met a character no lexeme can start with.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// Input ended inside a string literal.
    UnterminatedString {
        /// The source line reached when input ran out.
        line: usize,
    },
}

impl LexError {
    /// The 1-based source line the error is reported at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. } | Self::UnterminatedString { line } => *line,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Diagnostic::from(self))
    }
}

impl std::error::Error for LexError {}
