/// Lexical errors.
///
/// Defines the errors the lexer can report while scanning source text.
/// Lexical errors are accumulated during a scan rather than aborting it, so a
/// single pass reports every unexpected character it meets.
pub mod lex_error;
/// Syntactic errors.
///
/// Defines the errors the parser can report while building an expression
/// tree. Syntactic errors are fail-fast; the first one aborts the parse and
/// carries the offending token so the boundary can name it.
pub mod parse_error;
/// Line-tagged diagnostic rendering.
///
/// Converts the structured lexical and syntactic errors into the one-line
/// `[line N] Error...` form written to the error stream by the driver.
pub mod diagnostic;

pub use diagnostic::Diagnostic;
pub use lex_error::LexError;
pub use parse_error::ParseError;
