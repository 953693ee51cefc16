/// The token model shared by the lexer and parser.
///
/// Declares the `Token` value type, the closed `TokenKind` enumeration with
/// its fixed keyword table, and the `Literal` payload attached to certain
/// tokens.
pub mod token;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw source text left to right and produces the ordered
/// token sequence the parser consumes. This is the first of the two phases;
/// it always runs to completion before parsing begins.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, lexeme,
///   optional literal, and 1-based source line.
/// - Handles one-character lookahead for two-character operators, line
///   comments, string and number literals, identifiers, and keywords.
/// - Accumulates lexical errors without halting the scan.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the materialized token sequence with single-token
/// lookahead and a fixed-precedence recursive-descent grammar, producing one
/// expression tree or the first syntactic error.
///
/// # Responsibilities
/// - Folds left-associative binary operator chains into left-deep trees.
/// - Nests right-recursive prefix operators.
/// - Reports the offending token for failed primary productions and missing
///   delimiters.
pub mod parser;
