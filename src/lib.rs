//! # loxa
//!
//! loxa is the frontend of a small expression language, written in Rust.
//! It scans source text into tokens and parses the tokens into an abstract
//! syntax tree with a fixed-precedence recursive-descent grammar, reporting
//! line-accurate diagnostics for whatever it cannot recognize.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::error::Diagnostic;

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum that represents the syntactic
/// structure of source code as a tree, along with its canonical
/// fully-parenthesized serialization used by tests and tooling.
///
/// # Responsibilities
/// - Defines expression variants for binary, unary, grouping, and literal
///   forms.
/// - Gives every composite variant exclusive ownership of its children.
/// - Renders trees deterministically through `Display`.
pub mod ast;
/// Provides unified error types for scanning and parsing.
///
/// This module defines all errors that can be raised while lexing or parsing
/// source code, and the line-tagged diagnostic form they are rendered through
/// at the boundary.
///
/// # Responsibilities
/// - Defines error enums for the lexical and syntactic failure modes.
/// - Keeps error payloads structured; string formatting happens only in the
///   diagnostic renderer.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Turns source text into tokens and tokens into a tree.
///
/// This module ties together the token model, the lexer, and the parser. The
/// two phases are strictly sequential: a scan runs to completion and
/// materializes its whole token sequence before parsing starts.
///
/// # Responsibilities
/// - Declares the token and literal value types.
/// - Exposes `scan` and `parse`, the two pure entry points of the core.
pub mod syntax;

pub use crate::{
    ast::Expr,
    syntax::{lexer::scan, parser::core::parse},
};

/// Runs both phases over one source unit and collects its diagnostics.
///
/// The source is scanned to completion first; the parser then consumes the
/// materialized token sequence even when lexical errors were found, so a bad
/// character late in the input does not hide syntax reports from earlier
/// lines. The expression is returned only when the run produced no
/// diagnostic at all.
///
/// # Errors
/// Returns every diagnostic of the run, lexical reports first in scan order,
/// then the syntactic report if parsing failed.
///
/// # Examples
/// ```
/// use loxa::run;
///
/// let expression = run("1 + 2 * 3").expect("valid expression");
/// assert_eq!(expression.to_string(), "(+ 1 (* 2 3))");
///
/// let diagnostics = run("(1 + 2").expect_err("missing parenthesis");
/// assert_eq!(diagnostics[0].to_string(),
///            "[line 1] Error at end: Expect ')' after expression.");
/// ```
pub fn run(source: &str) -> Result<Expr, Vec<Diagnostic>> {
    let (tokens, lex_errors) = scan(source);
    let mut diagnostics: Vec<Diagnostic> = lex_errors.iter().map(Diagnostic::from).collect();

    match parse(&tokens) {
        Ok(expression) if diagnostics.is_empty() => Ok(expression),
        Ok(_) => Err(diagnostics),
        Err(error) => {
            diagnostics.push(Diagnostic::from(&error));
            Err(diagnostics)
        },
    }
}
