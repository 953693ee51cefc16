/// Parser entry points and error recovery.
///
/// Holds the public `parse` entry, the `ParseResult` alias, the root
/// `expression` rule, and the statement-boundary synchronization routine
/// reserved for a future statement grammar.
pub mod core;

/// Binary operator levels.
///
/// One function per precedence level, from equality down to factor, each
/// folding its operators left-associatively over the next-higher level.
pub mod binary;

/// Unary operators and primary expressions.
///
/// The right-recursive prefix rule and the `primary` production for literals
/// and groupings, the only production that can fail outright.
pub mod unary;
