use crate::syntax::token::{Literal, Token};

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers the four expression forms of the language: binary and unary
/// operator applications, parenthesized groupings, and literals. Each
/// composite variant exclusively owns its child expressions, so a tree has no
/// shared or back references and is dropped structurally. Once built by the
/// parser, a tree is never mutated.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A binary operation such as `1 + 2`.
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator token, carrying its lexeme and line.
        operator: Token,
        /// Right operand.
        right:    Box<Self>,
    },
    /// A parenthesized expression.
    Grouping {
        /// The inner expression.
        expression: Box<Self>,
    },
    /// A literal value.
    ///
    /// `None` is distinct from a `nil` literal: the `nil` keyword parses to
    /// an identifier payload spelling `nil`, while an absent value renders
    /// the same way without carrying one.
    Literal {
        /// The literal payload, if any.
        value: Option<Literal>,
    },
    /// A prefix operation such as `-x` or `!ready`.
    Unary {
        /// The operator token.
        operator: Token,
        /// The operand.
        right:    Box<Self>,
    },
}

impl std::fmt::Display for Expr {
    /// Renders the canonical fully-parenthesized prefix form.
    ///
    /// This serialization exists for tests and tooling; it is a one-way
    /// transform, not re-ingestible source.
    ///
    /// # Example
    /// ```
    /// let expression = loxa::run("-123 * (45.67)").expect("valid expression");
    /// assert_eq!(expression.to_string(), "(* (- 123) (group 45.67))");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Binary { left, operator, right } => {
                parenthesize(f, &operator.lexeme, &[left, right])
            },
            Self::Grouping { expression } => parenthesize(f, "group", &[expression]),
            Self::Literal { value } => match value {
                Some(literal) => write!(f, "{literal}"),
                None => write!(f, "nil"),
            },
            Self::Unary { operator, right } => parenthesize(f, &operator.lexeme, &[right]),
        }
    }
}

/// Writes `(name child child ...)` for a composite node.
fn parenthesize(f: &mut std::fmt::Formatter<'_>,
                name: &str,
                children: &[&Expr])
                -> std::fmt::Result {
    write!(f, "({name}")?;
    for child in children {
        write!(f, " {child}")?;
    }
    write!(f, ")")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::token::TokenKind;

    fn token(kind: TokenKind, lexeme: &str) -> Token {
        Token { kind,
                lexeme: lexeme.to_string(),
                literal: None,
                line: 1 }
    }

    fn number(value: f64) -> Expr {
        Expr::Literal { value: Some(Literal::Number(value)) }
    }

    #[test]
    fn prints_a_hand_built_tree() {
        let negated = Expr::Unary { operator: token(TokenKind::Minus, "-"),
                                    right:    Box::new(number(123.0)), };
        let grouped = Expr::Grouping { expression: Box::new(number(45.67)) };
        let expression = Expr::Binary { left:     Box::new(negated),
                                        operator: token(TokenKind::Star, "*"),
                                        right:    Box::new(grouped), };

        assert_eq!(expression.to_string(), "(* (- 123) (group 45.67))");
    }

    #[test]
    fn absent_literal_renders_as_nil() {
        let spelled = Expr::Literal { value: Some(Literal::Identifier("nil".to_string())) };

        assert_eq!(Expr::Literal { value: None }.to_string(), "nil");
        assert_eq!(spelled.to_string(), "nil");
    }

    #[test]
    fn string_literals_render_their_content() {
        let expression = Expr::Literal { value: Some(Literal::String("hi".to_string())) };

        assert_eq!(expression.to_string(), "hi");
    }
}
