use crate::{
    error::LexError,
    syntax::token::{Literal, Token, TokenKind},
};

/// Scans a whole source text into its token sequence.
///
/// This is the entry point for lexical analysis. The input is processed in a
/// single forward pass; lexical errors are accumulated alongside the tokens
/// rather than aborting the scan, so one pass reports as many problems as it
/// can. The returned sequence always ends with exactly one end-of-input token
/// carrying an empty lexeme.
///
/// # Parameters
/// - `source`: The raw source text.
///
/// # Returns
/// The scanned tokens and any lexical errors, in source order.
///
/// # Example
/// ```
/// use loxa::syntax::{lexer::scan, token::TokenKind};
///
/// let (tokens, errors) = scan("1 + 2");
/// assert!(errors.is_empty());
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[1].kind, TokenKind::Plus);
/// ```
#[must_use]
pub fn scan(source: &str) -> (Vec<Token>, Vec<LexError>) {
    Lexer::new(source).scan_tokens()
}

/// Cursor state for one scan over a source buffer.
///
/// `start` marks the first byte of the lexeme being scanned, `current` the
/// next byte to consume. `line` counts 1-based source lines and advances on
/// every consumed newline.
struct Lexer<'a> {
    source:  &'a str,
    start:   usize,
    current: usize,
    line:    usize,
    tokens:  Vec<Token>,
    errors:  Vec<LexError>,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Self { source,
               start: 0,
               current: 0,
               line: 1,
               tokens: Vec::new(),
               errors: Vec::new() }
    }

    fn scan_tokens(mut self) -> (Vec<Token>, Vec<LexError>) {
        while !self.is_at_end() {
            // The next lexeme begins at the current cursor.
            self.start = self.current;
            self.scan_token();
        }

        self.tokens.push(Token { kind:    TokenKind::Eof,
                                 lexeme:  String::new(),
                                 literal: None,
                                 line:    self.line, });

        (self.tokens, self.errors)
    }

    /// Scans one lexeme, emitting at most one token.
    fn scan_token(&mut self) {
        let Some(c) = self.advance() else { return };

        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => {
                let kind = if self.match_current('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            },
            '=' => {
                let kind = if self.match_current('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            },
            '<' => {
                let kind = if self.match_current('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            },
            '>' => {
                let kind = if self.match_current('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            },
            '/' => {
                if self.match_current('/') {
                    // A comment runs to the end of the line, exclusive.
                    while let Some(c) = self.peek()
                          && c != '\n'
                    {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenKind::Slash);
                }
            },
            ' ' | '\r' | '\t' => {},
            '\n' => self.line += 1,
            '"' => self.string(),
            '0'..='9' => self.number(),
            c if c.is_ascii_alphabetic() || c == '_' => self.identifier(),
            c => {
                self.errors.push(LexError::UnexpectedCharacter { character: c,
                                                                 line:      self.line, });
            },
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Consumes and returns the next character, if any.
    fn advance(&mut self) -> Option<char> {
        let c = self.source[self.current..].chars().next()?;
        self.current += c.len_utf8();
        Some(c)
    }

    /// Consumes the next character only when it equals `expected`.
    fn match_current(&mut self, expected: char) -> bool {
        if let Some(c) = self.peek()
           && c == expected
        {
            self.advance();
            return true;
        }
        false
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next()
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_literal(kind, None);
    }

    fn add_literal(&mut self, kind: TokenKind, literal: Option<Literal>) {
        self.tokens.push(Token { kind,
                                 lexeme: self.source[self.start..self.current].to_string(),
                                 literal,
                                 line: self.line });
    }

    /// Scans a string literal, quotes included in the lexeme.
    ///
    /// Strings may span lines and carry no escape sequences. Reaching the end
    /// of input before the closing quote reports an unterminated-string error
    /// at the line reached and emits no token.
    fn string(&mut self) {
        let opening_line = self.line;

        while let Some(c) = self.peek()
              && c != '"'
        {
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.errors.push(LexError::UnterminatedString { line: self.line });
            return;
        }

        // The closing quote.
        self.advance();

        let content = self.source[self.start + 1..self.current - 1].to_string();
        self.tokens.push(Token { kind:    TokenKind::String,
                                 lexeme:  self.source[self.start..self.current].to_string(),
                                 literal: Some(Literal::String(content)),
                                 line:    opening_line, });
    }

    /// Scans a number literal.
    ///
    /// A maximal digit run, then a fractional part only when a `.` is
    /// immediately followed by another digit. A trailing `.` is left for the
    /// next lexeme.
    fn number(&mut self) {
        while let Some(c) = self.peek()
              && c.is_ascii_digit()
        {
            self.advance();
        }

        if let Some('.') = self.peek()
           && let Some(next) = self.peek_next()
           && next.is_ascii_digit()
        {
            // Consume the '.'.
            self.advance();

            while let Some(c) = self.peek()
                  && c.is_ascii_digit()
            {
                self.advance();
            }
        }

        // Digit runs with at most one guarded '.' always parse.
        let value = self.source[self.start..self.current].parse().unwrap();
        self.add_literal(TokenKind::Number, Some(Literal::Number(value)));
    }

    /// Scans an identifier or keyword.
    fn identifier(&mut self) {
        while let Some(c) = self.peek()
              && (c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let text = &self.source[self.start..self.current];
        self.add_token(TokenKind::keyword(text).unwrap_or(TokenKind::Identifier));
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let (tokens, _) = scan(source);
        tokens.into_iter().map(|t| t.kind).collect()
    }

    #[rstest]
    #[case("(", TokenKind::LeftParen)]
    #[case(")", TokenKind::RightParen)]
    #[case("{", TokenKind::LeftBrace)]
    #[case("}", TokenKind::RightBrace)]
    #[case(",", TokenKind::Comma)]
    #[case(".", TokenKind::Dot)]
    #[case("-", TokenKind::Minus)]
    #[case("+", TokenKind::Plus)]
    #[case(";", TokenKind::Semicolon)]
    #[case("/", TokenKind::Slash)]
    #[case("*", TokenKind::Star)]
    #[case("!", TokenKind::Bang)]
    #[case("!=", TokenKind::BangEqual)]
    #[case("=", TokenKind::Equal)]
    #[case("==", TokenKind::EqualEqual)]
    #[case(">", TokenKind::Greater)]
    #[case(">=", TokenKind::GreaterEqual)]
    #[case("<", TokenKind::Less)]
    #[case("<=", TokenKind::LessEqual)]
    #[case("and", TokenKind::And)]
    #[case("class", TokenKind::Class)]
    #[case("else", TokenKind::Else)]
    #[case("false", TokenKind::False)]
    #[case("fun", TokenKind::Fun)]
    #[case("for", TokenKind::For)]
    #[case("if", TokenKind::If)]
    #[case("nil", TokenKind::Nil)]
    #[case("or", TokenKind::Or)]
    #[case("print", TokenKind::Print)]
    #[case("return", TokenKind::Return)]
    #[case("super", TokenKind::Super)]
    #[case("this", TokenKind::This)]
    #[case("true", TokenKind::True)]
    #[case("var", TokenKind::Var)]
    #[case("while", TokenKind::While)]
    fn single_lexemes_scan_alone(#[case] source: &str, #[case] kind: TokenKind) {
        let (tokens, errors) = scan(source);

        assert!(errors.is_empty());
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, kind);
        assert_eq!(tokens[0].lexeme, source);
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].kind, TokenKind::Eof);
    }

    #[test]
    fn empty_input_yields_only_eof() {
        let (tokens, errors) = scan("");

        assert!(errors.is_empty());
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert_eq!(tokens[0].lexeme, "");
        assert_eq!(tokens[0].line, 1);
    }

    #[test]
    fn whitespace_and_comments_emit_nothing() {
        use TokenKind::{Eof, LeftParen, RightParen};

        assert_eq!(kinds(" \t\r"), vec![Eof]);
        assert_eq!(kinds("// a comment"), vec![Eof]);
        assert_eq!(kinds("(// trailing comment\n)"), vec![LeftParen, RightParen, Eof]);
    }

    #[test]
    fn newlines_advance_the_line_counter() {
        let (tokens, errors) = scan("(\n)\n// note\n*");

        assert!(errors.is_empty());
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 2);
        assert_eq!(tokens[2].line, 4);
        assert_eq!(tokens[3].line, 4);
    }

    #[test]
    fn operator_lookahead_prefers_two_characters() {
        use TokenKind::{Bang, BangEqual, Eof, Equal, EqualEqual, Greater, GreaterEqual, Less,
                        LessEqual};

        assert_eq!(kinds("! != = == < <= > >="),
                   vec![Bang, BangEqual, Equal, EqualEqual, Less, LessEqual, Greater,
                        GreaterEqual, Eof]);
        // '==' then '=' rather than '=' '==' or three equals.
        assert_eq!(kinds("==="), vec![EqualEqual, Equal, Eof]);
    }

    #[test]
    fn string_lexeme_keeps_quotes_and_literal_drops_them() {
        let (tokens, errors) = scan("\"hello world\"");

        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, "\"hello world\"");
        assert_eq!(tokens[0].literal,
                   Some(Literal::String("hello world".to_string())));
    }

    #[test]
    fn multi_line_string_carries_its_opening_line() {
        let (tokens, errors) = scan("\"one\ntwo\" +");

        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].kind, TokenKind::Plus);
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn unterminated_string_reports_and_emits_no_token() {
        let (tokens, errors) = scan("\"abc");

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert_eq!(errors, vec![LexError::UnterminatedString { line: 1 }]);

        let (_, errors) = scan("\"abc\ndef");
        assert_eq!(errors, vec![LexError::UnterminatedString { line: 2 }]);
    }

    #[test]
    fn numbers_carry_their_parsed_value() {
        let (tokens, errors) = scan("42 3.14");

        assert!(errors.is_empty());
        assert_eq!(tokens[0].literal, Some(Literal::Number(42.0)));
        assert_eq!(tokens[1].literal, Some(Literal::Number(3.14)));
    }

    #[test]
    fn trailing_dot_is_not_part_of_a_number() {
        let (tokens, errors) = scan("10.");

        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].lexeme, "10");
        assert_eq!(tokens[1].kind, TokenKind::Dot);
        assert_eq!(tokens[2].kind, TokenKind::Eof);
    }

    #[test]
    fn keywords_do_not_match_identifier_prefixes() {
        let (tokens, _) = scan("or orchid _under score2");

        assert_eq!(tokens[0].kind, TokenKind::Or);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].lexeme, "orchid");
        assert_eq!(tokens[2].kind, TokenKind::Identifier);
        assert_eq!(tokens[3].kind, TokenKind::Identifier);
    }

    #[test]
    fn unexpected_characters_accumulate_without_halting() {
        let (tokens, errors) = scan("@\n#");

        assert_eq!(tokens.len(), 1);
        assert_eq!(errors,
                   vec![LexError::UnexpectedCharacter { character: '@',
                                                        line:      1, },
                        LexError::UnexpectedCharacter { character: '#',
                                                        line:      2, }]);
    }

    #[test]
    fn tokens_survive_around_unexpected_characters() {
        let (tokens, errors) = scan("1 @ 2");

        assert_eq!(errors.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[1].kind, TokenKind::Number);
        assert_eq!(tokens[2].kind, TokenKind::Eof);
    }
}
