//! Lexer for the minic front end.
//!
//! Handles tokenization including:
//! - Keywords and identifiers
//! - Integer/float literals (a single `Literal` kind) and string literals
//! - `//` and `/* */` comments, emitted as `Comment` tokens
//! - Longest-match operators and single-character punctuation
//! - Line/column tracking across embedded newlines
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//!
//! The scanner never fails: unrecognized characters and unterminated
//! strings/block comments degrade to `Unknown` tokens and scanning continues.
//! The token stream always ends with an `EndOfInput` token.

pub mod tokens;

pub use tokens::{Token, TokenKind};

use crate::vocab;

/// Scanner for minic source code.
///
/// Converts source text into a materialized token sequence in a single
/// left-to-right pass. All state (byte position, line, column) is local to
/// one `tokenize` call; independent scans share nothing.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    line: u32,
    column: u32,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// Always succeeds; malformed lexical input is emitted as `Unknown`
    /// tokens. The returned stream always ends with an `EndOfInput` token.
    pub fn tokenize(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.scan_token();
        }

        self.tokens
            .push(Token::new(TokenKind::EndOfInput, "<EOF>", self.line, self.column));
        self.tokens
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next(); // skip current
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            Some(c)
        } else {
            None
        }
    }

    fn lexeme(&self, start: usize) -> &'a str {
        &self.source[start..self.current_pos]
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.current_pos;
        let line = self.line;
        let column = self.column;

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            // Whitespace: no token; advance() already tracked line/column.
            _ if c.is_whitespace() => {}

            // Comments, or a division-family operator.
            '/' if self.peek() == Some('/') => self.scan_line_comment(start, line, column),
            '/' if self.peek() == Some('*') => self.scan_block_comment(start, line, column),

            // Identifiers and keywords
            _ if is_ident_start(c) => self.scan_identifier(start, line, column),

            // Numbers
            '0'..='9' => self.scan_number(start, line, column),

            // Strings
            '"' => self.scan_string(start, line, column),

            // Operators (longest match against the remaining input)
            _ if vocab::is_operator_start(c) => self.scan_operator(start, line, column),

            // Punctuation
            _ if vocab::is_punctuation(c) => {
                self.add_token(TokenKind::Punctuation, start, line, column);
            }

            // Anything else: one-character Unknown, never get stuck.
            _ => self.add_token(TokenKind::Unknown, start, line, column),
        }
    }

    fn add_token(&mut self, kind: TokenKind, start: usize, line: u32, column: u32) {
        let text = self.lexeme(start).to_string();
        self.tokens.push(Token::new(kind, text, line, column));
    }

    // ========================================================================
    // Comments
    // ========================================================================

    /// Scan `//...` through end of line (exclusive of the newline).
    fn scan_line_comment(&mut self, start: usize, line: u32, column: u32) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
        self.add_token(TokenKind::Comment, start, line, column);
    }

    /// Scan `/* ... */`, tracking line/column across embedded newlines.
    ///
    /// An unterminated block comment emits the remaining input as a single
    /// Unknown token instead of failing the scan.
    fn scan_block_comment(&mut self, start: usize, line: u32, column: u32) {
        self.advance(); // consume '*'
        loop {
            if self.peek() == Some('*') && self.peek_next() == Some('/') {
                self.advance();
                self.advance();
                self.add_token(TokenKind::Comment, start, line, column);
                return;
            }
            if self.advance().is_none() {
                self.add_token(TokenKind::Unknown, start, line, column);
                return;
            }
        }
    }

    // ========================================================================
    // Identifiers, numbers, strings
    // ========================================================================

    fn scan_identifier(&mut self, start: usize, line: u32, column: u32) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let kind = if vocab::is_keyword(self.lexeme(start)) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        self.add_token(kind, start, line, column);
    }

    /// Scan a maximal digit run with an optional `.digits` fraction.
    ///
    /// Integer and floating-point forms share the single `Literal` kind.
    fn scan_number(&mut self, start: usize, line: u32, column: u32) {
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // '.'
            while let Some(c) = self.peek() {
                if c.is_ascii_digit() {
                    self.advance();
                } else {
                    break;
                }
            }
        }

        self.add_token(TokenKind::Literal, start, line, column);
    }

    /// Scan a string literal including both delimiters.
    ///
    /// A backslash escapes the following character, so `"ab\"c"` is a single
    /// token. An unterminated string emits the remaining input as one
    /// Unknown token.
    fn scan_string(&mut self, start: usize, line: u32, column: u32) {
        loop {
            match self.peek() {
                Some('"') => {
                    self.advance();
                    self.add_token(TokenKind::StringLiteral, start, line, column);
                    return;
                }
                Some('\\') => {
                    self.advance();
                    self.advance(); // escaped character, if any
                }
                Some(_) => {
                    self.advance();
                }
                None => {
                    self.add_token(TokenKind::Unknown, start, line, column);
                    return;
                }
            }
        }
    }

    // ========================================================================
    // Operators
    // ========================================================================

    /// Match the longest operator spelling starting at `start`.
    ///
    /// Operator-start characters with no spelling in the table (`^`, lone
    /// `&`, lone `|`) scan as a one-character Unknown token.
    fn scan_operator(&mut self, start: usize, line: u32, column: u32) {
        match vocab::longest_operator(&self.source[start..]) {
            Some(op) => {
                // One character is already consumed; spellings are ASCII.
                for _ in 1..op.len() {
                    self.advance();
                }
                self.add_token(TokenKind::Operator, start, line, column);
            }
            None => self.add_token(TokenKind::Unknown, start, line, column),
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
