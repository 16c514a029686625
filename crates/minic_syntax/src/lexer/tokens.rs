//! Token types for the minic lexer.
//!
//! Tokens carry their exact source lexeme plus a 1-based line/column position
//! captured at the first character of the lexeme. They are produced once by
//! the scanner and never mutated.

use std::fmt;

/// Kind of token produced by the lexer.
///
/// ## Notes
/// - `DataType` is part of the token taxonomy but is never produced by the
///   scanner; type names are classified as `Keyword` and re-interpreted by
///   the parser's type-name sets.
/// - `Unknown` covers unrecognized characters and unterminated
///   strings/block comments; the scanner degrades rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Operator,
    DataType,
    Literal,
    StringLiteral,
    Comment,
    Punctuation,
    EndOfInput,
    Unknown,
}

impl TokenKind {
    /// Canonical display name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::Identifier => "Identifier",
            TokenKind::Operator => "Operator",
            TokenKind::DataType => "DataType",
            TokenKind::Literal => "Literal",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::Comment => "Comment",
            TokenKind::Punctuation => "Punctuation",
            TokenKind::EndOfInput => "EndOfInput",
            TokenKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token with its kind, exact lexeme, and source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// 1-based line of the first character of the lexeme.
    pub line: u32,
    /// 1-based column of the first character of the lexeme.
    pub column: u32,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    /// Return `true` if this token has the given kind.
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} (Line: {}, Column: {})",
            self.kind, self.text, self.line, self.column
        )
    }
}
