//! Diagnostics for the minic front end.
//!
//! A failed parse produces exactly one [`SyntaxError`] carrying the kind of
//! failure, a message naming the offending lexeme, and the 1-based
//! line/column where it occurred.

use crate::lexer::{Token, TokenKind};

/// What kind of failure a diagnostic describes.
///
/// `Lexical` marks parse failures caused by a degraded (`Unknown`) token,
/// so callers can tell scan anomalies from genuine grammar violations
/// without inspecting the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    Syntax,
    Lexical,
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticKind::Syntax => write!(f, "syntax error"),
            DiagnosticKind::Lexical => write!(f, "lexical error"),
        }
    }
}

/// A parse failure with location information.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message} (line {line}, column {column})")]
pub struct SyntaxError {
    pub kind: DiagnosticKind,
    pub message: String,
    pub line: u32,
    pub column: u32,
}

impl SyntaxError {
    pub fn new(kind: DiagnosticKind, message: String, line: u32, column: u32) -> Self {
        Self {
            kind,
            message,
            line,
            column,
        }
    }

    /// Build a diagnostic positioned at `found`.
    ///
    /// The kind is `Lexical` when the offending token is an `Unknown`
    /// (degraded scan output), `Syntax` otherwise.
    pub fn at_token(message: String, found: &Token) -> Self {
        let kind = if found.kind == TokenKind::Unknown {
            DiagnosticKind::Lexical
        } else {
            DiagnosticKind::Syntax
        };
        Self::new(kind, message, found.line, found.column)
    }
}

/// Render an error with source context.
///
/// Produces a rustc-style report: header, `--> file:line:col` location, the
/// offending source line in a numbered gutter, and a caret under the column.
pub fn render(file_name: &str, source: &str, error: &SyntaxError) -> String {
    let red = "\x1b[31m";
    let cyan = "\x1b[36m";
    let bold = "\x1b[1m";
    let reset = "\x1b[0m";

    let mut out = String::new();

    out.push_str(&format!(
        "{bold}{red}{kind}{reset}{bold}: {message}{reset}\n",
        kind = error.kind,
        message = error.message,
    ));
    out.push_str(&format!(
        "  {cyan}-->{reset} {file}:{line}:{col}\n",
        file = file_name,
        line = error.line,
        col = error.column,
    ));

    let line_text = source.lines().nth(error.line as usize - 1).unwrap_or("");
    let width = error.line.to_string().len();

    out.push_str(&format!("  {cyan}{:>width$} |{reset}\n", ""));
    out.push_str(&format!("  {cyan}{:>width$} |{reset} {}\n", error.line, line_text));
    out.push_str(&format!(
        "  {cyan}{:>width$} |{reset} {}{red}^{reset}\n",
        "",
        " ".repeat(error.column.saturating_sub(1) as usize),
    ));

    out
}
