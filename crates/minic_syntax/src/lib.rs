//! Syntax frontend for minic: lexer, parser, AST, diagnostics.
//!
//! A strict two-stage pipeline: source text is scanned into a materialized,
//! position-tagged token sequence terminated by an `EndOfInput` token, and a
//! recursive-descent parser consumes that sequence through a single forward
//! cursor to build an AST rooted at a `CompilationUnit` node.
//!
//! ## Notes
//! - The scanner never fails: malformed lexical input (unterminated strings,
//!   unterminated block comments, unrecognized characters) degrades to
//!   `Unknown` tokens and scanning continues.
//! - The parser stops at the first grammar violation and reports exactly one
//!   diagnostic with the offending token's text, line, and column.
//! - All scanner and parser state is local to one call; independent inputs
//!   can be processed concurrently with no coordination.
//!
//! ## Examples
//! ```rust
//! use minic_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("class Program { void Main() { int x = 10; } }");
//! let tree = parser::parse(&tokens).unwrap();
//! assert_eq!(tree.children.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod vocab;
