//! minic: a two-stage front end for a small C-like language.
//!
//! The core lives in the [`minic_syntax`] crate (re-exported as [`syntax`]):
//! a hand-written scanner that converts source text into a position-tagged
//! token stream, and a recursive-descent parser that builds an AST for class
//! declarations, method declarations, local variable declarations, and
//! simple expression/method-call statements.
//!
//! This crate adds the command-line driver: token dumps, tree dumps, and
//! diagnostic rendering.

pub mod cli;

pub use minic_syntax as syntax;
