//! Property-based tests for the minic front end.
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use minic::syntax::lexer::{self, TokenKind};
use minic::syntax::parser;
use proptest::prelude::*;

proptest! {
    /// Property: scanning terminates for arbitrary input and the last token
    /// is always EndOfInput (exactly one of them).
    #[test]
    fn scanner_always_terminates_with_eof(source in ".*") {
        let tokens = lexer::lex(&source);
        prop_assert!(!tokens.is_empty());
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfInput));
        prop_assert_eq!(
            tokens.iter().filter(|t| t.kind == TokenKind::EndOfInput).count(),
            1
        );
    }

    /// Property: every token carries a 1-based position.
    #[test]
    fn token_positions_are_one_based(source in ".*") {
        for token in lexer::lex(&source) {
            prop_assert!(token.line >= 1);
            prop_assert!(token.column >= 1);
        }
    }

    /// Property: every non-EOF token has a non-empty lexeme.
    #[test]
    fn lexemes_are_non_empty(source in ".*") {
        let tokens = lexer::lex(&source);
        for token in &tokens[..tokens.len() - 1] {
            prop_assert!(!token.text.is_empty());
        }
    }

    /// Property: scanning is deterministic.
    #[test]
    fn scanning_is_deterministic(source in ".*") {
        prop_assert_eq!(lexer::lex(&source), lexer::lex(&source));
    }

    /// Property: the parser never panics; it returns a tree or one error.
    #[test]
    fn parser_returns_tree_or_single_error(source in ".*") {
        let tokens = lexer::lex(&source);
        match parser::parse(&tokens) {
            Ok(tree) => {
                // A successful parse is a CompilationUnit with at least the
                // mandatory class declaration.
                prop_assert!(!tree.children.is_empty());
            }
            Err(e) => {
                prop_assert!(e.line >= 1);
                prop_assert!(e.column >= 1);
                prop_assert!(!e.message.is_empty());
            }
        }
    }

    /// Property: token lines are monotonically non-decreasing.
    #[test]
    fn token_lines_never_decrease(source in ".*") {
        let tokens = lexer::lex(&source);
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].line <= pair[1].line);
        }
    }

    /// Property: well-formed single-declaration classes always parse.
    #[test]
    fn generated_variable_declarations_parse(
        // Underscore-led names can never collide with reserved words.
        name in "_[a-z0-9]{0,8}",
        value in 0u32..=999_999,
    ) {
        let source = format!("class C {{ int {name} = {value}; }}");
        let tokens = lexer::lex(&source);
        let tree = parser::parse(&tokens).unwrap();
        prop_assert_eq!(tree.children.len(), 1);
    }
}
