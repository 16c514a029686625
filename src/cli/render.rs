//! Presentation helpers: token tables and indented tree dumps.
//!
//! The core exposes tokens and tree structure only; their printed form lives
//! here, out of the syntax crate.

use minic_syntax::ast::Node;
use minic_syntax::lexer::Token;

/// Render a token stream, one `[Kind] text (Line: l, Column: c)` entry per line.
pub fn token_stream(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&token.to_string());
        out.push('\n');
    }
    out
}

/// Render a syntax tree as an indented dump, two spaces per level.
///
/// Each line is `NodeType` or `NodeType: value`.
pub fn tree(root: &Node) -> String {
    let mut out = String::new();
    tree_node(root, 0, &mut out);
    out
}

fn tree_node(node: &Node, depth: usize, out: &mut String) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(node.kind.as_str());
    if let Some(value) = &node.value {
        out.push_str(": ");
        out.push_str(value);
    }
    out.push('\n');
    for child in &node.children {
        tree_node(child, depth + 1, out);
    }
}
