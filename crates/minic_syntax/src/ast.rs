//! Abstract Syntax Tree definitions for the minic front end.
//!
//! The tree is a uniform node shape: a [`NodeKind`] tag, an optional scalar
//! value (used by leaves such as identifiers and literals, and by
//! `ClassDeclaration` for the class name), and an ordered list of owned
//! children. Nodes are constructed with their full child list and never
//! mutated afterwards; the tree is acyclic and singly-owned top-down.

use std::fmt;

/// Grammar construct a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    CompilationUnit,
    ClassDeclaration,
    MethodDeclaration,
    AccessModifier,
    Modifier,
    ReturnType,
    MethodName,
    Parameter,
    Type,
    Name,
    Block,
    LocalVariableDeclaration,
    DataType,
    VariableName,
    LiteralExpression,
    StringLiteral,
    ExpressionStatement,
    Identifier,
    MethodCall,
    IntegerLiteral,
}

impl NodeKind {
    /// Canonical display label of the construct.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::CompilationUnit => "CompilationUnit",
            NodeKind::ClassDeclaration => "ClassDeclaration",
            NodeKind::MethodDeclaration => "MethodDeclaration",
            NodeKind::AccessModifier => "AccessModifier",
            NodeKind::Modifier => "Modifier",
            NodeKind::ReturnType => "ReturnType",
            NodeKind::MethodName => "MethodName",
            NodeKind::Parameter => "Parameter",
            NodeKind::Type => "Type",
            NodeKind::Name => "Name",
            NodeKind::Block => "Block",
            NodeKind::LocalVariableDeclaration => "LocalVariableDeclaration",
            NodeKind::DataType => "DataType",
            NodeKind::VariableName => "VariableName",
            NodeKind::LiteralExpression => "LiteralExpression",
            NodeKind::StringLiteral => "StringLiteral",
            NodeKind::ExpressionStatement => "ExpressionStatement",
            NodeKind::Identifier => "Identifier",
            NodeKind::MethodCall => "MethodCall",
            NodeKind::IntegerLiteral => "IntegerLiteral",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in the abstract syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub value: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    /// An interior node with children and no value.
    pub fn new(kind: NodeKind, children: Vec<Node>) -> Self {
        Self {
            kind,
            value: None,
            children,
        }
    }

    /// A leaf node carrying a scalar value.
    pub fn leaf(kind: NodeKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: Some(value.into()),
            children: Vec::new(),
        }
    }

    /// A node with both a value and children.
    pub fn with_value(kind: NodeKind, value: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            kind,
            value: Some(value.into()),
            children,
        }
    }

    /// Find the first direct child of the given kind.
    pub fn child(&self, kind: NodeKind) -> Option<&Node> {
        self.children.iter().find(|c| c.kind == kind)
    }

    /// All direct children of the given kind.
    pub fn children_of(&self, kind: NodeKind) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(move |c| c.kind == kind)
    }
}
