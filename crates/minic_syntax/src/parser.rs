//! Recursive-descent parser for the minic front end.
//!
//! Consumes the token stream produced by [`crate::lexer`] through a single
//! forward cursor (no backtracking) and builds an AST rooted at a
//! `CompilationUnit` node, or fails with one [`SyntaxError`] at the first
//! point the grammar is violated.
//!
//! Grammar:
//!
//! ```text
//! CompilationUnit  := ClassDeclaration { TypeDeclaration }
//! ClassDeclaration := "class" Identifier "{" { TypeDeclaration } "}"
//! TypeDeclaration  := [ AccessModifier ] [ Modifier ] ( MethodDeclaration | LocalVarDecl )
//! MethodDeclaration:= [ AccessModifier ] ReturnType Identifier "(" [ Parameter { "," Parameter } ] ")" Block
//! Parameter        := Type Identifier
//! LocalVarDecl     := DataType Identifier "=" Literal ";"
//! Block            := "{" { Statement } "}"
//! Statement        := LocalVarDecl | ExpressionStatement
//! ExpressionStatement := Identifier [ "." Identifier "(" [ Expression { "," Expression } ] ")" ] ";"
//! Expression       := Identifier | Literal | StringLiteral
//! ```
//!
//! Member dispatch relies on two distinct type-name sets: a keyword in
//! [`vocab::METHOD_RETURN_TYPES`] commits to a method, otherwise one in
//! [`vocab::LOCAL_DECL_TYPES`] commits to a local variable declaration. The
//! sets overlap but are not equal; see `vocab` for why they stay split.

use crate::ast::{Node, NodeKind};
use crate::diagnostics::SyntaxError;
use crate::lexer::{Token, TokenKind};
use crate::vocab;

/// Parser state: the token stream and a single forward cursor.
///
/// The cursor is monotonically non-decreasing during a parse and is the only
/// mutable state; the stream itself is read-only. One parser value serves
/// one `parse` call.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// The stream is expected to end with an `EndOfInput` token, as produced
    /// by [`crate::lexer::lex`].
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse the entire token stream into a `CompilationUnit` tree.
    ///
    /// ## Errors
    /// Returns the first [`SyntaxError`] encountered; there is no recovery
    /// and no partial tree.
    pub fn parse(mut self) -> Result<Node, SyntaxError> {
        self.compilation_unit()
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return the current token without consuming it.
    ///
    /// The `EndOfInput` sentinel is always last, so a saturated cursor keeps
    /// returning it.
    fn peek(&self) -> &Token {
        if self.pos < self.tokens.len() {
            &self.tokens[self.pos]
        } else {
            &self.tokens[self.tokens.len() - 1]
        }
    }

    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::EndOfInput
    }

    /// Advance to the next token and return the token we just consumed.
    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        &self.tokens[self.pos - 1]
    }

    /// Return `true` if the current token matches `kind` (and `text`, when given).
    fn check(&self, kind: TokenKind, text: Option<&str>) -> bool {
        let tok = self.peek();
        tok.kind == kind && text.is_none_or(|t| tok.text == t)
    }

    fn check_keyword(&self, text: &str) -> bool {
        self.check(TokenKind::Keyword, Some(text))
    }

    fn check_punct(&self, text: &str) -> bool {
        self.check(TokenKind::Punctuation, Some(text))
    }

    /// Consume the current token if it matches, else fail with a diagnostic
    /// naming the offending token and its position.
    fn consume(&mut self, kind: TokenKind, text: Option<&str>) -> Result<&Token, SyntaxError> {
        if self.check(kind, text) {
            Ok(self.advance())
        } else {
            let expected = match text {
                Some(t) => format!("{kind} '{t}'"),
                None => kind.to_string(),
            };
            Err(SyntaxError::at_token(
                format!("Expected {}, found {}", expected, self.peek().text),
                self.peek(),
            ))
        }
    }

    fn unexpected(&self, context: &str) -> SyntaxError {
        SyntaxError::at_token(
            format!("Unexpected token {} in {}", self.peek().text, context),
            self.peek(),
        )
    }

    // ========================================================================
    // Productions
    // ========================================================================

    /// `CompilationUnit := ClassDeclaration { TypeDeclaration }`
    fn compilation_unit(&mut self) -> Result<Node, SyntaxError> {
        if !self.check_keyword("class") {
            return Err(SyntaxError::at_token(
                format!("Expected 'class', found {}", self.peek().text),
                self.peek(),
            ));
        }

        let mut children = vec![self.class_declaration()?];
        while self.check_keyword("class") || self.check_keyword("struct") {
            children.push(self.type_declaration()?);
        }

        Ok(Node::new(NodeKind::CompilationUnit, children))
    }

    /// `ClassDeclaration := "class" Identifier "{" { TypeDeclaration } "}"`
    ///
    /// The class name is stored as the node's value; members are its children.
    fn class_declaration(&mut self) -> Result<Node, SyntaxError> {
        self.consume(TokenKind::Keyword, Some("class"))?;
        let name = self.consume(TokenKind::Identifier, None)?.text.clone();
        self.consume(TokenKind::Punctuation, Some("{"))?;

        let mut members = Vec::new();
        while !self.check_punct("}") && !self.is_at_end() {
            members.push(self.type_declaration()?);
        }

        self.consume(TokenKind::Punctuation, Some("}"))?;
        Ok(Node::with_value(NodeKind::ClassDeclaration, name, members))
    }

    /// `TypeDeclaration := [ AccessModifier ] [ Modifier ] ( MethodDeclaration | LocalVarDecl )`
    ///
    /// A keyword in the method-return-type set commits to a method; failing
    /// that, one in the local-declaration set commits to a variable. Any
    /// modifiers collected before a variable declaration are discarded, not
    /// attached (preserved acceptance behavior).
    fn type_declaration(&mut self) -> Result<Node, SyntaxError> {
        let mut prefix = Vec::new();

        if self.peek().kind == TokenKind::Keyword && vocab::is_access_modifier(&self.peek().text) {
            let tok = self.advance();
            prefix.push(Node::leaf(NodeKind::AccessModifier, tok.text.clone()));
        }

        if self.peek().kind == TokenKind::Keyword && vocab::is_modifier(&self.peek().text) {
            let tok = self.advance();
            prefix.push(Node::leaf(NodeKind::Modifier, tok.text.clone()));
        }

        if self.peek().kind == TokenKind::Keyword && vocab::is_method_return_type(&self.peek().text) {
            return self.method_declaration(prefix);
        }

        if self.peek().kind == TokenKind::Keyword && vocab::is_local_decl_type(&self.peek().text) {
            return self.local_variable_declaration();
        }

        Err(self.unexpected("type declaration"))
    }

    /// `MethodDeclaration := [ AccessModifier ] ReturnType Identifier "(" [ Parameter { "," Parameter } ] ")" Block`
    fn method_declaration(&mut self, prefix: Vec<Node>) -> Result<Node, SyntaxError> {
        let mut children = prefix;

        // An access modifier is also accepted here, after any modifier.
        if self.peek().kind == TokenKind::Keyword && vocab::is_access_modifier(&self.peek().text) {
            let tok = self.advance();
            children.push(Node::leaf(NodeKind::AccessModifier, tok.text.clone()));
        }

        let return_type = self.consume(TokenKind::Keyword, None)?.text.clone();
        children.push(Node::leaf(NodeKind::ReturnType, return_type));

        let name = self.consume(TokenKind::Identifier, None)?.text.clone();
        children.push(Node::leaf(NodeKind::MethodName, name));

        self.consume(TokenKind::Punctuation, Some("("))?;
        while !self.check_punct(")") && !self.is_at_end() {
            children.push(self.parameter()?);
            if self.check_punct(",") {
                self.consume(TokenKind::Punctuation, Some(","))?;
            }
        }
        self.consume(TokenKind::Punctuation, Some(")"))?;

        children.push(self.block()?);
        Ok(Node::new(NodeKind::MethodDeclaration, children))
    }

    /// `Parameter := Type Identifier`
    fn parameter(&mut self) -> Result<Node, SyntaxError> {
        let ty = self.consume(TokenKind::Keyword, None)?.text.clone();
        let name = self.consume(TokenKind::Identifier, None)?.text.clone();
        Ok(Node::new(
            NodeKind::Parameter,
            vec![Node::leaf(NodeKind::Type, ty), Node::leaf(NodeKind::Name, name)],
        ))
    }

    /// `LocalVarDecl := DataType Identifier "=" Literal ";"`
    fn local_variable_declaration(&mut self) -> Result<Node, SyntaxError> {
        let data_type = self.consume(TokenKind::Keyword, None)?.text.clone();
        let name = self.consume(TokenKind::Identifier, None)?.text.clone();
        self.consume(TokenKind::Operator, Some("="))?;
        let literal = self.literal()?;
        self.consume(TokenKind::Punctuation, Some(";"))?;

        Ok(Node::new(
            NodeKind::LocalVariableDeclaration,
            vec![
                Node::leaf(NodeKind::DataType, data_type),
                Node::leaf(NodeKind::VariableName, name),
                literal,
            ],
        ))
    }

    /// `Block := "{" { Statement } "}"`
    ///
    /// Comment tokens at statement position are consumed and discarded
    /// without producing a node.
    fn block(&mut self) -> Result<Node, SyntaxError> {
        self.consume(TokenKind::Punctuation, Some("{"))?;

        let mut statements = Vec::new();
        while !self.check_punct("}") && !self.is_at_end() {
            if self.peek().kind == TokenKind::Comment {
                self.advance();
                continue;
            }
            statements.push(self.statement()?);
        }

        self.consume(TokenKind::Punctuation, Some("}"))?;
        Ok(Node::new(NodeKind::Block, statements))
    }

    /// `Statement := LocalVarDecl | ExpressionStatement`
    ///
    /// Statement position accepts a narrower data-type set than class-member
    /// position (preserved acceptance behavior).
    fn statement(&mut self) -> Result<Node, SyntaxError> {
        if self.peek().kind == TokenKind::Keyword && vocab::is_statement_decl_type(&self.peek().text) {
            return self.local_variable_declaration();
        }
        if self.peek().kind == TokenKind::Identifier {
            return self.expression_statement();
        }
        Err(self.unexpected("statement"))
    }

    /// `ExpressionStatement := Identifier [ "." Identifier "(" [ Expression { "," Expression } ] ")" ] ";"`
    fn expression_statement(&mut self) -> Result<Node, SyntaxError> {
        let receiver = self.consume(TokenKind::Identifier, None)?.text.clone();

        let identifier = if self.check_punct(".") {
            self.consume(TokenKind::Punctuation, Some("."))?;
            let method = self.consume(TokenKind::Identifier, None)?.text.clone();

            self.consume(TokenKind::Punctuation, Some("("))?;
            let mut args = Vec::new();
            while !self.check_punct(")") && !self.is_at_end() {
                args.push(self.expression()?);
                if self.check_punct(",") {
                    self.consume(TokenKind::Punctuation, Some(","))?;
                }
            }
            self.consume(TokenKind::Punctuation, Some(")"))?;

            let call = Node::with_value(NodeKind::MethodCall, method, args);
            Node::with_value(NodeKind::Identifier, receiver, vec![call])
        } else {
            Node::leaf(NodeKind::Identifier, receiver)
        };

        self.consume(TokenKind::Punctuation, Some(";"))?;
        Ok(Node::new(NodeKind::ExpressionStatement, vec![identifier]))
    }

    /// `Expression := Identifier | Literal | StringLiteral`
    fn expression(&mut self) -> Result<Node, SyntaxError> {
        match self.peek().kind {
            TokenKind::Identifier => {
                let tok = self.advance();
                Ok(Node::leaf(NodeKind::Identifier, tok.text.clone()))
            }
            TokenKind::Literal => {
                let tok = self.advance();
                Ok(Node::leaf(NodeKind::IntegerLiteral, tok.text.clone()))
            }
            TokenKind::StringLiteral => {
                let tok = self.advance();
                Ok(Node::leaf(NodeKind::StringLiteral, tok.text.clone()))
            }
            _ => Err(self.unexpected("expression")),
        }
    }

    /// A literal initializer: numeric or string.
    fn literal(&mut self) -> Result<Node, SyntaxError> {
        match self.peek().kind {
            TokenKind::Literal => {
                let tok = self.advance();
                Ok(Node::leaf(NodeKind::LiteralExpression, tok.text.clone()))
            }
            TokenKind::StringLiteral => {
                let tok = self.advance();
                Ok(Node::leaf(NodeKind::StringLiteral, tok.text.clone()))
            }
            _ => Err(SyntaxError::at_token(
                format!("Expected literal, found {}", self.peek().text),
                self.peek(),
            )),
        }
    }
}

/// Parse a token stream into a `CompilationUnit` tree.
///
/// This is the main public entrypoint for parsing.
///
/// ## Errors
/// Returns the first [`SyntaxError`] if parsing fails; no partial tree is
/// produced.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Node, SyntaxError> {
    Parser::new(tokens).parse()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticKind;
    use crate::lexer;

    fn parse_str(source: &str) -> Result<Node, SyntaxError> {
        parse(&lexer::lex(source))
    }

    #[test]
    fn test_end_to_end_method_with_local() {
        let tree = parse_str("class Program { public static void Main() { int x = 10; } }").unwrap();

        assert_eq!(tree.kind, NodeKind::CompilationUnit);
        assert_eq!(tree.children.len(), 1);

        let class = &tree.children[0];
        assert_eq!(class.kind, NodeKind::ClassDeclaration);
        assert_eq!(class.value.as_deref(), Some("Program"));
        assert_eq!(class.children.len(), 1);

        let method = &class.children[0];
        assert_eq!(method.kind, NodeKind::MethodDeclaration);
        assert_eq!(
            method.child(NodeKind::AccessModifier).and_then(|n| n.value.as_deref()),
            Some("public")
        );
        assert_eq!(
            method.child(NodeKind::Modifier).and_then(|n| n.value.as_deref()),
            Some("static")
        );
        assert_eq!(
            method.child(NodeKind::ReturnType).and_then(|n| n.value.as_deref()),
            Some("void")
        );
        assert_eq!(
            method.child(NodeKind::MethodName).and_then(|n| n.value.as_deref()),
            Some("Main")
        );
        assert_eq!(method.children_of(NodeKind::Parameter).count(), 0);

        let block = method.child(NodeKind::Block).unwrap();
        assert_eq!(block.children.len(), 1);

        let decl = &block.children[0];
        assert_eq!(decl.kind, NodeKind::LocalVariableDeclaration);
        assert_eq!(
            decl.child(NodeKind::DataType).and_then(|n| n.value.as_deref()),
            Some("int")
        );
        assert_eq!(
            decl.child(NodeKind::VariableName).and_then(|n| n.value.as_deref()),
            Some("x")
        );
        assert_eq!(
            decl.child(NodeKind::LiteralExpression).and_then(|n| n.value.as_deref()),
            Some("10")
        );
    }

    #[test]
    fn test_missing_class_name_is_deterministic_failure() {
        let err = parse_str("class { }").unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::Syntax);
        assert!(err.message.contains('{'), "message should name the token: {}", err.message);
        assert_eq!((err.line, err.column), (1, 7));
    }

    #[test]
    fn test_input_not_starting_with_class() {
        let err = parse_str("void Main() { }").unwrap_err();
        assert!(err.message.contains("Expected 'class'"), "{}", err.message);
        assert_eq!((err.line, err.column), (1, 1));
    }

    #[test]
    fn test_empty_input_fails_at_eof_token() {
        let err = parse_str("").unwrap_err();
        assert!(err.message.contains("<EOF>"), "{}", err.message);
    }

    #[test]
    fn test_unclosed_class_body_fails_at_eof() {
        let err = parse_str("class C {").unwrap_err();
        assert!(err.message.contains("<EOF>"), "{}", err.message);
    }

    #[test]
    fn test_comments_are_transparent_in_blocks() {
        let with_comments = parse_str(
            "class C { void M() { // first\nint x = 1; /* between */ int y = 2; } }",
        )
        .unwrap();
        let without = parse_str("class C { void M() { int x = 1; int y = 2; } }").unwrap();
        assert_eq!(with_comments, without);
    }

    #[test]
    fn test_method_parameters() {
        let tree = parse_str("class C { void M(int a, string b) { } }").unwrap();
        let method = &tree.children[0].children[0];
        let params: Vec<_> = method.children_of(NodeKind::Parameter).collect();
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].child(NodeKind::Type).and_then(|n| n.value.as_deref()), Some("int"));
        assert_eq!(params[0].child(NodeKind::Name).and_then(|n| n.value.as_deref()), Some("a"));
        assert_eq!(params[1].child(NodeKind::Type).and_then(|n| n.value.as_deref()), Some("string"));
        assert_eq!(params[1].child(NodeKind::Name).and_then(|n| n.value.as_deref()), Some("b"));
    }

    #[test]
    fn test_method_call_statement() {
        let tree = parse_str(
            r#"class C { void M() { string msg = "hi"; Console.WriteLine(msg, 2, "x"); } }"#,
        )
        .unwrap();
        let block = tree.children[0].children[0].child(NodeKind::Block).unwrap();
        let stmt = &block.children[1];
        assert_eq!(stmt.kind, NodeKind::ExpressionStatement);

        let receiver = &stmt.children[0];
        assert_eq!(receiver.kind, NodeKind::Identifier);
        assert_eq!(receiver.value.as_deref(), Some("Console"));

        let call = &receiver.children[0];
        assert_eq!(call.kind, NodeKind::MethodCall);
        assert_eq!(call.value.as_deref(), Some("WriteLine"));
        assert_eq!(call.children.len(), 3);
        assert_eq!(call.children[0].kind, NodeKind::Identifier);
        assert_eq!(call.children[1].kind, NodeKind::IntegerLiteral);
        assert_eq!(call.children[2].kind, NodeKind::StringLiteral);
        assert_eq!(call.children[2].value.as_deref(), Some("\"x\""));
    }

    #[test]
    fn test_plain_identifier_statement() {
        let tree = parse_str("class C { void M() { flag; } }").unwrap();
        let block = tree.children[0].children[0].child(NodeKind::Block).unwrap();
        let stmt = &block.children[0];
        assert_eq!(stmt.children[0].kind, NodeKind::Identifier);
        assert!(stmt.children[0].children.is_empty());
    }

    #[test]
    fn test_member_double_is_local_variable() {
        // "double" is not a method return type but is a local-decl type, so a
        // class member "double d = 5.5;" parses as a variable declaration.
        let tree = parse_str("class C { double d = 5.5; }").unwrap();
        let member = &tree.children[0].children[0];
        assert_eq!(member.kind, NodeKind::LocalVariableDeclaration);
        assert_eq!(
            member.child(NodeKind::LiteralExpression).and_then(|n| n.value.as_deref()),
            Some("5.5")
        );
    }

    #[test]
    fn test_member_modifiers_before_variable_are_discarded() {
        // Modifiers are collected before dispatch but not attached to
        // variable declarations.
        let tree = parse_str("class C { private double d = 1.5; }").unwrap();
        let member = &tree.children[0].children[0];
        assert_eq!(member.kind, NodeKind::LocalVariableDeclaration);
        assert!(member.child(NodeKind::AccessModifier).is_none());
    }

    #[test]
    fn test_statement_type_set_is_narrower_than_member_set() {
        // "long" is accepted for class members but not in statement position.
        assert!(parse_str("class C { long n = 42; }").is_ok());
        let err = parse_str("class C { void M() { long n = 42; } }").unwrap_err();
        assert!(err.message.contains("long"), "{}", err.message);
    }

    #[test]
    fn test_string_initializer_in_statement_position() {
        let tree = parse_str(r#"class C { void M() { string s = "Hello, World!"; } }"#).unwrap();
        let block = tree.children[0].children[0].child(NodeKind::Block).unwrap();
        let decl = &block.children[0];
        assert_eq!(decl.kind, NodeKind::LocalVariableDeclaration);
        assert_eq!(
            decl.child(NodeKind::StringLiteral).and_then(|n| n.value.as_deref()),
            Some("\"Hello, World!\"")
        );
    }

    #[test]
    fn test_member_int_commits_to_method_dispatch() {
        // "int" is in the method-return-type set, so a member that looks
        // like a variable declaration fails expecting a parameter list.
        let err = parse_str("class C { int x = 1; }").unwrap_err();
        assert!(err.message.contains("'('"), "{}", err.message);
    }

    #[test]
    fn test_missing_initializer_fails() {
        let err = parse_str("class C { double x; }").unwrap_err();
        assert!(err.message.contains("Expected Operator '='"), "{}", err.message);
    }

    #[test]
    fn test_missing_semicolon_fails() {
        let err = parse_str("class C { double x = 1 }").unwrap_err();
        assert!(err.message.contains("';'"), "{}", err.message);
        assert_eq!((err.line, err.column), (1, 24));
    }

    #[test]
    fn test_unknown_token_reports_lexical_kind() {
        // "^" scans as Unknown; the parser rejects it and flags the scan
        // anomaly in the diagnostic kind.
        let err = parse_str("class C { ^ }").unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::Lexical);
        assert!(err.message.contains('^'), "{}", err.message);
    }

    #[test]
    fn test_second_class_follows_original_dispatch() {
        // A second top-level "class" enters member dispatch, which rejects
        // the keyword. Preserved acceptance behavior.
        let err = parse_str("class A { } class B { }").unwrap_err();
        assert!(err.message.contains("class"), "{}", err.message);
        assert_eq!((err.line, err.column), (1, 13));
    }

    #[test]
    fn test_reparse_is_structurally_identical() {
        let tokens = lexer::lex("class C { void M() { int x = 1; } }");
        let first = parse(&tokens).unwrap();
        let second = parse(&tokens).unwrap();
        assert_eq!(first, second);
    }
}
