//! Language vocabulary: reserved words, operators, punctuation, type-name sets.
//!
//! This module is the single source of truth for the fixed lexical and
//! grammatical vocabulary of the language. It is vocabulary only (spellings +
//! lookup helpers); it does not tokenize source text.
//!
//! ## Notes
//! - Lookup is **case-sensitive**.
//! - The grammar uses several *distinct* type-name sets (method return types,
//!   local-variable data types, statement-level data types). They overlap but
//!   are not equal, and the parser's dispatch depends on which set a keyword
//!   belongs to. Do not merge them without revisiting acceptance behavior.

/// Reserved words of the language.
///
/// An identifier-shaped lexeme is a keyword iff it appears here.
pub const KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Operator spellings, ordered longest-first.
///
/// The scanner matches these against the remaining input and takes the first
/// (and therefore longest) spelling that is a prefix, so `==` always wins
/// over `=`.
pub const OPERATORS: &[&str] = &[
    "++", "--", "+=", "-=", "*=", "/=", "%=", "==", "!=", ">=", "<=", "&&", "||",
    "+", "-", "*", "/", "%", "=", "!", ">", "<",
];

/// Characters that can start an operator.
///
/// Note this set is wider than the spellings in [`OPERATORS`]: `^`, a lone
/// `&`, and a lone `|` start here but match no spelling, and scan as Unknown.
pub const OPERATOR_START: &str = "+-*/%=&|^!<>";

/// Single-character punctuation tokens.
pub const PUNCTUATION: &str = "{}()[];.,:?";

/// Access modifiers accepted before a class member.
pub const ACCESS_MODIFIERS: &[&str] = &["public", "private", "protected", "internal"];

/// Non-access modifiers accepted before a class member.
pub const MODIFIERS: &[&str] = &["static", "const", "readonly", "sealed"];

/// Type names that commit member parsing to a method declaration.
pub const METHOD_RETURN_TYPES: &[&str] = &["int", "string", "bool", "void"];

/// Type names that commit member parsing to a local variable declaration.
pub const LOCAL_DECL_TYPES: &[&str] = &["int", "double", "string", "bool", "char", "long"];

/// Type names that start a local variable declaration in statement position.
pub const STATEMENT_DECL_TYPES: &[&str] = &["int", "double", "string"];

/// Return `true` if `spelling` is a reserved word.
pub fn is_keyword(spelling: &str) -> bool {
    KEYWORDS.contains(&spelling)
}

/// Return `true` if `c` can start an operator.
pub fn is_operator_start(c: char) -> bool {
    OPERATOR_START.contains(c)
}

/// Return `true` if `c` is a punctuation character.
pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(c)
}

/// Find the longest operator spelling that prefixes `rest`.
pub fn longest_operator(rest: &str) -> Option<&'static str> {
    OPERATORS.iter().copied().find(|op| rest.starts_with(op))
}

pub fn is_access_modifier(spelling: &str) -> bool {
    ACCESS_MODIFIERS.contains(&spelling)
}

pub fn is_modifier(spelling: &str) -> bool {
    MODIFIERS.contains(&spelling)
}

pub fn is_method_return_type(spelling: &str) -> bool {
    METHOD_RETURN_TYPES.contains(&spelling)
}

pub fn is_local_decl_type(spelling: &str) -> bool {
    LOCAL_DECL_TYPES.contains(&spelling)
}

pub fn is_statement_decl_type(spelling: &str) -> bool {
    STATEMENT_DECL_TYPES.contains(&spelling)
}
