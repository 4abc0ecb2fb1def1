// src/vocab.rs
//! Fixed keyword and operator vocabularies.
//!
//! Both lists are ordered: a token's position in its list is its slot in the
//! dense feature vectors. The lookup tables are built once on first use and
//! never mutated afterwards.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// The 50 reserved words of the target grammar.
pub const KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte",
    "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else",
    "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import",
    "instanceof", "int", "interface", "long", "native",
    "new", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super",
    "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while",
];

/// Operators followed by the structural delimiters.
pub const OPERATORS: &[&str] = &[
    // arithmetic
    "+", "-", "*", "/", "%", "++", "--",
    // relational
    "==", "!=", ">", "<", ">=", "<=",
    // logical
    "&&", "||", "!",
    // bitwise
    "&", "|", "^", "~", "<<", ">>", ">>>",
    // assignment
    "=", "+=", "-=", "*=", "/=", "%=",
    "&=", "|=", "^=", "<<=", ">>=", ">>>=",
    // ternary
    "?", ":",
    // delimiters
    "(", ")", "{", "}", "[", "]", ";", ",", ".", "@",
];

/// Vocabulary members that shape classification but are never counted as operators.
pub const DELIMITERS: &[&str] = &["(", ")", "{", "}", "[", "]", ";", ",", ".", "@"];

/// Word tokens excluded from identifier handling.
pub const EXCLUDED_LITERALS: &[&str] = &["true", "false", "null"];

/// Longest operator window the lexer tries, in characters.
pub const OPERATOR_WINDOW: usize = 3;

static KEYWORD_INDEX: LazyLock<HashMap<&'static str, usize>> =
    LazyLock::new(|| index_of(KEYWORDS));

static OPERATOR_INDEX: LazyLock<HashMap<&'static str, usize>> =
    LazyLock::new(|| index_of(OPERATORS));

static DELIMITER_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| DELIMITERS.iter().copied().collect());

fn index_of(words: &'static [&'static str]) -> HashMap<&'static str, usize> {
    words.iter().enumerate().map(|(i, w)| (*w, i)).collect()
}

#[must_use]
pub fn is_keyword(token: &str) -> bool {
    KEYWORD_INDEX.contains_key(token)
}

#[must_use]
pub fn is_operator(token: &str) -> bool {
    OPERATOR_INDEX.contains_key(token)
}

#[must_use]
pub fn is_delimiter(token: &str) -> bool {
    DELIMITER_SET.contains(token)
}

#[must_use]
pub fn is_excluded_literal(token: &str) -> bool {
    EXCLUDED_LITERALS.contains(&token)
}

/// Position of `token` in [`KEYWORDS`].
#[must_use]
pub fn keyword_index(token: &str) -> Option<usize> {
    KEYWORD_INDEX.get(token).copied()
}

/// Position of `token` in [`OPERATORS`].
#[must_use]
pub fn operator_index(token: &str) -> Option<usize> {
    OPERATOR_INDEX.get(token).copied()
}
