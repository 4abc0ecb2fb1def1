// src/analysis/classify.rs
//! Token classification against the fixed vocabulary.

use crate::vocab;

/// What a lexed token is. Exactly one kind applies to any token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    /// Operators and structural delimiters.
    Operator,
    Identifier,
    /// `true`, `false` and `null`.
    ExcludedLiteral,
    /// Anything else, e.g. an empty string or text starting with a digit.
    Other,
}

#[must_use]
pub fn classify(token: &str) -> TokenKind {
    if vocab::is_keyword(token) {
        TokenKind::Keyword
    } else if vocab::is_operator(token) {
        TokenKind::Operator
    } else if vocab::is_excluded_literal(token) {
        TokenKind::ExcludedLiteral
    } else if token
        .chars()
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
    {
        TokenKind::Identifier
    } else {
        TokenKind::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(classify("while"), TokenKind::Keyword);
        assert_eq!(classify(">>="), TokenKind::Operator);
        assert_eq!(classify(";"), TokenKind::Operator);
        assert_eq!(classify("null"), TokenKind::ExcludedLiteral);
        assert_eq!(classify("_count"), TokenKind::Identifier);
        assert_eq!(classify("String"), TokenKind::Identifier);
        assert_eq!(classify(""), TokenKind::Other);
        assert_eq!(classify("9lives"), TokenKind::Other);
    }
}
