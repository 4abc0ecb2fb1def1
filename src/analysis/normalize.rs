// src/analysis/normalize.rs
//! Renaming-invariant views of a token stream.
//!
//! Identifiers are replaced by `ID<k>`, where `k` counts distinct identifiers
//! in order of first appearance, starting at 0. The numbering is local to one
//! stream: two streams that use their names in the same order normalize to
//! the same sequence, whatever the names are.

use super::classify::{classify, TokenKind};
use super::lexer::TokenStream;
use std::collections::HashMap;

/// Assigns sequential ids to identifiers as they are first seen.
#[derive(Debug, Default)]
struct IdAllocator<'a> {
    ids: HashMap<&'a str, usize>,
}

impl<'a> IdAllocator<'a> {
    fn canonical(&mut self, name: &'a str) -> String {
        let next = self.ids.len();
        let id = *self.ids.entry(name).or_insert(next);
        format!("ID{id}")
    }
}

/// Identifier tokens only, each replaced by its canonical id.
#[must_use]
pub fn identifier_sequence(stream: &TokenStream) -> Vec<String> {
    let mut alloc = IdAllocator::default();
    stream
        .iter()
        .filter(|token| classify(token) == TokenKind::Identifier)
        .map(|token| alloc.canonical(token))
        .collect()
}

/// The whole stream with identifiers canonicalised.
///
/// Keywords and operators pass through unchanged. `true`, `false`, `null`
/// and anything unclassifiable are dropped.
#[must_use]
pub fn normalize_stream(stream: &TokenStream) -> Vec<String> {
    let mut alloc = IdAllocator::default();
    stream
        .iter()
        .filter_map(|token| match classify(token) {
            TokenKind::Keyword | TokenKind::Operator => Some(token.to_string()),
            TokenKind::Identifier => Some(alloc.canonical(token)),
            TokenKind::ExcludedLiteral | TokenKind::Other => None,
        })
        .collect()
}
