// src/analysis/ngram.rs
//! Sliding-window n-gram counting.
//!
//! The extractor is agnostic to what the sequence holds: raw tokens, a
//! normalized stream, or an identifier-only sequence all go through the same
//! code. Granularity is just the window width.

use crate::error::{Error, Result};
use std::collections::HashMap;

/// Gram key to occurrence count. Keys are the window's tokens joined by
/// [`GRAM_SEPARATOR`].
pub type GramCounts = HashMap<String, u32>;

/// Tokens never contain whitespace, so a single space keeps keys unambiguous.
pub const GRAM_SEPARATOR: &str = " ";

/// Counts every contiguous window of `n` items in `sequence`.
///
/// Returns an empty map when the sequence is shorter than `n`.
///
/// # Errors
/// Returns `InvalidGramWidth` if `n` is zero.
pub fn extract_ngrams<S: AsRef<str>>(sequence: &[S], n: usize) -> Result<GramCounts> {
    if n == 0 {
        return Err(Error::InvalidGramWidth(n));
    }

    let mut counts = GramCounts::new();
    for window in sequence.windows(n) {
        let key = window
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(GRAM_SEPARATOR);
        *counts.entry(key).or_insert(0) += 1;
    }
    Ok(counts)
}
