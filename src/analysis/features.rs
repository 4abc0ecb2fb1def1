// src/analysis/features.rs
//! Dense, vocabulary-indexed frequency vectors.

use super::lexer::TokenStream;
use crate::vocab::{self, KEYWORDS, OPERATORS};

/// Fixed-length count vector. Slot `i` counts the vocabulary entry at index `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseVector {
    counts: Vec<u32>,
}

impl DenseVector {
    /// All-zero vector of the given dimension.
    #[must_use]
    pub fn zeroed(dimension: usize) -> Self {
        Self {
            counts: vec![0; dimension],
        }
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.counts.get(index).copied()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }
}

impl From<Vec<u32>> for DenseVector {
    fn from(counts: Vec<u32>) -> Self {
        Self { counts }
    }
}

/// Keyword occurrence counts, one slot per entry of [`KEYWORDS`].
#[must_use]
pub fn keyword_vector(stream: &TokenStream) -> DenseVector {
    count_into(stream, KEYWORDS.len(), vocab::keyword_index)
}

/// Operator occurrence counts, one slot per entry of [`OPERATORS`].
///
/// Delimiters keep their slots but are never counted.
#[must_use]
pub fn operator_vector(stream: &TokenStream) -> DenseVector {
    count_into(stream, OPERATORS.len(), |token| {
        if vocab::is_delimiter(token) {
            None
        } else {
            vocab::operator_index(token)
        }
    })
}

fn count_into(
    stream: &TokenStream,
    dimension: usize,
    slot_of: impl Fn(&str) -> Option<usize>,
) -> DenseVector {
    let mut counts = vec![0u32; dimension];
    for idx in stream.iter().filter_map(slot_of) {
        if let Some(slot) = counts.get_mut(idx) {
            *slot += 1;
        }
    }
    DenseVector { counts }
}
