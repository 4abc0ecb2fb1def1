// src/similarity/mod.rs
//! Similarity scoring between two source texts.
//!
//! Five dimensions are measured and fused with caller-supplied [`Weights`]:
//! - **Keyword**: cosine of keyword frequency vectors
//! - **Identifier**: multi-scale n-gram cosine over canonical identifier sequences
//! - **Operator**: cosine of operator frequency vectors (delimiters excluded)
//! - **Sequence**: multi-scale n-gram cosine over the normalized token stream
//! - **Length**: ratio of token counts
//!
//! Every call is a pure function of its inputs; nothing is cached between calls.

pub mod metrics;
pub mod types;

pub use metrics::{cosine, euclidean_distance, length_ratio, sparse_cosine};
pub use types::{
    DimensionScores, FeatureReport, MultiScale, Scale, ScaleScore, Weights, IDENTIFIER_SCALES,
    SEQUENCE_SCALES,
};

use crate::analysis::{extract_ngrams, Analysis};
use crate::error::Result;
use tracing::debug;

/// Scores two sources with a fixed set of weights.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityEngine {
    weights: Weights,
}

impl SimilarityEngine {
    #[must_use]
    pub fn new(weights: Weights) -> Self {
        Self { weights }
    }

    /// Fused similarity of two raw sources, in `[0, 1]`.
    ///
    /// # Errors
    /// Returns `InvalidWeights` if a weight is negative or not finite. Also
    /// propagates feature extraction failures, which the fixed vocabulary and
    /// n-gram widths make unreachable in practice.
    pub fn score(&self, a: &str, b: &str) -> Result<f64> {
        Ok(self.report(a, b)?.total)
    }

    /// Full feature breakdown of two raw sources.
    ///
    /// # Errors
    /// See [`SimilarityEngine::score`].
    pub fn report(&self, a: &str, b: &str) -> Result<FeatureReport> {
        self.compare(&Analysis::of(a), &Analysis::of(b))
    }

    /// Compares two already-analysed sources.
    ///
    /// # Errors
    /// See [`SimilarityEngine::score`].
    pub fn compare(&self, a: &Analysis, b: &Analysis) -> Result<FeatureReport> {
        self.weights.validate()?;

        let keyword = cosine(&a.keywords, &b.keywords)?;
        let operator = cosine(&a.operators, &b.operators)?;
        let identifier = multi_scale(&a.identifiers, &b.identifiers, &IDENTIFIER_SCALES)?;
        let sequence = multi_scale(&a.normalized, &b.normalized, &SEQUENCE_SCALES)?;
        let length = length_ratio(a.token_count(), b.token_count());

        let scores = DimensionScores {
            keyword,
            identifier: identifier.combined,
            operator,
            sequence: sequence.combined,
            length,
        };
        // Weights need not sum to 1, so the fused value can exceed the range.
        let total = self.weights.fuse(&scores).clamp(0.0, 1.0);

        debug!(
            keyword,
            identifier = scores.identifier,
            operator,
            sequence = scores.sequence,
            length,
            total,
            "fused similarity"
        );

        Ok(FeatureReport {
            scores,
            sequence_scales: sequence.scales,
            identifier_scales: identifier.scales,
            tokens_a: a.token_count(),
            tokens_b: b.token_count(),
            keyword_distance: euclidean_distance(&a.keywords, &b.keywords)?,
            operator_distance: euclidean_distance(&a.operators, &b.operators)?,
            total,
        })
    }
}

/// Fused similarity of `a` and `b` under `weights`, clamped to `[0, 1]`.
///
/// # Errors
/// See [`SimilarityEngine::score`].
pub fn compute_similarity(a: &str, b: &str, weights: &Weights) -> Result<f64> {
    SimilarityEngine::new(*weights).score(a, b)
}

/// Every sub-score behind [`compute_similarity`].
///
/// # Errors
/// See [`SimilarityEngine::score`].
pub fn compute_feature_report(a: &str, b: &str, weights: &Weights) -> Result<FeatureReport> {
    SimilarityEngine::new(*weights).report(a, b)
}

/// Weighted sum of sparse n-gram cosines, one per scale.
///
/// # Errors
/// Returns `InvalidGramWidth` if a scale has width zero.
pub fn multi_scale<S: AsRef<str>>(a: &[S], b: &[S], scales: &[Scale]) -> Result<MultiScale> {
    let mut combined = 0.0_f64;
    let mut per_width = Vec::with_capacity(scales.len());

    for scale in scales {
        let score = sparse_cosine(
            &extract_ngrams(a, scale.width)?,
            &extract_ngrams(b, scale.width)?,
        );
        combined += scale.weight * score;
        per_width.push(ScaleScore {
            width: scale.width,
            score,
        });
    }

    Ok(MultiScale {
        combined: combined.clamp(0.0, 1.0),
        scales: per_width,
    })
}
