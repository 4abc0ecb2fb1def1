// src/similarity/types.rs
//! Fusion weights and score reports.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// One n-gram width and its share of a multi-scale score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub width: usize,
    pub weight: f64,
}

const fn scale(width: usize, weight: f64) -> Scale {
    Scale { width, weight }
}

/// Widths 2..=8 over the normalized stream. Longer windows weigh more: short
/// fragments recur across unrelated programs.
pub const SEQUENCE_SCALES: [Scale; 7] = [
    scale(2, 0.05),
    scale(3, 0.08),
    scale(4, 0.10),
    scale(5, 0.12),
    scale(6, 0.15),
    scale(7, 0.20),
    scale(8, 0.30),
];

/// Widths 2..=6 over the identifier-only sequence.
pub const IDENTIFIER_SCALES: [Scale; 5] = [
    scale(2, 0.10),
    scale(3, 0.15),
    scale(4, 0.20),
    scale(5, 0.25),
    scale(6, 0.30),
];

/// Per-dimension weights for the fused score.
///
/// Expected, but not required, to sum to 1.0; the fused total is clamped to
/// `[0, 1]` either way. Defaults are the values fitted
/// on the bundled sample corpus; deployments re-tune them through config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    #[serde(default = "default_keyword")]
    pub keyword: f64,
    #[serde(default = "default_identifier")]
    pub identifier: f64,
    #[serde(default = "default_operator")]
    pub operator: f64,
    #[serde(default = "default_sequence")]
    pub sequence: f64,
    #[serde(default = "default_length")]
    pub length: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            keyword: default_keyword(),
            identifier: default_identifier(),
            operator: default_operator(),
            sequence: default_sequence(),
            length: default_length(),
        }
    }
}

const fn default_keyword() -> f64 { 0.368_208 }
const fn default_identifier() -> f64 { 0.055_308 }
const fn default_operator() -> f64 { 0.118_788 }
const fn default_sequence() -> f64 { 0.148_921 }
const fn default_length() -> f64 { 0.308_775 }

impl Weights {
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }

    fn as_array(&self) -> [f64; 5] {
        [
            self.keyword,
            self.identifier,
            self.operator,
            self.sequence,
            self.length,
        ]
    }

    /// Checks that every weight is finite and non-negative.
    ///
    /// # Errors
    /// Returns `InvalidWeights` naming the first offending component.
    pub fn validate(&self) -> Result<()> {
        let names = ["keyword", "identifier", "operator", "sequence", "length"];
        for (name, value) in names.iter().zip(self.as_array()) {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidWeights(format!(
                    "{name} weight must be a finite non-negative number (got {value})"
                )));
            }
        }
        Ok(())
    }

    /// Rescales the weights to sum to 1.0.
    ///
    /// # Errors
    /// Returns `InvalidWeights` if validation fails or every weight is zero.
    pub fn normalized(&self) -> Result<Self> {
        self.validate()?;
        let total = self.sum();
        if total <= 0.0 {
            return Err(Error::InvalidWeights("weights sum to zero".to_string()));
        }
        Ok(Self {
            keyword: self.keyword / total,
            identifier: self.identifier / total,
            operator: self.operator / total,
            sequence: self.sequence / total,
            length: self.length / total,
        })
    }

    /// Weighted sum of the five dimension scores.
    #[must_use]
    pub fn fuse(&self, scores: &DimensionScores) -> f64 {
        self.keyword * scores.keyword
            + self.identifier * scores.identifier
            + self.operator * scores.operator
            + self.sequence * scores.sequence
            + self.length * scores.length
    }
}

/// The five fused dimensions, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionScores {
    pub keyword: f64,
    pub identifier: f64,
    pub operator: f64,
    pub sequence: f64,
    pub length: f64,
}

/// Cosine at a single n-gram width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaleScore {
    pub width: usize,
    pub score: f64,
}

/// A multi-scale score and the per-width cosines that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiScale {
    pub combined: f64,
    pub scales: Vec<ScaleScore>,
}

/// Every sub-score behind one comparison, for tuning and debugging.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureReport {
    pub scores: DimensionScores,
    pub sequence_scales: Vec<ScaleScore>,
    pub identifier_scales: Vec<ScaleScore>,
    pub tokens_a: usize,
    pub tokens_b: usize,
    /// Euclidean distance between the keyword vectors.
    pub keyword_distance: f64,
    /// Euclidean distance between the operator vectors.
    pub operator_distance: f64,
    pub total: f64,
}

impl FeatureReport {
    /// Normalized n-gram cosine at `width`, if that width was measured.
    #[must_use]
    pub fn sequence_at(&self, width: usize) -> Option<f64> {
        self.sequence_scales
            .iter()
            .find(|s| s.width == width)
            .map(|s| s.score)
    }
}
