// src/similarity/metrics.rs
//! Vector similarity primitives.
//!
//! Zero-vector conventions shared by both cosine variants: two empty (all-zero)
//! vectors carry no signal and count as matching (1.0); exactly one empty
//! vector scores 0.0. Nothing here divides by zero.

use crate::analysis::{DenseVector, GramCounts};
use crate::error::{Error, Result};

/// Cosine similarity of two dense vectors built from the same vocabulary.
///
/// # Errors
/// Returns `DimensionMismatch` if the vectors differ in length.
pub fn cosine(u: &DenseVector, v: &DenseVector) -> Result<f64> {
    check_dimensions(u, v)?;

    let mut dot = 0.0;
    let mut norm_u = 0.0;
    let mut norm_v = 0.0;
    for (&a, &b) in u.counts().iter().zip(v.counts()) {
        let (a, b) = (f64::from(a), f64::from(b));
        dot += a * b;
        norm_u += a * a;
        norm_v += b * b;
    }

    Ok(from_parts(u.is_zero(), v.is_zero(), dot, norm_u, norm_v))
}

/// Cosine similarity of two sparse count maps with arbitrary key domains.
///
/// Only the smaller map's keys are probed in the larger one, so the key union
/// is never materialised.
#[must_use]
pub fn sparse_cosine(a: &GramCounts, b: &GramCounts) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let mut dot = 0.0;
    let mut norm_small = 0.0;
    for (key, &count) in small {
        let count = f64::from(count);
        norm_small += count * count;
        if let Some(&other) = large.get(key) {
            dot += count * f64::from(other);
        }
    }
    let norm_large: f64 = large
        .values()
        .map(|&count| f64::from(count) * f64::from(count))
        .sum();

    from_parts(small.is_empty(), large.is_empty(), dot, norm_small, norm_large)
}

/// Straight-line distance between two dense vectors.
///
/// # Errors
/// Returns `DimensionMismatch` if the vectors differ in length.
pub fn euclidean_distance(u: &DenseVector, v: &DenseVector) -> Result<f64> {
    check_dimensions(u, v)?;
    let sum: f64 = u
        .counts()
        .iter()
        .zip(v.counts())
        .map(|(&a, &b)| {
            let diff = f64::from(a) - f64::from(b);
            diff * diff
        })
        .sum();
    Ok(sum.sqrt())
}

/// `min / max` of two token counts.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn length_ratio(len_a: usize, len_b: usize) -> f64 {
    match (len_a, len_b) {
        (0, 0) => 1.0,
        (0, _) | (_, 0) => 0.0,
        _ => len_a.min(len_b) as f64 / len_a.max(len_b) as f64,
    }
}

fn check_dimensions(u: &DenseVector, v: &DenseVector) -> Result<()> {
    if u.dimension() == v.dimension() {
        Ok(())
    } else {
        Err(Error::DimensionMismatch {
            left: u.dimension(),
            right: v.dimension(),
        })
    }
}

// sqrt of the norm product, not the product of the sqrts: identical inputs
// then land on exactly 1.0.
fn from_parts(zero_a: bool, zero_b: bool, dot: f64, norm_a: f64, norm_b: f64) -> f64 {
    match (zero_a, zero_b) {
        (true, true) => 1.0,
        (true, false) | (false, true) => 0.0,
        (false, false) => (dot / (norm_a * norm_b).sqrt()).clamp(0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_conventions() {
        assert!((from_parts(true, true, 0.0, 0.0, 0.0) - 1.0).abs() < f64::EPSILON);
        assert!(from_parts(true, false, 0.0, 0.0, 4.0).abs() < f64::EPSILON);
        assert!(from_parts(false, true, 0.0, 4.0, 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_parts_identical_is_exact() {
        for norm in [1.0, 2.0, 3.0, 7.0, 1234.0] {
            assert_eq!(from_parts(false, false, norm, norm, norm).to_bits(), 1.0f64.to_bits());
        }
    }

    #[test]
    fn test_length_ratio() {
        assert!((length_ratio(0, 0) - 1.0).abs() < f64::EPSILON);
        assert!(length_ratio(0, 3).abs() < f64::EPSILON);
        assert!((length_ratio(4, 2) - 0.5).abs() < f64::EPSILON);
    }
}
