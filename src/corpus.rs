// src/corpus.rs
//! Pairwise scoring across a set of files.
//!
//! Each file is read and analysed once; every unordered pair is then compared.
//! Both phases run on the rayon pool. Comparisons share no mutable state, so
//! no locking is involved.

use crate::analysis::Analysis;
use crate::error::{Error, Result};
use crate::similarity::{FeatureReport, SimilarityEngine};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;

/// Scores for one unordered pair of files.
#[derive(Debug, Clone, Serialize)]
pub struct PairScore {
    pub a: PathBuf,
    pub b: PathBuf,
    pub report: FeatureReport,
}

impl PairScore {
    #[must_use]
    pub fn similarity(&self) -> f64 {
        self.report.total
    }
}

/// Result of scoring a corpus.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MatrixReport {
    /// Pairs at or above the threshold, most similar first.
    pub pairs: Vec<PairScore>,
    pub files_analyzed: usize,
    pub pairs_compared: usize,
    pub duration_ms: u128,
}

/// Scores every pair of `files`, keeping those with similarity >= `threshold`.
///
/// # Errors
/// Returns `Io` if any file cannot be read.
pub fn score_pairs(
    files: &[PathBuf],
    engine: &SimilarityEngine,
    threshold: f64,
) -> Result<MatrixReport> {
    let start = Instant::now();

    let analyses: Vec<Analysis> = files
        .par_iter()
        .map(|path| analyze_file(path))
        .collect::<Result<_>>()?;

    let index_pairs: Vec<(usize, usize)> = (0..files.len())
        .flat_map(|i| ((i + 1)..files.len()).map(move |j| (i, j)))
        .collect();

    let mut pairs: Vec<PairScore> = index_pairs
        .par_iter()
        .map(|&(i, j)| {
            let report = engine.compare(&analyses[i], &analyses[j])?;
            Ok(PairScore {
                a: files[i].clone(),
                b: files[j].clone(),
                report,
            })
        })
        .collect::<Result<_>>()?;

    let pairs_compared = pairs.len();
    pairs.retain(|p| p.similarity() >= threshold);
    pairs.sort_by(|x, y| {
        y.similarity()
            .total_cmp(&x.similarity())
            .then_with(|| x.a.cmp(&y.a))
            .then_with(|| x.b.cmp(&y.b))
    });

    debug!(
        files = files.len(),
        pairs_compared,
        kept = pairs.len(),
        "scored corpus"
    );

    Ok(MatrixReport {
        pairs,
        files_analyzed: files.len(),
        pairs_compared,
        duration_ms: start.elapsed().as_millis(),
    })
}

fn analyze_file(path: &Path) -> Result<Analysis> {
    let content = read_source(path)?;
    Ok(Analysis::of(&content))
}

/// Reads a source file, replacing invalid UTF-8 rather than failing.
///
/// # Errors
/// Returns `Io` with the offending path if the read fails.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Error::Io {
        source,
        path: path.to_path_buf(),
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
