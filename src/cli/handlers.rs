// src/cli/handlers.rs
//! Handlers for each `codesim` subcommand.

use crate::config::Config;
use crate::corpus::{self, read_source};
use crate::discovery;
use crate::exit::CodesimExit;
use crate::report;
use crate::similarity::SimilarityEngine;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

/// Scores two files and prints the summary or `{"similarity": ...}`.
///
/// # Errors
/// Returns error if either file cannot be read.
pub fn handle_compare(config: &Config, a: &Path, b: &Path, json: bool) -> Result<CodesimExit> {
    let engine = SimilarityEngine::new(config.weights);
    let similarity = engine
        .score(&read_source(a)?, &read_source(b)?)
        .context("Failed to score files")?;

    if json {
        println!("{}", report::comparison_json(similarity));
    } else {
        print!("{}", report::format_comparison(a, b, similarity));
    }
    Ok(CodesimExit::Success)
}

/// Prints the single-line feature dump for two files.
///
/// # Errors
/// Returns error if either file cannot be read.
pub fn handle_features(config: &Config, a: &Path, b: &Path) -> Result<CodesimExit> {
    let engine = SimilarityEngine::new(config.weights);
    let features = engine
        .report(&read_source(a)?, &read_source(b)?)
        .context("Failed to extract features")?;
    println!("{}", report::feature_dump_json(&features));
    Ok(CodesimExit::Success)
}

/// Options for the matrix handler.
pub struct MatrixOptions<'a> {
    pub dir: &'a Path,
    pub extensions: Vec<String>,
    pub threshold: Option<f64>,
    pub json: bool,
}

/// Scores every pair of source files under a directory.
///
/// Invalid `--ext`/`--threshold` overrides and corpora with fewer than two
/// files exit with [`CodesimExit::InvalidInput`].
///
/// # Errors
/// Returns error if the walk fails or a file cannot be read.
pub fn handle_matrix(config: &Config, opts: MatrixOptions<'_>) -> Result<CodesimExit> {
    let mut config = config.clone();
    if !opts.extensions.is_empty() {
        config.scan.extensions = opts.extensions;
    }
    if let Some(threshold) = opts.threshold {
        config.scan.report_threshold = threshold;
    }
    if let Err(e) = config.validate() {
        eprintln!("{} {e}", "error:".red().bold());
        return Ok(CodesimExit::InvalidInput);
    }

    let files = discovery::discover(opts.dir, &config)
        .with_context(|| format!("Failed to scan {}", opts.dir.display()))?;

    if files.len() < 2 {
        eprintln!(
            "{} found {} source file(s) with extensions [{}] under {}; need at least 2",
            "error:".red().bold(),
            files.len(),
            config.scan.extensions.join(", "),
            opts.dir.display()
        );
        return Ok(CodesimExit::InvalidInput);
    }

    let engine = SimilarityEngine::new(config.weights);
    let matrix = corpus::score_pairs(&files, &engine, config.scan.report_threshold)?;

    if opts.json {
        println!("{}", report::matrix_json(&matrix)?);
    } else {
        print!("{}", report::format_matrix(&matrix, opts.dir));
    }
    Ok(CodesimExit::Success)
}

/// Prints the effective configuration.
///
/// # Errors
/// Returns error if serialization fails.
pub fn handle_config(config: &Config) -> Result<CodesimExit> {
    if let Some(source) = &config.source {
        println!("# loaded from {}", source.display());
    } else {
        println!("# defaults (no {} found)", crate::config::CONFIG_FILE);
    }
    print!("{}", config.to_toml()?);
    Ok(CodesimExit::Success)
}
