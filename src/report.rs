// src/report.rs
//! Output formatting for comparison results.
//!
//! Terminal output is colored for people; the JSON forms are stable for
//! scripts and for the offline weight-fitting tooling.

use crate::corpus::MatrixReport;
use crate::similarity::FeatureReport;
use colored::Colorize;
use serde_json::{json, Map, Value};
use std::fmt::Write;
use std::path::Path;

/// Two-file summary: both paths, the score, and the score as a percentage.
#[must_use]
pub fn format_comparison(a: &Path, b: &Path, similarity: f64) -> String {
    let mut out = String::new();
    writeln!(out, "File 1: {}", a.display()).ok();
    writeln!(out, "File 2: {}", b.display()).ok();
    writeln!(
        out,
        "Similarity: {} ({:.2}%)",
        format!("{similarity:.4}").bold(),
        similarity * 100.0
    )
    .ok();
    out
}

/// `{"similarity": <float>}`.
#[must_use]
pub fn comparison_json(similarity: f64) -> String {
    json!({ "similarity": similarity }).to_string()
}

/// Single-line feature dump: `kw, id, op, seq, len, t1, t2, seq2..seq8, total`.
#[must_use]
pub fn feature_dump_json(report: &FeatureReport) -> String {
    let mut map = Map::new();
    map.insert("kw".into(), json!(report.scores.keyword));
    map.insert("id".into(), json!(report.scores.identifier));
    map.insert("op".into(), json!(report.scores.operator));
    map.insert("seq".into(), json!(report.scores.sequence));
    map.insert("len".into(), json!(report.scores.length));
    map.insert("t1".into(), json!(report.tokens_a));
    map.insert("t2".into(), json!(report.tokens_b));
    for scale in &report.sequence_scales {
        map.insert(format!("seq{}", scale.width), json!(scale.score));
    }
    map.insert("total".into(), json!(report.total));
    Value::Object(map).to_string()
}

/// Ranked pair table for a corpus run.
#[must_use]
pub fn format_matrix(report: &MatrixReport, root: &Path) -> String {
    let mut out = String::new();

    writeln!(out, "{}", "─".repeat(70).dimmed()).ok();
    writeln!(out, "{}", " SIMILARITY MATRIX ".cyan().bold()).ok();
    writeln!(out, "{}", "─".repeat(70).dimmed()).ok();
    writeln!(
        out,
        "   Files analyzed:  {}",
        report.files_analyzed.to_string().white()
    )
    .ok();
    writeln!(
        out,
        "   Pairs compared:  {}",
        report.pairs_compared.to_string().white()
    )
    .ok();
    writeln!(
        out,
        "   Analysis time:   {}ms",
        report.duration_ms.to_string().white()
    )
    .ok();
    writeln!(out).ok();

    if report.pairs.is_empty() {
        writeln!(out, "{}", "No pairs at or above the threshold.".green()).ok();
    }

    for (rank, pair) in report.pairs.iter().enumerate() {
        writeln!(
            out,
            "{:>4}. {}  {}  {}",
            rank + 1,
            colorize_percent(pair.similarity()),
            relative(&pair.a, root),
            relative(&pair.b, root).dimmed()
        )
        .ok();
    }

    writeln!(out, "{}", "─".repeat(70).dimmed()).ok();
    out
}

/// Machine-readable corpus report.
///
/// # Errors
/// Returns error if serialization fails.
pub fn matrix_json(report: &MatrixReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

fn relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn colorize_percent(similarity: f64) -> colored::ColoredString {
    let text = format!("{:>6.2}%", similarity * 100.0);
    if similarity >= 0.8 {
        text.red().bold()
    } else if similarity >= 0.5 {
        text.yellow()
    } else {
        text.green()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_json_shape() {
        let v: Value = serde_json::from_str(&comparison_json(0.25)).unwrap_or(Value::Null);
        assert_eq!(v["similarity"], json!(0.25));
    }

    #[test]
    fn test_relative_strips_root() {
        let root = Path::new("/corpus");
        assert_eq!(relative(Path::new("/corpus/a/B.java"), root), "a/B.java");
        assert_eq!(relative(Path::new("/elsewhere/C.java"), root), "/elsewhere/C.java");
    }
}
