// tests/integration_corpus.rs
//! End-to-end tests: discover files on disk, score every pair, render reports.

use codesim_core::config::Config;
use codesim_core::corpus::{read_source, score_pairs};
use codesim_core::discovery::discover;
use codesim_core::error::Error;
use codesim_core::report::{comparison_json, feature_dump_json, format_comparison, matrix_json};
use codesim_core::similarity::{compute_feature_report, SimilarityEngine, Weights};
use serde_json::Value;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ADDER: &str = "class Adder { int add(int a, int b) { return a + b; } }";
const SUMMER: &str = "class Summer { int sum(int x, int y) { return x + y; } }";
const LOOPER: &str = r#"
class Looper {
    void run(String[] items) {
        for (String item : items) {
            if (item != null && item.isEmpty()) {
                System.out.println("empty");
            }
        }
    }
}
"#;

fn write(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap_or_else(|e| panic!("{e}"));
    }
    fs::write(&path, content).unwrap_or_else(|e| panic!("{e}"));
    path
}

fn corpus() -> TempDir {
    let dir = TempDir::new().unwrap_or_else(|e| panic!("{e}"));
    write(dir.path(), "Adder.java", ADDER);
    write(dir.path(), "nested/Summer.java", SUMMER);
    write(dir.path(), "nested/deeper/Looper.java", LOOPER);
    write(dir.path(), "README.txt", "not source");
    write(dir.path(), "target/Generated.java", ADDER);
    write(dir.path(), ".git/Hook.java", ADDER);
    dir
}

#[test]
fn test_discover_filters_and_prunes() {
    let dir = corpus();
    let files = discover(dir.path(), &Config::new()).unwrap_or_else(|e| panic!("{e}"));
    let names: Vec<String> = files
        .iter()
        .filter_map(|p| p.strip_prefix(dir.path()).ok())
        .map(|p| p.to_string_lossy().replace('\\', "/"))
        .collect();
    assert_eq!(
        names,
        vec!["Adder.java", "nested/Summer.java", "nested/deeper/Looper.java"]
    );
}

#[test]
fn test_discover_missing_root_is_error() {
    let dir = TempDir::new().unwrap_or_else(|e| panic!("{e}"));
    let missing = dir.path().join("nope");
    assert!(matches!(
        discover(&missing, &Config::new()),
        Err(Error::Io { .. })
    ));
}

#[test]
fn test_score_pairs_ranks_renamed_copy_first() {
    let dir = corpus();
    let files = discover(dir.path(), &Config::new()).unwrap_or_else(|e| panic!("{e}"));
    let report =
        score_pairs(&files, &SimilarityEngine::default(), 0.0).unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(report.files_analyzed, 3);
    assert_eq!(report.pairs_compared, 3);
    assert_eq!(report.pairs.len(), 3);

    let top = &report.pairs[0];
    let top_names = [top.a.file_name(), top.b.file_name()];
    assert!(top_names.contains(&Some(OsStr::new("Adder.java"))));
    assert!(top_names.contains(&Some(OsStr::new("Summer.java"))));
    assert!((top.similarity() - Weights::default().sum()).abs() < 1e-9);

    for window in report.pairs.windows(2) {
        assert!(window[0].similarity() >= window[1].similarity());
    }
}

#[test]
fn test_score_pairs_threshold_filters() {
    let dir = corpus();
    let files = discover(dir.path(), &Config::new()).unwrap_or_else(|e| panic!("{e}"));
    let report =
        score_pairs(&files, &SimilarityEngine::default(), 0.99).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(report.pairs_compared, 3);
    assert_eq!(report.pairs.len(), 1);
}

#[test]
fn test_score_pairs_missing_file_is_error() {
    let dir = TempDir::new().unwrap_or_else(|e| panic!("{e}"));
    let files = vec![dir.path().join("Gone.java"), dir.path().join("Also.java")];
    let result = score_pairs(&files, &SimilarityEngine::default(), 0.0);
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn test_read_source_tolerates_invalid_utf8() {
    let dir = TempDir::new().unwrap_or_else(|e| panic!("{e}"));
    let path = dir.path().join("Latin1.java");
    fs::write(&path, b"int a; // caf\xe9\n").unwrap_or_else(|e| panic!("{e}"));
    let text = read_source(&path).unwrap_or_else(|e| panic!("{e}"));
    assert!(text.starts_with("int a;"));
}

#[test]
fn test_matrix_json_shape() {
    let dir = corpus();
    let files = discover(dir.path(), &Config::new()).unwrap_or_else(|e| panic!("{e}"));
    let report =
        score_pairs(&files, &SimilarityEngine::default(), 0.0).unwrap_or_else(|e| panic!("{e}"));
    let json = matrix_json(&report).unwrap_or_else(|e| panic!("{e}"));
    let v: Value = serde_json::from_str(&json).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(v["files_analyzed"], 3);
    assert_eq!(v["pairs"].as_array().map(Vec::len), Some(3));
    assert!(v["pairs"][0]["report"]["scores"]["keyword"].is_number());
}

#[test]
fn test_feature_dump_keys() {
    let report = compute_feature_report(ADDER, LOOPER, &Weights::default())
        .unwrap_or_else(|e| panic!("{e}"));
    let v: Value =
        serde_json::from_str(&feature_dump_json(&report)).unwrap_or_else(|e| panic!("{e}"));
    for key in [
        "kw", "id", "op", "seq", "len", "t1", "t2", "seq2", "seq3", "seq4", "seq5", "seq6",
        "seq7", "seq8", "total",
    ] {
        assert!(v.get(key).is_some(), "missing {key}");
    }
    assert_eq!(v["t1"], report.tokens_a);
    assert_eq!(v["t2"], report.tokens_b);
}

#[test]
fn test_comparison_output() {
    let text = format_comparison(Path::new("A.java"), Path::new("B.java"), 0.5);
    assert!(text.contains("File 1: A.java"));
    assert!(text.contains("File 2: B.java"));
    assert!(text.contains("50.00%"));

    let v: Value = serde_json::from_str(&comparison_json(0.5)).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(v["similarity"], 0.5);
}
