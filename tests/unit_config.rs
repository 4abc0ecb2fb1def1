// tests/unit_config.rs
//! Tests for `codesim.toml` loading and validation.

use codesim_core::config::{Config, CONFIG_FILE};
use codesim_core::error::Error;
use codesim_core::similarity::Weights;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn origin() -> &'static Path {
    Path::new(CONFIG_FILE)
}

#[test]
fn test_empty_file_gives_defaults() {
    let config = Config::parse_toml("", origin()).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(config.weights, Weights::default());
    assert_eq!(config.scan.extensions, vec!["java".to_string()]);
    assert!(config.scan.report_threshold.abs() < f64::EPSILON);
    assert!(config.source.is_none());
}

#[test]
fn test_partial_weights_keep_other_defaults() {
    let config = Config::parse_toml("[weights]\nkeyword = 0.5\n", origin())
        .unwrap_or_else(|e| panic!("{e}"));
    assert!((config.weights.keyword - 0.5).abs() < f64::EPSILON);
    assert_eq!(config.weights.length, Weights::default().length);
    assert_eq!(config.weights.sequence, Weights::default().sequence);
}

#[test]
fn test_scan_section() {
    let content = r#"
[scan]
extensions = ["java", "jav"]
report_threshold = 0.75
"#;
    let config = Config::parse_toml(content, origin()).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(config.scan.extensions.len(), 2);
    assert!((config.scan.report_threshold - 0.75).abs() < f64::EPSILON);
}

#[test]
fn test_malformed_toml_is_config_error() {
    let result = Config::parse_toml("[weights\nkeyword = ", origin());
    assert!(matches!(result, Err(Error::Config { .. })));
}

#[test]
fn test_negative_weight_is_config_error() {
    let result = Config::parse_toml("[weights]\nlength = -1.0\n", origin());
    let Err(Error::Config { message, .. }) = result else {
        panic!("expected config error");
    };
    assert!(message.contains("length"), "{message}");
}

#[test]
fn test_empty_extensions_rejected() {
    let result = Config::parse_toml("[scan]\nextensions = []\n", origin());
    assert!(matches!(result, Err(Error::Config { .. })));
}

#[test]
fn test_threshold_out_of_range_rejected() {
    let result = Config::parse_toml("[scan]\nreport_threshold = 1.5\n", origin());
    assert!(matches!(result, Err(Error::Config { .. })));
}

#[test]
fn test_from_path_records_source() {
    let dir = TempDir::new().unwrap_or_else(|e| panic!("{e}"));
    let path = dir.path().join(CONFIG_FILE);
    fs::write(&path, "[weights]\nidentifier = 0.2\n").unwrap_or_else(|e| panic!("{e}"));

    let config = Config::from_path(&path).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(config.source.as_deref(), Some(path.as_path()));
    assert!((config.weights.identifier - 0.2).abs() < f64::EPSILON);
}

#[test]
fn test_explicit_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap_or_else(|e| panic!("{e}"));
    let path = dir.path().join("absent.toml");
    let result = Config::load(Some(&path));
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn test_rendered_toml_parses_back() {
    let mut config = Config::new();
    config.weights.operator = 0.3;
    config.scan.report_threshold = 0.4;

    let rendered = config.to_toml().unwrap_or_else(|e| panic!("{e}"));
    assert!(rendered.contains("[weights]"));
    assert!(rendered.contains("[scan]"));

    let parsed = Config::parse_toml(&rendered, origin()).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(parsed.weights, config.weights);
    assert_eq!(parsed.scan.extensions, config.scan.extensions);
}

#[test]
fn test_source_file_extension_match() {
    let config = Config::new();
    assert!(config.is_source_file(Path::new("src/Main.java")));
    assert!(config.is_source_file(Path::new("LEGACY.JAVA")));
    assert!(!config.is_source_file(Path::new("notes.txt")));
    assert!(!config.is_source_file(Path::new("Makefile")));
}
