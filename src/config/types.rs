use crate::similarity::Weights;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Options for scoring a whole directory of sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// File extensions (without the dot) considered source files.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Pairs scoring below this are left out of matrix output.
    #[serde(default)]
    pub report_threshold: f64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            report_threshold: 0.0,
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec!["java".into()]
}

/// On-disk layout of `codesim.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CodesimToml {
    #[serde(default)]
    pub weights: Weights,
    #[serde(default)]
    pub scan: ScanConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub weights: Weights,
    pub scan: ScanConfig,
    /// File the settings came from, if any.
    pub source: Option<PathBuf>,
}
