// src/config/mod.rs
pub mod types;

pub use self::types::{CodesimToml, Config, ScanConfig};

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Name of the config file picked up from the working directory.
pub const CONFIG_FILE: &str = "codesim.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads settings from `explicit`, else `./codesim.toml` if present, else defaults.
    ///
    /// # Errors
    /// Returns error if an explicit file is missing, or any file read fails or
    /// does not parse and validate.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }
        let local = Path::new(CONFIG_FILE);
        if local.is_file() {
            return Self::from_path(local);
        }
        debug!("no {CONFIG_FILE} found, using defaults");
        Ok(Self::new())
    }

    /// Reads and validates a TOML config file.
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be read, `Config` if it is invalid.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let mut config = Self::parse_toml(&content, path)?;
        config.source = Some(path.to_path_buf());
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parses TOML text. `origin` is only used in error messages.
    ///
    /// # Errors
    /// Returns `Config` on malformed TOML or invalid values.
    pub fn parse_toml(content: &str, origin: &Path) -> Result<Self> {
        let parsed: CodesimToml = toml::from_str(content).map_err(|e| Error::Config {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self {
            weights: parsed.weights,
            scan: parsed.scan,
            source: None,
        };
        config.validate().map_err(|e| Error::Config {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(config)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns `InvalidWeights` for negative or non-finite weights, `Config`
    /// for an empty extension list or an out-of-range threshold.
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        if self.scan.extensions.is_empty() {
            return Err(self.invalid("scan.extensions must not be empty"));
        }
        if !(0.0..=1.0).contains(&self.scan.report_threshold) {
            return Err(self.invalid("scan.report_threshold must be within 0.0..=1.0"));
        }
        Ok(())
    }

    /// Renders the effective settings as TOML.
    ///
    /// # Errors
    /// Returns `Config` if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        let file = CodesimToml {
            weights: self.weights,
            scan: self.scan.clone(),
        };
        toml::to_string_pretty(&file).map_err(|e| self.invalid(&e.to_string()))
    }

    fn invalid(&self, message: &str) -> Error {
        Error::Config {
            path: self
                .source
                .clone()
                .unwrap_or_else(|| Path::new(CONFIG_FILE).to_path_buf()),
            message: message.to_string(),
        }
    }

    /// Returns true if `path` has one of the configured source extensions.
    #[must_use]
    pub fn is_source_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.scan
                    .extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
    }
}
