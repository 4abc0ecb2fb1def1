// src/discovery.rs
use crate::config::Config;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Directories never descended into.
pub const PRUNE_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "target",
    "build",
    "out",
    ".venv",
    ".cache",
];

/// Finds every source file under `root`, sorted by path.
///
/// # Errors
/// Returns error if `root` itself cannot be read.
pub fn discover(root: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    // Surface a missing or unreadable root instead of reporting zero files.
    std::fs::read_dir(root).map_err(|source| Error::Io {
        source,
        path: root.to_path_buf(),
    })?;

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !should_prune(&e.file_name().to_string_lossy()));

    let (paths, error_count) = accumulate_walker(walker, config);
    if error_count > 0 {
        warn!("encountered {error_count} errors during file walk");
    }
    Ok(paths)
}

#[must_use]
pub fn should_prune(name: &str) -> bool {
    PRUNE_DIRS.contains(&name)
}

fn accumulate_walker<I>(walker: I, config: &Config) -> (Vec<PathBuf>, usize)
where
    I: Iterator<Item = walkdir::Result<walkdir::DirEntry>>,
{
    let mut paths = Vec::new();
    let mut errors = 0;
    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() && config.is_source_file(entry.path()) {
                    paths.push(entry.into_path());
                }
            }
            Err(_) => errors += 1,
        }
    }
    (paths, errors)
}
