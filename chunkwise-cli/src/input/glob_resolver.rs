//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::{glob, Pattern};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Resolve file patterns to actual file paths
///
/// Paths come back in the order the patterns were given, each glob's matches
/// in its own (alphabetical) order, with later duplicates dropped. A pattern
/// without glob metacharacters names one document: it is kept even when the
/// file does not exist, so extraction reports it as missing.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut seen = HashSet::new();

    for pattern in patterns {
        if is_literal(pattern) && !Path::new(pattern).exists() {
            log::debug!("{pattern} does not exist, passing it through");
            if seen.insert(PathBuf::from(pattern)) {
                files.push(PathBuf::from(pattern));
            }
            continue;
        }

        let paths =
            glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.to_string()))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() && seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    Ok(files)
}

fn is_literal(pattern: &str) -> bool {
    Pattern::escape(pattern) == pattern
}
