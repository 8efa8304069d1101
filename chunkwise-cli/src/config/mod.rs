//! Configuration module
//!
//! Values come from, in increasing precedence: built-in defaults, a TOML
//! file passed with `--config`, then command-line flags.

use crate::error::CliError;
use crate::extract::PdfBackend;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use chunkwise_core::ChunkerConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Chunk size and overlap
    #[serde(default)]
    pub chunking: ChunkerConfig,

    /// Extraction configuration
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load a configuration file
    ///
    /// The chunking section is validated here so a bad file fails before any
    /// document is touched.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {}", path.display(), e)))?;

        config
            .chunking
            .validate()
            .map_err(|e| CliError::ConfigError(format!("{}: {}", path.display(), e)))?;

        Ok(config)
    }
}

/// Extraction-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ExtractionConfig {
    /// PDF backend
    pub backend: PdfBackend,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Report,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads for parallel batches (0 = auto)
    pub worker_threads: usize,
}

impl PerformanceConfig {
    /// Worker thread count with `0` resolved to the CPU count
    pub fn resolved_threads(&self) -> usize {
        match self.worker_threads {
            0 => num_cpus::get(),
            n => n,
        }
    }
}
