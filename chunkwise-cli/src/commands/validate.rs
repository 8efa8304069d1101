//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match CliConfig::from_file(&self.config) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                for line in summary(&config) {
                    println!("  {line}");
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(e.context("Validation failed"))
            }
        }
    }
}

/// Effective settings, one per line
fn summary(config: &CliConfig) -> Vec<String> {
    let threads = match config.performance.worker_threads {
        0 => format!("auto ({})", config.performance.resolved_threads()),
        n => n.to_string(),
    };
    vec![
        format!("Chunk size: {}", config.chunking.chunk_size),
        format!("Overlap: {}", config.chunking.overlap),
        format!("PDF backend: {}", config.extraction.backend.as_str()),
        format!("Output format: {}", config.output.format.as_str()),
        format!("Worker threads: {threads}"),
    ]
}
