//! Generate config command implementation

use anyhow::{Context, Result};
use chunkwise_core::ChunkerConfig;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Chunk size to write into the template
    #[arg(short = 's', long, value_name = "CHARS")]
    pub chunk_size: Option<usize>,

    /// Overlap to write into the template
    #[arg(long, value_name = "CHARS")]
    pub overlap: Option<usize>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        let defaults = ChunkerConfig::default();
        let chunking = ChunkerConfig::new(
            self.chunk_size.unwrap_or(defaults.chunk_size),
            self.overlap.unwrap_or(defaults.overlap),
        )
        .context("Refusing to write an invalid chunking section")?;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template(&chunking);

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to adjust chunking and output");
        println!("2. Validate your configuration:");
        println!("   chunkwise validate --config {}", self.output.display());
        println!("3. Use it for chunking:");
        println!(
            "   chunkwise chunk -i 'docs/*.pdf' --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self, chunking: &ChunkerConfig) -> String {
        format!(
            r#"# chunkwise configuration

[chunking]
# Target maximum chunk length in characters
chunk_size = {}
# Characters shared between consecutive chunks (must be less than chunk_size)
overlap = {}

[extraction]
# PDF text extraction backend: "pdf-extract" or "lopdf"
backend = "pdf-extract"

[output]
# Output format: "report", "json" or "markdown"
format = "report"
# Indent JSON output
pretty_json = true

[performance]
# Worker threads used with --parallel (0 = one per CPU)
worker_threads = 0
"#,
            chunking.chunk_size, chunking.overlap
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_generate_template() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("chunkwise.toml"),
            chunk_size: None,
            overlap: None,
        };

        let template = args.generate_template(&ChunkerConfig::default());
        assert!(template.contains("chunk_size = 2000"));
        assert!(template.contains("overlap = 100"));
        assert!(template.contains("[extraction]"));
        assert!(template.contains("[performance]"));
    }

    #[test]
    fn test_execute_writes_loadable_config() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("chunkwise.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
            chunk_size: Some(1200),
            overlap: Some(150),
        };

        assert!(args.execute().is_ok());

        let config = CliConfig::from_file(&output_path).unwrap();
        assert_eq!(config.chunking, ChunkerConfig::new(1200, 150).unwrap());
        assert_eq!(config, CliConfig {
            chunking: config.chunking,
            ..Default::default()
        });
    }

    #[test]
    fn test_execute_rejects_invalid_values() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("bad.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
            chunk_size: Some(100),
            overlap: Some(200),
        };

        assert!(args.execute().is_err());
        assert!(!output_path.exists());
    }
}
