//! CLI command implementations

use crate::extract::PdfBackend;
use crate::output::OutputFormat;
use anyhow::Result;
use clap::Subcommand;

pub mod chunk;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split PDF and text documents into overlapping chunks
    Chunk(chunk::ChunkArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List available PDF extraction backends
    Backends,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Chunk(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

impl ListCommands {
    fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Formats => OutputFormat::all()
                .iter()
                .map(|format| format.as_str().to_string())
                .collect(),
            ListCommands::Backends => PdfBackend::all()
                .iter()
                .map(|backend| backend.as_str().to_string())
                .collect(),
        }
    }

    /// Print one component name per line
    pub fn execute(&self) {
        for line in self.lines() {
            println!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let chunk_cmd = Commands::Chunk(chunk::ChunkArgs {
            input: vec!["test.pdf".to_string()],
            output: None,
            format: Some(OutputFormat::Report),
            chunk_size: Some(2000),
            overlap: Some(100),
            backend: None,
            parallel: false,
            threads: None,
            config: None,
            quiet: false,
            verbose: 0,
        });

        let debug_str = format!("{:?}", chunk_cmd);
        assert!(debug_str.contains("Chunk"));
        assert!(debug_str.contains("test.pdf"));

        let list_cmd = Commands::List {
            subcommand: ListCommands::Backends,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Backends"));
    }

    #[test]
    fn test_list_lines() {
        assert_eq!(
            ListCommands::Formats.lines(),
            vec!["report", "json", "markdown"]
        );
        assert_eq!(ListCommands::Backends.lines(), vec!["pdf-extract", "lopdf"]);
    }
}
