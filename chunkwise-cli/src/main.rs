//! `chunkwise` command-line entry point

use chunkwise_cli::commands::Commands;
use chunkwise_cli::CliResult;
use clap::Parser;

/// Split extracted document text into overlapping chunks for retrieval pipelines
#[derive(Debug, Parser)]
#[command(name = "chunkwise", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
