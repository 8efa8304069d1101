//! Chunk command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::extract::{FileSource, PdfBackend};
use crate::input::resolve_patterns;
use crate::output::{create_sink, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use chunkwise_core::{source_name, BatchOutcome, Chunker, ChunkerConfig, DocumentPipeline};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the chunk command
#[derive(Debug, Args)]
pub struct ChunkArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: report]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Target maximum chunk length in characters [default: 2000]
    #[arg(short = 's', long, value_name = "CHARS")]
    pub chunk_size: Option<usize>,

    /// Characters shared between consecutive chunks [default: 100]
    #[arg(long, value_name = "CHARS")]
    pub overlap: Option<usize>,

    /// PDF extraction backend [default: pdf-extract]
    #[arg(short, long, value_enum)]
    pub backend: Option<PdfBackend>,

    /// Process documents in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for --parallel (default: one per CPU)
    #[arg(short = 't', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ChunkArgs {
    /// Execute the chunk command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting document chunking");
        log::debug!("Arguments: {:?}", self);

        let config = self.effective_config()?;
        let chunker = Chunker::new(config.chunking)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        log::info!(
            "Chunk size {} chars, overlap {} chars, PDF backend {}",
            config.chunking.chunk_size,
            config.chunking.overlap,
            config.extraction.backend.as_str()
        );

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} documents to process", files.len());

        let pipeline = DocumentPipeline::new(chunker, FileSource::new(config.extraction.backend));
        let outcome = self.run_batch(&pipeline, &files, config.performance.resolved_threads())?;

        self.write_output(&outcome, &config)?;

        if !self.quiet {
            eprintln!(
                "Processed {} files with {} total chunks ({} failed)",
                outcome.succeeded(),
                outcome.total_chunks(),
                outcome.failed()
            );
        }

        if outcome.succeeded() == 0 {
            return Err(CliError::NothingProcessed(outcome.failed()).into());
        }
        Ok(())
    }

    /// Merge defaults, the config file and command-line flags
    fn effective_config(&self) -> Result<CliConfig> {
        let mut config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        config.chunking = ChunkerConfig {
            chunk_size: self.chunk_size.unwrap_or(config.chunking.chunk_size),
            overlap: self.overlap.unwrap_or(config.chunking.overlap),
        };
        if let Some(backend) = self.backend {
            config.extraction.backend = backend;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(threads) = self.threads {
            if threads == 0 {
                return Err(
                    CliError::ConfigError("Thread count must be greater than 0".into()).into(),
                );
            }
            config.performance.worker_threads = threads;
        }

        Ok(config)
    }

    fn run_batch(
        &self,
        pipeline: &DocumentPipeline<FileSource>,
        files: &[PathBuf],
        threads: usize,
    ) -> Result<BatchOutcome> {
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let outcome = if self.parallel {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build worker thread pool")?;
            log::info!("Processing in parallel on {} threads", threads);

            let outcome = pool.install(|| pipeline.process_batch_parallel(files));
            progress.all_completed();
            outcome
        } else {
            pipeline.process_batch_with(files, |path, succeeded| {
                progress.file_completed(&source_name(path), succeeded)
            })
        };

        progress.finish();
        Ok(outcome)
    }

    fn write_output(&self, outcome: &BatchOutcome, config: &CliConfig) -> Result<()> {
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout().lock()),
        };

        let mut sink = create_sink(config.output.format, writer, config.output.pretty_json);
        for chunks in outcome.documents.values() {
            sink.write_document(chunks)
                .context("Failed to write chunks")?;
        }
        sink.finish().context("Failed to write chunks")?;

        if let Some(path) = &self.output {
            log::info!("Chunks saved to {}", path.display());
        }
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // Already initialised when several commands run in one process (tests)
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}
