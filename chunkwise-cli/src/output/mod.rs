//! Output formatting module
//!
//! Every format is a [`ChunkSink`]; the plain report comes straight from
//! `chunkwise-core`.

use chunkwise_core::{ChunkSink, ReportSink};
use serde::{Deserialize, Serialize};
use std::io::Write;

pub mod json;
pub mod markdown;

pub use json::JsonSink;
pub use markdown::MarkdownSink;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Delimited plain-text report, one section per chunk
    #[default]
    Report,
    /// JSON array of chunk records
    Json,
    /// Markdown document with one heading per chunk
    Markdown,
}

impl OutputFormat {
    /// Name as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Report => "report",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// All formats, in display order
    pub fn all() -> [OutputFormat; 3] {
        [OutputFormat::Report, OutputFormat::Json, OutputFormat::Markdown]
    }
}

/// Build the sink for `format` over `writer`
pub fn create_sink<'a, W>(format: OutputFormat, writer: W, pretty_json: bool) -> Box<dyn ChunkSink + 'a>
where
    W: Write + 'a,
{
    match format {
        OutputFormat::Report => Box::new(ReportSink::new(writer)),
        OutputFormat::Json => Box::new(JsonSink::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownSink::new(writer)),
    }
}
