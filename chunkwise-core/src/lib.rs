//! Boundary-aware text chunking for retrieval and embedding pipelines
//!
//! Long extracted document text is normalized and then cut into bounded,
//! overlapping windows. Windows prefer to end just after a `.` or at a space
//! instead of mid-word, and sizes are counted in characters.
//!
//! # Example
//!
//! ```rust
//! use chunkwise_core::{Chunker, ChunkerConfig};
//!
//! let chunker = Chunker::new(ChunkerConfig::new(2000, 100).unwrap()).unwrap();
//!
//! let raw = "Extracted   page one.\n\n\nExtracted page two.";
//! let chunks = chunker.chunk_text(raw);
//!
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(chunks[0].text, "Extracted page one.\n\nExtracted page two.");
//! ```
//!
//! Document extraction and output are pluggable through [`TextSource`] and
//! [`ChunkSink`]; [`DocumentPipeline`] runs both around a [`Chunker`].

#![warn(missing_docs)]

pub mod chunk;
pub mod chunker;
pub mod config;
pub mod error;
pub mod metadata;
pub mod normalize;
pub mod pipeline;
pub mod sink;
pub mod source;

pub use chunk::Chunk;
pub use chunker::Chunker;
pub use config::{ChunkerConfig, ChunkerConfigBuilder, SENTENCE_LOOKBACK, WORD_LOOKBACK};
pub use error::{ConfigError, ConfigResult, SourceError};
pub use metadata::{attach_source, source_name};
pub use normalize::clean;
pub use pipeline::{BatchOutcome, DocumentFailure, DocumentPipeline};
pub use sink::{render_report, ChunkSink, ReportSink};
pub use source::{StringSource, TextSource};
