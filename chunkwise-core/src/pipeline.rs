//! Document and batch processing
//!
//! Ties a [`TextSource`] to a [`Chunker`]: extract, clean, split, then stamp
//! source metadata. A batch never fails as a whole; documents that cannot be
//! extracted are recorded and skipped. Results keep the order the documents
//! were requested in.

use crate::{
    chunk::Chunk,
    chunker::Chunker,
    error::SourceError,
    metadata::{attach_source, source_name},
    source::TextSource,
};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// A document that could not be chunked
#[derive(Debug)]
pub struct DocumentFailure {
    /// The document as requested
    pub path: PathBuf,
    /// Why it was skipped
    pub error: SourceError,
}

/// Result of chunking a set of documents
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Chunks per document, keyed by base file name, in request order
    pub documents: IndexMap<String, Vec<Chunk>>,
    /// Documents that were skipped
    pub failures: Vec<DocumentFailure>,
    succeeded: usize,
}

impl BatchOutcome {
    /// Number of documents chunked successfully
    ///
    /// Counts every document, including those whose entry in
    /// [`documents`](Self::documents) was replaced by a later document with
    /// the same file name.
    pub fn succeeded(&self) -> usize {
        self.succeeded
    }

    /// Number of documents skipped
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Chunk count across all documents
    pub fn total_chunks(&self) -> usize {
        self.documents.values().map(Vec::len).sum()
    }

    fn record(&mut self, path: &Path, result: Result<Vec<Chunk>, SourceError>) {
        match result {
            Ok(chunks) => {
                self.succeeded += 1;
                let name = source_name(path);
                // The replaced entry keeps its original position
                if let Some(previous) = self.documents.insert(name.clone(), chunks) {
                    log::warn!(
                        "{} replaces an earlier document named {name} ({} chunks dropped from output)",
                        path.display(),
                        previous.len()
                    );
                }
            }
            Err(error) => {
                log::warn!("Error processing {}: {error}", path.display());
                self.failures.push(DocumentFailure {
                    path: path.to_path_buf(),
                    error,
                });
            }
        }
    }
}

/// Extraction plus chunking for whole documents
#[derive(Debug)]
pub struct DocumentPipeline<S> {
    chunker: Chunker,
    source: S,
}

impl<S: TextSource> DocumentPipeline<S> {
    /// Create a pipeline over a text source
    pub fn new(chunker: Chunker, source: S) -> Self {
        Self { chunker, source }
    }

    /// The chunker in use
    pub fn chunker(&self) -> &Chunker {
        &self.chunker
    }

    /// The text source in use
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Chunk a single document
    pub fn process_document(&self, path: &Path) -> Result<Vec<Chunk>, SourceError> {
        let raw = self.source.extract(path)?;
        let mut chunks = self.chunker.chunk_text(&raw);
        attach_source(&mut chunks, path);

        log::info!(
            "Processed {}: {} chunks created",
            source_name(path),
            chunks.len()
        );
        Ok(chunks)
    }

    /// Chunk documents one after another
    pub fn process_batch<P: AsRef<Path>>(&self, paths: &[P]) -> BatchOutcome {
        self.process_batch_with(paths, |_, _| {})
    }

    /// Chunk documents one after another, reporting each completion
    ///
    /// `on_document` receives the path and whether it succeeded.
    pub fn process_batch_with<P, F>(&self, paths: &[P], mut on_document: F) -> BatchOutcome
    where
        P: AsRef<Path>,
        F: FnMut(&Path, bool),
    {
        let mut outcome = BatchOutcome::default();

        for path in paths {
            let path = path.as_ref();
            let result = self.process_document(path);
            on_document(path, result.is_ok());
            outcome.record(path, result);
        }

        outcome
    }

    /// Chunk documents on the current rayon pool
    ///
    /// Results are merged in input order, so the outcome matches
    /// [`process_batch`](Self::process_batch).
    #[cfg(feature = "parallel")]
    pub fn process_batch_parallel<P>(&self, paths: &[P]) -> BatchOutcome
    where
        P: AsRef<Path> + Sync,
    {
        use rayon::prelude::*;

        let results: Vec<_> = paths
            .par_iter()
            .map(|path| self.process_document(path.as_ref()))
            .collect();

        let mut outcome = BatchOutcome::default();
        for (path, result) in paths.iter().zip(results) {
            outcome.record(path.as_ref(), result);
        }
        outcome
    }
}
