//! Error types for chunking and document processing
//!
//! The chunker itself only fails at construction time. Everything that can
//! go wrong while turning a document into text is a [`SourceError`], which
//! the batch layer records per document instead of propagating.

use std::path::PathBuf;
use thiserror::Error;

/// Invalid chunker configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `chunk_size` was zero
    #[error("Chunk size must be greater than 0")]
    ZeroChunkSize,

    /// `overlap` was not strictly smaller than `chunk_size`
    #[error("Overlap ({overlap}) must be less than chunk size ({chunk_size})")]
    OverlapTooLarge {
        /// The rejected overlap
        overlap: usize,
        /// The configured chunk size
        chunk_size: usize,
    },
}

/// Failure to obtain text for a single document
#[derive(Debug, Error)]
pub enum SourceError {
    /// The document identifier does not resolve to readable content
    #[error("Document not found: {}", path.display())]
    NotFound {
        /// The requested document
        path: PathBuf,
    },

    /// The backend could not extract text from the document
    #[error("Failed to extract text from {}: {reason}", path.display())]
    Extraction {
        /// The document being extracted
        path: PathBuf,
        /// Backend-specific failure description
        reason: String,
    },

    /// No backend handles this kind of document
    #[error("Unsupported document type: {}", path.display())]
    Unsupported {
        /// The rejected document
        path: PathBuf,
    },
}

impl SourceError {
    /// Build an extraction error from any displayable backend error
    pub fn extraction(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        SourceError::Extraction {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// The document this error refers to
    pub fn path(&self) -> &std::path::Path {
        match self {
            SourceError::NotFound { path }
            | SourceError::Extraction { path, .. }
            | SourceError::Unsupported { path } => path,
        }
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::ZeroChunkSize.to_string(),
            "Chunk size must be greater than 0"
        );
        assert_eq!(
            ConfigError::OverlapTooLarge {
                overlap: 100,
                chunk_size: 50
            }
            .to_string(),
            "Overlap (100) must be less than chunk size (50)"
        );
    }

    #[test]
    fn test_source_error_display() {
        let err = SourceError::NotFound {
            path: PathBuf::from("missing.pdf"),
        };
        assert_eq!(err.to_string(), "Document not found: missing.pdf");

        let err = SourceError::extraction("broken.pdf", "invalid xref table");
        assert_eq!(
            err.to_string(),
            "Failed to extract text from broken.pdf: invalid xref table"
        );
    }

    #[test]
    fn test_source_error_path() {
        let err = SourceError::Unsupported {
            path: PathBuf::from("image.png"),
        };
        assert_eq!(err.path(), std::path::Path::new("image.png"));
    }
}
