//! Text sources: anything that turns a document identifier into plain text

use crate::error::SourceError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Supplies extracted text for a document
///
/// Implementations own every format concern (PDF parsing, decoding, file
/// access). The chunker only ever sees the returned string.
pub trait TextSource: Send + Sync {
    /// Extract the full text of a document
    fn extract(&self, path: &Path) -> Result<String, SourceError>;

    /// Short backend name used in logs
    fn name(&self) -> &'static str;
}

impl<S: TextSource + ?Sized> TextSource for &S {
    fn extract(&self, path: &Path) -> Result<String, SourceError> {
        (**self).extract(path)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<S: TextSource + ?Sized> TextSource for Box<S> {
    fn extract(&self, path: &Path) -> Result<String, SourceError> {
        (**self).extract(path)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// In-memory source keyed by path
///
/// Documents can be registered as failing to simulate extraction errors.
#[derive(Debug, Default)]
pub struct StringSource {
    documents: HashMap<PathBuf, Result<String, String>>,
}

impl StringSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document's text
    pub fn with_document(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.documents.insert(path.into(), Ok(text.into()));
        self
    }

    /// Register a document whose extraction fails with `reason`
    pub fn with_failure(mut self, path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        self.documents.insert(path.into(), Err(reason.into()));
        self
    }
}

impl TextSource for StringSource {
    fn extract(&self, path: &Path) -> Result<String, SourceError> {
        match self.documents.get(path) {
            Some(Ok(text)) => Ok(text.clone()),
            Some(Err(reason)) => Err(SourceError::extraction(path, reason)),
            None => Err(SourceError::NotFound {
                path: path.to_path_buf(),
            }),
        }
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_source() {
        let source = StringSource::new()
            .with_document("a.txt", "alpha")
            .with_failure("b.pdf", "encrypted");

        assert_eq!(source.extract(Path::new("a.txt")).unwrap(), "alpha");
        assert!(matches!(
            source.extract(Path::new("b.pdf")),
            Err(SourceError::Extraction { .. })
        ));
        assert!(matches!(
            source.extract(Path::new("c.txt")),
            Err(SourceError::NotFound { .. })
        ));
    }

    #[test]
    fn test_boxed_source() {
        let source: Box<dyn TextSource> = Box::new(StringSource::new().with_document("x", "y"));
        assert_eq!(source.extract(Path::new("x")).unwrap(), "y");
        assert_eq!(source.name(), "memory");
    }
}
