//! PDF text extraction

use chunkwise_core::{SourceError, TextSource};
use std::panic;
use std::path::Path;

/// Extraction through the `pdf-extract` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractSource;

impl TextSource for PdfExtractSource {
    fn extract(&self, path: &Path) -> Result<String, SourceError> {
        // pdf-extract panics on some malformed font and encoding tables
        let result = panic::catch_unwind(|| pdf_extract::extract_text(path))
            .map_err(|_| SourceError::extraction(path, "pdf-extract panicked"))?;

        let text = result.map_err(|e| SourceError::extraction(path, e))?;
        if text.trim().is_empty() {
            log::warn!(
                "{} contains no extractable text (scanned document?)",
                path.display()
            );
        }
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "pdf-extract"
    }
}

/// Page-by-page extraction through `lopdf`
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfSource;

impl TextSource for LopdfSource {
    fn extract(&self, path: &Path) -> Result<String, SourceError> {
        let document =
            lopdf::Document::load(path).map_err(|e| SourceError::extraction(path, e))?;

        let mut text = String::new();
        for page_number in document.get_pages().keys() {
            let page_text = document
                .extract_text(&[*page_number])
                .map_err(|e| SourceError::extraction(path, format!("page {page_number}: {e}")))?;
            text.push_str(&page_text);
            text.push('\n');
        }

        log::debug!(
            "Extracted {} chars from {}",
            text.chars().count(),
            path.display()
        );
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "lopdf"
    }
}
