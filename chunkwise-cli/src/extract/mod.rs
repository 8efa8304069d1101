//! Text extraction backends
//!
//! PDFs go through one of two interchangeable backends; everything else is
//! read as UTF-8 text.

use chunkwise_core::{SourceError, TextSource};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod pdf;
pub mod plain;

pub use pdf::{LopdfSource, PdfExtractSource};
pub use plain::PlainTextSource;

/// PDF extraction backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PdfBackend {
    /// `pdf-extract`: layout-aware text extraction
    #[default]
    PdfExtract,
    /// `lopdf`: page-by-page content stream extraction
    Lopdf,
}

impl PdfBackend {
    /// Name as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            PdfBackend::PdfExtract => "pdf-extract",
            PdfBackend::Lopdf => "lopdf",
        }
    }

    /// All backends, in display order
    pub fn all() -> [PdfBackend; 2] {
        [PdfBackend::PdfExtract, PdfBackend::Lopdf]
    }
}

/// Dispatches on file extension: `.pdf` to the selected backend, anything
/// else to [`PlainTextSource`]
pub struct FileSource {
    pdf: Box<dyn TextSource>,
    plain: PlainTextSource,
}

impl FileSource {
    /// Create a file source using the given PDF backend
    pub fn new(backend: PdfBackend) -> Self {
        let pdf: Box<dyn TextSource> = match backend {
            PdfBackend::PdfExtract => Box::new(PdfExtractSource),
            PdfBackend::Lopdf => Box::new(LopdfSource),
        };
        Self {
            pdf,
            plain: PlainTextSource,
        }
    }

    fn is_pdf(path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
    }
}

impl TextSource for FileSource {
    fn extract(&self, path: &Path) -> Result<String, SourceError> {
        if !path.is_file() {
            return Err(SourceError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let source: &dyn TextSource = if Self::is_pdf(path) {
            self.pdf.as_ref()
        } else {
            &self.plain
        };
        log::debug!("Extracting {} with {}", path.display(), source.name());

        source.extract(path)
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
