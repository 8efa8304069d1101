//! Plain UTF-8 text documents

use chunkwise_core::{SourceError, TextSource};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reads the file as UTF-8, dropping a leading byte order mark
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextSource;

impl TextSource for PlainTextSource {
    fn extract(&self, path: &Path) -> Result<String, SourceError> {
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SourceError::NotFound {
                path: path.to_path_buf(),
            },
            _ => SourceError::extraction(path, e),
        })?;
        log::debug!("Read {} bytes from {}", bytes.len(), path.display());

        let mut text = String::from_utf8(bytes).map_err(|e| {
            SourceError::extraction(path, format!("not valid UTF-8: {}", e.utf8_error()))
        })?;
        if text.starts_with('\u{feff}') {
            text.drain(..'\u{feff}'.len_utf8());
        }
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "text"
    }
}
