//! Source metadata attachment
//!
//! The chunker never knows where its text came from; callers stamp the
//! document identity onto each chunk once splitting is done.

use crate::chunk::Chunk;
use std::path::Path;

/// Base file name of a document, falling back to the full path
pub fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Stamp `source_name` and `source_path` onto every chunk
pub fn attach_source(chunks: &mut [Chunk], path: &Path) {
    let name = source_name(path);
    let path = path.display().to_string();

    for chunk in chunks {
        chunk.source_name = Some(name.clone());
        chunk.source_path = Some(path.clone());
    }
}
