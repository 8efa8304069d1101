//! Chunk sinks and the plain-text report format

use crate::chunk::Chunk;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Consumes the chunks of one or more documents
pub trait ChunkSink {
    /// Write all chunks of one document, in order
    fn write_document(&mut self, chunks: &[Chunk]) -> io::Result<()>;

    /// Flush and finalize output
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

const RULE_WIDTH: usize = 50;

/// Human-readable report, one delimited section per chunk
///
/// ```text
/// === CHUNK 0 ===
/// Source: report.pdf
/// Characters: 1987
/// Position: 0-1994
/// --------------------------------------------------
/// <chunk text>
/// ==================================================
/// ```
pub struct ReportSink<W: Write> {
    writer: W,
}

impl<W: Write> ReportSink<W> {
    /// Create a report sink over any writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the sink and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_chunk(&mut self, chunk: &Chunk) -> io::Result<()> {
        writeln!(self.writer, "=== CHUNK {} ===", chunk.index)?;
        writeln!(
            self.writer,
            "Source: {}",
            chunk.source_name.as_deref().unwrap_or("<unknown>")
        )?;
        writeln!(self.writer, "Characters: {}", chunk.length)?;
        writeln!(
            self.writer,
            "Position: {}-{}",
            chunk.start_offset, chunk.end_offset
        )?;
        writeln!(self.writer, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(self.writer, "{}", chunk.text)?;
        writeln!(self.writer, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(self.writer)
    }
}

impl ReportSink<BufWriter<File>> {
    /// Create a report file at `path`, truncating any existing file
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> ChunkSink for ReportSink<W> {
    fn write_document(&mut self, chunks: &[Chunk]) -> io::Result<()> {
        for chunk in chunks {
            self.write_chunk(chunk)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Render chunks in the report format
pub fn render_report(chunks: &[Chunk]) -> String {
    let mut sink = ReportSink::new(Vec::new());
    // Writing into a Vec cannot fail
    let _ = sink.write_document(chunks);
    String::from_utf8_lossy(&sink.into_inner()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{attach_source, Chunker, ChunkerConfig};
    use tempfile::TempDir;

    fn sample_chunks() -> Vec<Chunk> {
        let chunker = Chunker::new(ChunkerConfig::new(20, 5).unwrap()).unwrap();
        let mut chunks =
            chunker.split("The quick brown fox jumps over the lazy dog. It runs fast.");
        attach_source(&mut chunks, Path::new("docs/fox.txt"));
        chunks
    }

    #[test]
    fn test_report_section_layout() {
        let chunks = sample_chunks();
        let report = render_report(&chunks[..1]);

        let expected = format!(
            "=== CHUNK 0 ===\nSource: fox.txt\nCharacters: 19\nPosition: 0-19\n{}\nThe quick brown fox\n{}\n\n",
            "-".repeat(50),
            "=".repeat(50)
        );
        assert_eq!(report, expected);
    }

    #[test]
    fn test_report_contains_every_chunk() {
        let chunks = sample_chunks();
        let report = render_report(&chunks);

        assert_eq!(report.matches("=== CHUNK ").count(), chunks.len());
        assert!(report.contains("=== CHUNK 3 ==="));
        assert!(report.contains("Position: 39-58"));
    }

    #[test]
    fn test_unattached_source_placeholder() {
        let chunks = Chunker::default().split("No metadata here.");
        assert!(render_report(&chunks).contains("Source: <unknown>"));
    }

    #[test]
    fn test_report_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("output_chunks.txt");

        let mut sink = ReportSink::create(&path).unwrap();
        sink.write_document(&sample_chunks()).unwrap();
        sink.finish().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("=== CHUNK 0 ===\nSource: fox.txt\n"));
    }
}
