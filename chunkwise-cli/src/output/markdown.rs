//! Markdown output formatter

use chunkwise_core::{Chunk, ChunkSink};
use std::io::{self, Write};

/// Markdown formatter - one second-level section per chunk
pub struct MarkdownSink<W: Write> {
    writer: W,
    chunk_count: usize,
}

impl<W: Write> MarkdownSink<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunk_count: 0,
        }
    }
}

impl<W: Write> ChunkSink for MarkdownSink<W> {
    fn write_document(&mut self, chunks: &[Chunk]) -> io::Result<()> {
        for chunk in chunks {
            self.chunk_count += 1;
            match &chunk.source_name {
                Some(name) => writeln!(self.writer, "## Chunk {} ({name})", chunk.index)?,
                None => writeln!(self.writer, "## Chunk {}", chunk.index)?,
            }
            writeln!(self.writer)?;
            writeln!(self.writer, "- Characters: {}", chunk.length)?;
            writeln!(
                self.writer,
                "- Position: {}-{}",
                chunk.start_offset, chunk.end_offset
            )?;
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", chunk.text)?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total chunks: {}*", self.chunk_count)?;
        self.writer.flush()
    }
}
