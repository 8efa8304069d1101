//! JSON output formatter

use chunkwise_core::{Chunk, ChunkSink};
use std::io::{self, Write};

/// JSON formatter - outputs every chunk of every document as one array
pub struct JsonSink<W: Write> {
    writer: W,
    pretty: bool,
    chunks: Vec<Chunk>,
}

impl<W: Write> JsonSink<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            chunks: Vec::new(),
        }
    }
}

impl<W: Write> ChunkSink for JsonSink<W> {
    fn write_document(&mut self, chunks: &[Chunk]) -> io::Result<()> {
        self.chunks.extend_from_slice(chunks);
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.chunks)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.chunks)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()
    }
}
