//! Chunker configuration
//!
//! Sizes are counted in characters (Unicode scalar values), not bytes and
//! not tokens.

use crate::error::{ConfigError, ConfigResult};

/// How far back from the tentative window end a `.` may sit and still be used
/// as the chunk end.
pub const SENTENCE_LOOKBACK: usize = 200;

/// How far back from the tentative window end a space may sit and still be
/// used as the chunk end.
pub const WORD_LOOKBACK: usize = 100;

/// Window size and overlap for [`Chunker`](crate::Chunker)
///
/// Invariant once validated: `0 <= overlap < chunk_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChunkerConfig {
    /// Target maximum window length in characters
    pub chunk_size: usize,

    /// Characters shared between the end of one window and the start of the next
    pub overlap: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            chunk_size: 2000,
            overlap: 100,
        }
    }
}

impl ChunkerConfig {
    /// Create a validated configuration
    pub fn new(chunk_size: usize, overlap: usize) -> ConfigResult<Self> {
        let config = Self {
            chunk_size,
            overlap,
        };
        config.validate()?;
        Ok(config)
    }

    /// Creates a new builder for ChunkerConfig
    pub fn builder() -> ChunkerConfigBuilder {
        ChunkerConfigBuilder::new()
    }

    /// Validates the configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }

        if self.overlap >= self.chunk_size {
            return Err(ConfigError::OverlapTooLarge {
                overlap: self.overlap,
                chunk_size: self.chunk_size,
            });
        }

        Ok(())
    }
}

/// Builder for ChunkerConfig with fluent API
#[derive(Debug, Clone)]
pub struct ChunkerConfigBuilder {
    config: ChunkerConfig,
}

impl ChunkerConfigBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            config: ChunkerConfig::default(),
        }
    }

    /// Sets the chunk size in characters
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.config.chunk_size = size;
        self
    }

    /// Sets the overlap in characters
    pub fn overlap(mut self, overlap: usize) -> Self {
        self.config.overlap = overlap;
        self
    }

    /// Builds the configuration, validating parameters
    pub fn build(self) -> ConfigResult<ChunkerConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ChunkerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
