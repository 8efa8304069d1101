//! Chunk records produced by the splitter

/// One bounded, possibly overlapping segment of a cleaned text
///
/// Offsets are character positions into the cleaned input and describe the
/// window before trimming, so `length` may be smaller than
/// `end_offset - start_offset`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chunk {
    /// 0-based position in the output sequence
    pub index: usize,
    /// Trimmed chunk content, never empty
    pub text: String,
    /// Window start (inclusive), in characters
    pub start_offset: usize,
    /// Window end (exclusive), in characters
    pub end_offset: usize,
    /// Character count of `text`
    pub length: usize,
    /// Base file name of the originating document
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub source_name: Option<String>,
    /// Path or identifier the document was extracted from
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub source_path: Option<String>,
}

impl Chunk {
    pub(crate) fn new(index: usize, text: String, start_offset: usize, end_offset: usize) -> Self {
        let length = text.chars().count();
        Self {
            index,
            text,
            start_offset,
            end_offset,
            length,
            source_name: None,
            source_path: None,
        }
    }

    /// Width of the untrimmed window
    pub fn raw_len(&self) -> usize {
        self.end_offset - self.start_offset
    }

    /// Whether source metadata has been attached
    pub fn has_source(&self) -> bool {
        self.source_name.is_some()
    }
}
