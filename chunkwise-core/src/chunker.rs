//! Window-advance splitting with sentence and word boundary snapping

use crate::{
    chunk::Chunk,
    config::{ChunkerConfig, SENTENCE_LOOKBACK, WORD_LOOKBACK},
    error::ConfigResult,
    normalize,
};

/// Splits cleaned text into overlapping, boundary-aware chunks
///
/// A `Chunker` only holds its validated configuration, so one instance can be
/// shared freely across threads working on different documents.
///
/// ```
/// use chunkwise_core::{Chunker, ChunkerConfig};
///
/// let chunker = Chunker::new(ChunkerConfig::new(20, 5)?)?;
/// let chunks = chunker.split("The quick brown fox jumps over the lazy dog. It runs fast.");
///
/// assert_eq!(chunks[0].text, "The quick brown fox");
/// assert_eq!(chunks.last().unwrap().end_offset, 58);
/// # Ok::<(), chunkwise_core::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    /// Create a chunker, rejecting invalid configurations
    pub fn new(config: ChunkerConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this chunker was built with
    pub fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Normalize whitespace, see [`normalize::clean`]
    pub fn clean(&self, text: &str) -> String {
        normalize::clean(text)
    }

    /// Clean raw extracted text and split it
    pub fn chunk_text(&self, raw: &str) -> Vec<Chunk> {
        self.split(&self.clean(raw))
    }

    /// Split text into chunks
    ///
    /// Each window is at most `chunk_size` characters. Non-final windows are
    /// pulled back to just after the last `.` within [`SENTENCE_LOOKBACK`]
    /// characters of the tentative end, otherwise to the last space within
    /// [`WORD_LOOKBACK`] characters, otherwise cut mid-word. The next window
    /// starts `overlap` characters before the previous end.
    ///
    /// The run stops early when `end - overlap` is not positive, even if text
    /// remains. This only happens when the very first window snaps to an end
    /// at or below `overlap`.
    pub fn split(&self, text: &str) -> Vec<Chunk> {
        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();
        let ChunkerConfig {
            chunk_size,
            overlap,
        } = self.config;

        let mut chunks = Vec::new();
        let mut start = 0;

        while start < len {
            let tentative_end = start + chunk_size;
            let end = if tentative_end < len {
                snap_end(&chars, start, tentative_end)
            } else {
                len
            };

            let window: String = chars[start..end].iter().collect();
            let trimmed = window.trim();
            if !trimmed.is_empty() {
                chunks.push(Chunk::new(chunks.len(), trimmed.to_string(), start, end));
            }

            if end == len {
                break;
            }

            if end <= overlap {
                log::debug!(
                    "stopping at offset {end}: next window start would not be positive (overlap {overlap})"
                );
                break;
            }

            // A snapped end can sit within `overlap` of the window start
            let next = end - overlap;
            start = if next > start { next } else { end };
        }

        log::debug!("split {len} chars into {} chunks", chunks.len());
        chunks
    }
}

/// Pick the end of a non-final window `[start, tentative_end)`
fn snap_end(chars: &[char], start: usize, tentative_end: usize) -> usize {
    let window = &chars[start..tentative_end];

    if let Some(pos) = window.iter().rposition(|&c| c == '.') {
        let pos = start + pos;
        if pos + SENTENCE_LOOKBACK > tentative_end {
            return pos + 1;
        }
    }

    if let Some(pos) = window.iter().rposition(|&c| c == ' ') {
        let pos = start + pos;
        // A space at the window start would leave nothing to emit
        if pos > start && pos + WORD_LOOKBACK > tentative_end {
            return pos;
        }
    }

    tentative_end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    fn chunker(chunk_size: usize, overlap: usize) -> Chunker {
        Chunker::new(ChunkerConfig::new(chunk_size, overlap).unwrap()).unwrap()
    }

    fn windows(chunks: &[Chunk]) -> Vec<(usize, usize)> {
        chunks
            .iter()
            .map(|c| (c.start_offset, c.end_offset))
            .collect()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = ChunkerConfig {
            chunk_size: 10,
            overlap: 10,
        };
        assert!(matches!(
            Chunker::new(config),
            Err(ConfigError::OverlapTooLarge { .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(chunker(10, 2).split("").is_empty());
        assert!(chunker(10, 2).chunk_text(" \n\n\t ").is_empty());
    }

    #[test]
    fn test_short_text_single_chunk() {
        let chunks = Chunker::default().split("Hello world. This is a test.");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].index, 0);
        assert_eq!(chunks[0].text, "Hello world. This is a test.");
        assert_eq!(chunks[0].start_offset, 0);
        assert_eq!(chunks[0].end_offset, 28);
        assert_eq!(chunks[0].length, 28);
    }

    #[test]
    fn test_small_window_scenario() {
        let text = "The quick brown fox jumps over the lazy dog. It runs fast.";
        let chunks = chunker(20, 5).split(text);

        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "The quick brown fox",
                "n fox jumps over",
                "over the lazy dog.",
                "dog. It runs fast.",
            ]
        );
        assert_eq!(windows(&chunks), vec![(0, 19), (14, 30), (25, 44), (39, 58)]);
        assert_eq!(chunks.last().unwrap().end_offset, text.chars().count());
    }

    #[test]
    fn test_raw_windows_without_boundaries() {
        let chunks = chunker(10, 3).split("abcdefghijklmnopqrstuvwxyz");

        assert_eq!(windows(&chunks), vec![(0, 10), (7, 17), (14, 24), (21, 26)]);
        assert_eq!(chunks[0].text, "abcdefghij");
        assert_eq!(chunks[1].text, "hijklmnopq");
        assert_eq!(chunks[3].text, "vwxyz");
    }

    #[test]
    fn test_sentence_boundary_within_lookback() {
        let text = format!(
            "{}. {}",
            vec!["word"; 50].join(" "),
            vec!["xxxxxxxxxx"; 40].join(" ")
        );
        assert_eq!(text.chars().count(), 690);

        let chunks = chunker(300, 50).split(&text);

        // First window ends right after the period at 249, the second falls
        // back to the last space because that period is now too far back.
        assert_eq!(windows(&chunks), vec![(0, 250), (200, 492), (442, 690)]);
        assert!(chunks[0].text.ends_with("word."));
    }

    #[test]
    fn test_boundaries_outside_lookback_are_ignored() {
        let text = format!("First sentence here. {}", "y".repeat(400));
        let chunks = chunker(300, 50).split(&text);

        assert_eq!(windows(&chunks), vec![(0, 300), (250, 421)]);
    }

    #[test]
    fn test_single_char_windows() {
        let chunks = chunker(1, 0).split("a b. c");

        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", ".", "c"]);
        assert_eq!(windows(&chunks), vec![(0, 1), (2, 3), (3, 4), (5, 6)]);
        let indices: Vec<usize> = chunks.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_early_exit_when_first_window_ends_within_overlap() {
        // The first window snaps back to the space at 4; 4 - 15 is not
        // positive so splitting stops with most of the text unconsumed.
        let text = format!("aaaa {}", "b".repeat(46));
        let chunks = chunker(20, 15).split(&text);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "aaaa");
        assert_eq!(windows(&chunks), vec![(0, 4)]);
    }

    #[test]
    fn test_snapped_end_near_start_still_advances() {
        let text = format!("{} {}", "a".repeat(24), "b".repeat(33));
        let chunks = chunker(20, 15).split(&text);

        assert_eq!(
            windows(&chunks),
            vec![
                (0, 20),
                (5, 24),
                (9, 24),
                (24, 44),
                (29, 49),
                (34, 54),
                (39, 58)
            ]
        );
        for pair in chunks.windows(2) {
            assert!(pair[0].start_offset < pair[1].start_offset);
        }
    }

    #[test]
    fn test_multibyte_offsets_are_chars() {
        let chunks = chunker(8, 2).split("héllo wörld ünïcode tëxt");

        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["héllo", "lo", "wörld", "ld", "ünïcode", "de tëxt"]);
        assert_eq!(chunks[4].length, 7);
        assert_eq!(chunks.last().unwrap().end_offset, 24);
    }

    #[test]
    fn test_overlap_with_word_snapping() {
        let chunks = chunker(10, 2).split("alpha beta gamma delta epsilon");

        assert_eq!(
            windows(&chunks),
            vec![(0, 5), (3, 10), (8, 16), (14, 22), (20, 30)]
        );
        assert_eq!(chunks[1].text, "ha beta");
    }
}
