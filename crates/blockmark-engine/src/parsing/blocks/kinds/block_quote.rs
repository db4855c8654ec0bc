use crate::parsing::blocks::{classify::classify_line, types::BlockToken};

/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not in the
/// classifier's dispatch.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Shortest line that can open a quote: a prefix plus some content.
    pub const MIN_LEN: usize = 2;

    /// Strips the leading run of `>` and spaces, returning (depth, byte_offset).
    ///
    /// Handles `> text`, `>> nested`, `> > spaced nested` and `>text`.
    ///
    /// # Returns
    /// - `depth`: Number of `>` prefixes found (0 if not a blockquote)
    /// - `byte_offset`: Index into `s` where content begins after prefixes
    pub fn strip_prefixes(s: &str) -> (usize, usize) {
        let b = s.as_bytes();
        let mut i = 0usize;
        let mut depth = 0usize;

        while i < b.len() {
            match b[i] {
                b'>' => depth += 1,
                b' ' => {}
                _ => break,
            }
            i += 1;
        }
        (depth, i)
    }

    /// Detects a quote line and classifies its content recursively.
    ///
    /// The nested classification runs on the caller's thread.
    pub fn detect(input: &str) -> Option<BlockToken> {
        if input.len() < Self::MIN_LEN || !input.starts_with(Self::PREFIX) {
            return None;
        }

        let (depth, idx) = Self::strip_prefixes(input);
        Some(BlockToken::block_quote(depth, classify_line(&input[idx..])))
    }
}
