use crate::parsing::blocks::types::{BlockToken, HeadingLevel};

use super::is_space_or_tab;

/// ATX heading: one to six `#`, a separator, then inline text.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';

    /// Detects an ATX heading at the start of `input`.
    ///
    /// The opening run alone decides the level; a closing `#` run is dropped
    /// only when whitespace separates it from the text, whatever its length.
    pub fn detect(input: &str) -> Option<BlockToken> {
        let level = input.chars().take_while(|&c| c == Self::MARKER).count();
        if level == 0 || level > usize::from(HeadingLevel::MAX) {
            return None;
        }

        // `#` is one byte, so the char count is also the byte offset.
        let rest = &input[level..];
        if let Some(c) = rest.chars().next()
            && !is_space_or_tab(c)
        {
            return None;
        }

        let text = Self::strip_closing_sequence(rest.trim_matches(is_space_or_tab));
        let level = u8::try_from(level).ok()?;
        Some(BlockToken::heading(level, text))
    }

    fn strip_closing_sequence(text: &str) -> &str {
        let without = text.trim_end_matches(Self::MARKER);
        if without.len() == text.len() || without.is_empty() {
            return without;
        }
        if without.ends_with(is_space_or_tab) {
            without.trim_end_matches(is_space_or_tab)
        } else {
            text
        }
    }
}
