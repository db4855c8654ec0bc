use crate::parsing::blocks::{
    classify::classify_line,
    types::{BlockToken, ListMarker},
};

/// Bullet list item: `-`, `+` or `*` followed by a space.
pub struct ListItem;

impl ListItem {
    /// Detects a list item and classifies its content recursively.
    ///
    /// Exactly one space must follow the marker; any further spaces are
    /// skipped before the content. The item is built at depth 0 and the
    /// classifier re-tags it when the line was indented.
    pub fn detect(input: &str) -> Option<BlockToken> {
        let mut chars = input.chars();
        let marker = ListMarker::from_char(chars.next()?)?;
        if chars.next()? != ' ' {
            return None;
        }

        // Marker and separator are both single bytes.
        let content = input[2..].trim_start_matches(' ');
        Some(BlockToken::list_item(marker, 0, classify_line(content)))
    }
}
