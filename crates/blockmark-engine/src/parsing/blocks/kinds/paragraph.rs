use crate::parsing::blocks::types::BlockToken;

use super::is_space_or_tab;

/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the default leaf block when no
/// other detector claims a line. Indented lines directly after a paragraph
/// continue it instead of opening code.
pub struct Paragraph;

impl Paragraph {
    /// Resolves a pending indented block against the previous emitted token.
    pub fn resolve_indented(
        depth: usize,
        content: String,
        previous: Option<&BlockToken>,
    ) -> BlockToken {
        match previous {
            Some(BlockToken::Paragraph { .. }) => {
                BlockToken::paragraph(content.trim_start_matches(is_space_or_tab), depth)
            }
            _ => BlockToken::IndentedCodeBlock { depth, content },
        }
    }
}
