use crate::parsing::indent::count_indent;

use super::{
    kinds::{BlockQuote, CodeFence, Heading, HorizontalRule, ListItem, Marker},
    types::BlockToken,
};

/// Classifies individual lines for the block parsing phase.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Anything that depends on the
/// neighbouring lines is left as a transient token for the merge pass.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into exactly one [`BlockToken`].
    ///
    /// Total and deterministic: every input yields a token, and lines no
    /// detector claims become a depth-0 paragraph holding the full line.
    pub fn classify(&self, line: &str) -> BlockToken {
        let indent = count_indent(line);
        let input = &line[indent.seek_pos..];

        let Some(first) = input.chars().next() else {
            return BlockToken::Blank;
        };

        if indent.depth > 0 {
            if first == Marker::HYPHEN
                && let Some(item) = ListItem::detect(input)
            {
                return item.with_list_depth(indent.depth);
            }

            let content = format!("{}{input}", " ".repeat(indent.remain_space));
            return BlockToken::indented_block(indent.depth, content);
        }

        Self::dispatch(first, input).unwrap_or_else(|| BlockToken::paragraph(line, 0))
    }

    fn dispatch(first: char, input: &str) -> Option<BlockToken> {
        match first {
            Heading::MARKER => Heading::detect(input),
            '`' | '~' => CodeFence::detect(input),
            Marker::HYPHEN => Marker::detect_hyphen(input),
            Marker::ASTERISK => Marker::detect_asterisk(input),
            BlockQuote::PREFIX => BlockQuote::detect(input),
            '+' => ListItem::detect(input),
            '_' => HorizontalRule::detect(input),
            Marker::EQUAL => Some(Marker::detect_equal(input)),
            _ => None,
        }
    }
}

/// Classifies one line with [`MarkdownLineClassifier`].
///
/// Container detectors call this for their content, so nesting recurses on
/// the current thread.
pub fn classify_line(line: &str) -> BlockToken {
    MarkdownLineClassifier.classify(line)
}
