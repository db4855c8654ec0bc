use crate::parsing::blocks::types::{BlockToken, HeadingLevel, Resolution};

use super::{HorizontalRule, ListItem};

/// Lines whose meaning depends on the block emitted before them.
///
/// A `-` or `*` line can be a setext underline, a horizontal rule, a list
/// item or plain text; an `=` line can be a setext underline or text. The
/// classifier only records what the line could be, and the merge pass picks
/// a reading with [`Marker::resolve`].
pub struct Marker;

enum Reading {
    Ambiguous { can_be_rule: bool },
    Item(BlockToken),
}

impl Marker {
    pub const HYPHEN: char = '-';
    pub const ASTERISK: char = '*';
    pub const EQUAL: char = '=';

    /// Level of a heading underlined with `-` or `*`.
    pub const UNDERLINE_LEVEL: HeadingLevel = HeadingLevel::H2;
    /// Level of a heading underlined with `=`.
    pub const EQUAL_UNDERLINE_LEVEL: HeadingLevel = HeadingLevel::H1;

    pub fn detect_hyphen(input: &str) -> Option<BlockToken> {
        Some(match Self::read(Self::HYPHEN, input)? {
            Reading::Ambiguous { can_be_rule } => BlockToken::HyphenMarker {
                can_be_rule,
                raw: input.to_string(),
            },
            Reading::Item(item) => item,
        })
    }

    pub fn detect_asterisk(input: &str) -> Option<BlockToken> {
        Some(match Self::read(Self::ASTERISK, input)? {
            Reading::Ambiguous { can_be_rule } => BlockToken::AsteriskMarker {
                can_be_rule,
                raw: input.to_string(),
            },
            Reading::Item(item) => item,
        })
    }

    /// `=` lines are always deferred to the merge pass.
    pub fn detect_equal(input: &str) -> BlockToken {
        BlockToken::EqualMarker {
            raw: input.to_string(),
        }
    }

    /// Marker followed by a space: a rule stays ambiguous, anything else is a
    /// list item. Without the space the line must be a rule or consist of
    /// marker characters only, otherwise it is left to the paragraph fallback.
    fn read(marker: char, input: &str) -> Option<Reading> {
        let rest = input.strip_prefix(marker)?;
        let can_be_rule = HorizontalRule::matches(input);

        if rest.starts_with(' ') {
            if can_be_rule {
                return Some(Reading::Ambiguous { can_be_rule });
            }
            return ListItem::detect(input).map(Reading::Item);
        }

        (can_be_rule || Self::is_underline(marker, input))
            .then_some(Reading::Ambiguous { can_be_rule })
    }

    /// Only `marker` characters, optionally followed by spaces.
    pub fn is_underline(marker: char, input: &str) -> bool {
        let body = input.trim_end_matches(' ');
        !body.is_empty() && body.chars().all(|c| c == marker)
    }

    /// Picks the reading of an ambiguous line given the previous emitted token.
    ///
    /// After a paragraph the line is an underline and promotes that paragraph
    /// to a heading of `level`. Otherwise it is a rule when it qualifies as
    /// one, and plain text when it does not.
    pub fn resolve(
        level: HeadingLevel,
        can_be_rule: bool,
        raw: String,
        previous: Option<&BlockToken>,
    ) -> Resolution {
        match previous {
            Some(BlockToken::Paragraph { text, .. }) => Resolution::Promote {
                heading: BlockToken::Heading {
                    level,
                    text: text.clone(),
                },
            },
            _ if can_be_rule => Resolution::Emit(BlockToken::HorizontalRule),
            _ => Resolution::Emit(BlockToken::paragraph(raw, 0)),
        }
    }
}
