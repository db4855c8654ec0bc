use serde::Serialize;

use crate::error::TokenError;

use super::kinds::{CodeFence, Marker, Paragraph};

/// An ATX or setext heading level, always within `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;
    pub const H1: Self = Self(1);
    pub const H2: Self = Self(2);

    pub fn new(level: u8) -> Result<Self, TokenError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(TokenError::InvalidHeadingLevel { level })
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// The character a code fence is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FenceChar {
    Backtick,
    Tilde,
}

impl FenceChar {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '`' => Some(Self::Backtick),
            '~' => Some(Self::Tilde),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Backtick => '`',
            Self::Tilde => '~',
        }
    }
}

/// The bullet character that opened a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListMarker {
    Hyphen,
    Plus,
    Asterisk,
}

impl ListMarker {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(Self::Hyphen),
            '+' => Some(Self::Plus),
            '*' => Some(Self::Asterisk),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Hyphen => '-',
            Self::Plus => '+',
            Self::Asterisk => '*',
        }
    }
}

/// A block-level token.
///
/// Tokens are produced once, by the line classifier or by the merge pass, and
/// are never mutated afterwards. Promotion (for example an ambiguous hyphen
/// line becoming a horizontal rule) always builds a fresh token.
///
/// Some variants are transient: [`BlockToken::IndentedBlock`],
/// [`BlockToken::CodeBlockFence`] and the three marker variants only exist
/// between classification and the merge pass. See [`BlockToken::is_terminal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum BlockToken {
    /// An ATX heading, or a paragraph promoted by a setext underline.
    Heading { level: HeadingLevel, text: String },
    /// Plain inline text. `depth` is the indent level inherited from context.
    Paragraph { text: String, depth: usize },
    /// An indented line whose meaning depends on the preceding block.
    IndentedBlock { depth: usize, content: String },
    /// An indented line resolved as code.
    IndentedCodeBlock { depth: usize, content: String },
    /// An opening or closing fence line.
    CodeBlockFence { fence: FenceChar, info: String },
    /// A fenced code block with its interior lines kept verbatim.
    CodeBlock { info: String, lines: Vec<String> },
    /// A line of `-` that may be a setext underline, a rule or text.
    HyphenMarker { can_be_rule: bool, raw: String },
    /// A line of `*` that may be a setext underline, a rule or text.
    AsteriskMarker { can_be_rule: bool, raw: String },
    /// A line starting with `=`, a setext underline candidate.
    EqualMarker { raw: String },
    HorizontalRule,
    /// Follows a heading promoted from a paragraph by an underline.
    SetextHeadingMarker,
    /// `depth` is the number of `>` prefixes.
    BlockQuote {
        depth: usize,
        content: Box<BlockToken>,
    },
    ListItem {
        marker: ListMarker,
        depth: usize,
        content: Box<BlockToken>,
    },
    Blank,
}

impl BlockToken {
    /// Builds a heading, panicking if `level` is outside `1..=6`.
    ///
    /// An out-of-range level is a caller bug, never an input condition, so
    /// this fails fast instead of clamping. Use [`BlockToken::try_heading`]
    /// to get the error back instead.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        match Self::try_heading(level, text) {
            Ok(token) => token,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_heading(level: u8, text: impl Into<String>) -> Result<Self, TokenError> {
        Ok(Self::Heading {
            level: HeadingLevel::new(level)?,
            text: text.into(),
        })
    }

    pub fn paragraph(text: impl Into<String>, depth: usize) -> Self {
        Self::Paragraph {
            text: text.into(),
            depth,
        }
    }

    pub fn indented_block(depth: usize, content: impl Into<String>) -> Self {
        Self::IndentedBlock {
            depth,
            content: content.into(),
        }
    }

    pub fn code_fence(fence: FenceChar, info: impl Into<String>) -> Self {
        Self::CodeBlockFence {
            fence,
            info: info.into(),
        }
    }

    pub fn code_block<S: Into<String>>(info: impl Into<String>, lines: Vec<S>) -> Self {
        Self::CodeBlock {
            info: info.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn block_quote(depth: usize, content: BlockToken) -> Self {
        Self::BlockQuote {
            depth,
            content: Box::new(content),
        }
    }

    pub fn list_item(marker: ListMarker, depth: usize, content: BlockToken) -> Self {
        Self::ListItem {
            marker,
            depth,
            content: Box::new(content),
        }
    }

    /// Returns the same list item nested at `depth`; other tokens pass through.
    pub fn with_list_depth(self, depth: usize) -> Self {
        match self {
            Self::ListItem {
                marker, content, ..
            } => Self::ListItem {
                marker,
                depth,
                content,
            },
            other => other,
        }
    }

    /// Whether this token may appear in the output of the merge pass.
    ///
    /// Containers are terminal only when their content is.
    pub fn is_terminal(&self) -> bool {
        match self {
            Self::IndentedBlock { .. }
            | Self::CodeBlockFence { .. }
            | Self::HyphenMarker { .. }
            | Self::AsteriskMarker { .. }
            | Self::EqualMarker { .. } => false,
            Self::BlockQuote { content, .. } | Self::ListItem { content, .. } => {
                content.is_terminal()
            }
            Self::Heading { .. }
            | Self::Paragraph { .. }
            | Self::IndentedCodeBlock { .. }
            | Self::CodeBlock { .. }
            | Self::HorizontalRule
            | Self::SetextHeadingMarker
            | Self::Blank => true,
        }
    }

    /// Resolves this token against the token emitted just before it.
    ///
    /// Ambiguous markers either promote the previous paragraph to a setext
    /// heading or settle on their own reading. Indented blocks continue a
    /// preceding paragraph or become code. Container content is resolved in
    /// isolation, since nothing precedes it inside the container.
    pub fn resolve_against(self, previous: Option<&BlockToken>) -> Resolution {
        match self {
            Self::HyphenMarker { can_be_rule, raw } | Self::AsteriskMarker { can_be_rule, raw } => {
                Marker::resolve(Marker::UNDERLINE_LEVEL, can_be_rule, raw, previous)
            }
            Self::EqualMarker { raw } => {
                Marker::resolve(Marker::EQUAL_UNDERLINE_LEVEL, false, raw, previous)
            }
            Self::IndentedBlock { depth, content } => {
                Resolution::Emit(Paragraph::resolve_indented(depth, content, previous))
            }
            Self::CodeBlockFence { info, .. } => Resolution::Emit(CodeFence::unpaired(info)),
            Self::BlockQuote { depth, content } => {
                Resolution::Emit(Self::block_quote(depth, (*content).resolve_nested()))
            }
            Self::ListItem {
                marker,
                depth,
                content,
            } => Resolution::Emit(Self::list_item(marker, depth, (*content).resolve_nested())),
            terminal => Resolution::Emit(terminal),
        }
    }

    fn resolve_nested(self) -> BlockToken {
        match self.resolve_against(None) {
            Resolution::Emit(token) | Resolution::Promote { heading: token } => token,
        }
    }
}

/// Outcome of [`BlockToken::resolve_against`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Emit this token after the previous one.
    Emit(BlockToken),
    /// Replace the previous paragraph with `heading`, then emit a
    /// [`BlockToken::SetextHeadingMarker`].
    Promote { heading: BlockToken },
}

/// One classifier result, tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    /// Zero-based line index in the source text.
    pub index: usize,
    /// The line exactly as it appeared, without its line terminator.
    pub raw: String,
    pub token: BlockToken,
}
