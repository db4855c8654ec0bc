//! Compact text outline of a token sequence, one line per token.
//!
//! Used for snapshot tests and as the CLI's default output. Container content
//! is rendered after a `>` on the same line.

use crate::parsing::blocks::BlockToken;

pub fn render(tokens: &[BlockToken]) -> String {
    tokens
        .iter()
        .map(render_token)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_token(token: &BlockToken) -> String {
    match token {
        BlockToken::Heading { level, text } => format!("Heading({}, {text:?})", level.get()),
        BlockToken::Paragraph { text, depth } => format!("Paragraph({text:?}, {depth})"),
        BlockToken::IndentedBlock { depth, content } => {
            format!("IndentedBlock({depth}, {content:?})")
        }
        BlockToken::IndentedCodeBlock { depth, content } => {
            format!("IndentedCode({depth}, {content:?})")
        }
        BlockToken::CodeBlockFence { fence, info } => {
            format!("Fence({:?}, {info:?})", fence.as_char())
        }
        BlockToken::CodeBlock { info, lines } => format!("CodeBlock({info:?}) {lines:?}"),
        BlockToken::HyphenMarker { can_be_rule, raw } => {
            format!("HyphenMarker({can_be_rule}, {raw:?})")
        }
        BlockToken::AsteriskMarker { can_be_rule, raw } => {
            format!("AsteriskMarker({can_be_rule}, {raw:?})")
        }
        BlockToken::EqualMarker { raw } => format!("EqualMarker({raw:?})"),
        BlockToken::HorizontalRule => "HorizontalRule".to_string(),
        BlockToken::SetextHeadingMarker => "SetextHeadingMarker".to_string(),
        BlockToken::BlockQuote { depth, content } => {
            format!("Quote({depth}) > {}", render_token(content))
        }
        BlockToken::ListItem {
            marker,
            depth,
            content,
        } => format!(
            "Item({:?}, {depth}) > {}",
            marker.as_char(),
            render_token(content)
        ),
        BlockToken::Blank => "Blank".to_string(),
    }
}
