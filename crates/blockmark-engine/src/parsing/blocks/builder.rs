use super::{
    kinds::CodeFence,
    types::{BlockToken, ClassifiedLine, FenceChar, Resolution},
};

#[derive(Debug, Clone)]
struct OpenFence {
    fence: FenceChar,
    info: String,
    opened_at: usize,
}

/// The merge pass: a sequential state machine over classified lines.
///
/// Lines must be pushed in source order. The builder pairs code fences into
/// code blocks, buffering the raw text of every line in between, and resolves
/// transient tokens against the last emitted token.
pub struct BlockBuilder {
    pending_fence: Option<OpenFence>,
    code_buffer: Vec<String>,
    out: Vec<BlockToken>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            pending_fence: None,
            code_buffer: vec![],
            out: vec![],
        }
    }

    pub fn push(&mut self, line: ClassifiedLine) {
        let ClassifiedLine { index, raw, token } = line;

        if let Some(open) = &self.pending_fence {
            if let BlockToken::CodeBlockFence { fence, info } = &token
                && CodeFence::closes(open.fence, *fence, info)
            {
                log::trace!("line {index}: closes fence opened at line {}", open.opened_at);
                self.close_fence();
            } else {
                self.code_buffer.push(raw);
            }
            return;
        }

        if let BlockToken::CodeBlockFence { fence, info } = token {
            log::trace!("line {index}: opens {:?} fence", fence.as_char());
            self.pending_fence = Some(OpenFence {
                fence,
                info,
                opened_at: index,
            });
            return;
        }

        match token.resolve_against(self.out.last()) {
            Resolution::Emit(token) => self.out.push(token),
            Resolution::Promote { heading } => {
                log::trace!("line {index}: setext underline promotes previous paragraph");
                self.out.pop();
                self.out.push(heading);
                self.out.push(BlockToken::SetextHeadingMarker);
            }
        }
    }

    /// Ends the stream and returns the merged tokens.
    ///
    /// A fence still open at this point becomes a code block holding every
    /// line after it.
    pub fn finish(mut self) -> Vec<BlockToken> {
        // EOF flush
        if let Some(open) = &self.pending_fence {
            log::debug!(
                "fence opened at line {} never closed; keeping {} lines as code",
                open.opened_at,
                self.code_buffer.len()
            );
            self.close_fence();
        }
        self.out
    }

    fn close_fence(&mut self) {
        if let Some(open) = self.pending_fence.take() {
            let lines = std::mem::take(&mut self.code_buffer);
            self.out.push(BlockToken::CodeBlock {
                info: open.info,
                lines,
            });
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::classify::classify_line;
    use crate::parsing::blocks::types::ListMarker;
    use pretty_assertions::assert_eq;

    fn merge_tokens(tokens: Vec<BlockToken>) -> Vec<BlockToken> {
        let mut builder = BlockBuilder::new();
        for (index, token) in tokens.into_iter().enumerate() {
            builder.push(ClassifiedLine {
                index,
                raw: String::new(),
                token,
            });
        }
        builder.finish()
    }

    fn merge_lines(lines: &[&str]) -> Vec<BlockToken> {
        let mut builder = BlockBuilder::new();
        for (index, line) in lines.iter().enumerate() {
            builder.push(ClassifiedLine {
                index,
                raw: line.to_string(),
                token: classify_line(line),
            });
        }
        builder.finish()
    }

    fn hyphen(can_be_rule: bool, raw: &str) -> BlockToken {
        BlockToken::HyphenMarker {
            can_be_rule,
            raw: raw.to_string(),
        }
    }

    #[test]
    fn hyphen_after_paragraph_promotes_to_level_two() {
        assert_eq!(
            merge_tokens(vec![BlockToken::paragraph("Title", 0), hyphen(true, "---")]),
            vec![BlockToken::heading(2, "Title"), BlockToken::SetextHeadingMarker]
        );
    }

    #[test]
    fn equal_after_paragraph_promotes_to_level_one() {
        assert_eq!(
            merge_tokens(vec![
                BlockToken::paragraph("Title", 0),
                BlockToken::EqualMarker {
                    raw: "===".to_string()
                },
            ]),
            vec![BlockToken::heading(1, "Title"), BlockToken::SetextHeadingMarker]
        );
    }

    #[test]
    fn asterisk_after_paragraph_promotes_to_level_two() {
        assert_eq!(
            merge_tokens(vec![
                BlockToken::paragraph("Title", 0),
                BlockToken::AsteriskMarker {
                    can_be_rule: true,
                    raw: "***".to_string()
                },
            ]),
            vec![BlockToken::heading(2, "Title"), BlockToken::SetextHeadingMarker]
        );
    }

    #[test]
    fn rule_eligible_marker_without_paragraph_is_rule() {
        assert_eq!(
            merge_tokens(vec![BlockToken::heading(1, "Heading"), hyphen(true, "---")]),
            vec![BlockToken::heading(1, "Heading"), BlockToken::HorizontalRule]
        );
    }

    #[test]
    fn marker_without_paragraph_or_rule_is_text() {
        assert_eq!(
            merge_tokens(vec![
                BlockToken::Blank,
                hyphen(false, "-"),
                BlockToken::EqualMarker {
                    raw: "==".to_string()
                },
            ]),
            vec![
                BlockToken::Blank,
                BlockToken::paragraph("-", 0),
                // The text line just emitted makes the next underline promote it.
                BlockToken::heading(1, "-"),
                BlockToken::SetextHeadingMarker,
            ]
        );
    }

    #[test]
    fn marker_at_start_of_stream() {
        assert_eq!(
            merge_tokens(vec![hyphen(true, "- - -")]),
            vec![BlockToken::HorizontalRule]
        );
    }

    #[test]
    fn second_underline_does_not_promote_heading() {
        assert_eq!(
            merge_lines(&["Title", "---", "---"]),
            vec![
                BlockToken::heading(2, "Title"),
                BlockToken::SetextHeadingMarker,
                BlockToken::HorizontalRule,
            ]
        );
    }

    #[test]
    fn fence_pair_becomes_code_block() {
        assert_eq!(
            merge_lines(&["```go", "code", "```"]),
            vec![BlockToken::code_block("go", vec!["code"])]
        );
    }

    #[test]
    fn fence_interior_is_kept_verbatim() {
        assert_eq!(
            merge_lines(&["~~~", "# not a heading", "", "    indented", "---", "~~~"]),
            vec![BlockToken::code_block(
                "",
                vec!["# not a heading", "", "    indented", "---"]
            )]
        );
    }

    #[test]
    fn fence_with_info_or_other_char_does_not_close() {
        assert_eq!(
            merge_lines(&["```", "~~~", "```rust", "```"]),
            vec![BlockToken::code_block("", vec!["~~~", "```rust"])]
        );
    }

    #[test]
    fn closing_fence_length_is_not_compared() {
        assert_eq!(
            merge_lines(&["`````", "x", "```"]),
            vec![BlockToken::code_block("", vec!["x"])]
        );
    }

    #[test]
    fn unterminated_fence_keeps_remaining_lines_as_code() {
        assert_eq!(
            merge_lines(&["Intro", "```python", "print(1)", "", "# comment"]),
            vec![
                BlockToken::paragraph("Intro", 0),
                BlockToken::code_block("python", vec!["print(1)", "", "# comment"]),
            ]
        );
    }

    #[test]
    fn unterminated_fence_on_last_line_is_empty_block() {
        assert_eq!(
            merge_lines(&["```"]),
            vec![BlockToken::code_block::<String>("", vec![])]
        );
    }

    #[test]
    fn consecutive_code_blocks() {
        assert_eq!(
            merge_lines(&["```a", "1", "```", "```b", "2", "```"]),
            vec![
                BlockToken::code_block("a", vec!["1"]),
                BlockToken::code_block("b", vec!["2"]),
            ]
        );
    }

    #[test]
    fn code_block_is_not_promoted_by_underline() {
        assert_eq!(
            merge_lines(&["```", "x", "```", "---"]),
            vec![
                BlockToken::code_block("", vec!["x"]),
                BlockToken::HorizontalRule
            ]
        );
    }

    #[test]
    fn indented_block_after_paragraph_continues_paragraph() {
        assert_eq!(
            merge_lines(&["Lead", "    lazy"]),
            vec![
                BlockToken::paragraph("Lead", 0),
                BlockToken::paragraph("lazy", 1),
            ]
        );
    }

    #[test]
    fn indented_block_after_blank_is_code() {
        assert_eq!(
            merge_lines(&["Lead", "", "      code"]),
            vec![
                BlockToken::paragraph("Lead", 0),
                BlockToken::Blank,
                BlockToken::IndentedCodeBlock {
                    depth: 1,
                    content: "  code".to_string()
                },
            ]
        );
    }

    #[test]
    fn container_content_is_resolved() {
        assert_eq!(
            merge_lines(&["Text", "> ---", "- ```js"]),
            vec![
                BlockToken::paragraph("Text", 0),
                BlockToken::block_quote(1, BlockToken::HorizontalRule),
                BlockToken::list_item(
                    ListMarker::Hyphen,
                    0,
                    BlockToken::code_block::<String>("js", vec![])
                ),
            ]
        );
    }

    #[test]
    fn output_is_always_terminal() {
        let out = merge_lines(&[
            "Title", "===", "-", "*", "> --", "    x", "+ ```", "- - -", "```", "open",
        ]);
        assert!(out.iter().all(BlockToken::is_terminal), "{out:?}");
    }

    #[test]
    fn empty_stream() {
        assert!(merge_tokens(vec![]).is_empty());
    }
}
