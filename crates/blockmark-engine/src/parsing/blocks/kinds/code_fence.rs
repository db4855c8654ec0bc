use crate::parsing::blocks::types::{BlockToken, FenceChar};

/// Fenced code block delimiters: three or more backticks or tildes.
pub struct CodeFence;

impl CodeFence {
    pub const MIN_RUN: usize = 3;

    /// Detects an opening or closing fence line.
    ///
    /// The info string is the run of non-fence characters directly after the
    /// opening run, cut at the next fence character and trimmed.
    pub fn detect(input: &str) -> Option<BlockToken> {
        let first = input.chars().next()?;
        let fence = FenceChar::from_char(first)?;

        let run = input.chars().take_while(|&c| c == first).count();
        if run < Self::MIN_RUN {
            return None;
        }

        let rest = &input[run..];
        let info = rest.find(first).map_or(rest, |end| &rest[..end]).trim();

        Some(BlockToken::code_fence(fence, info))
    }

    /// Whether a fence line closes a block opened with `open`.
    ///
    /// Only a bare fence (no info string) of the same character closes; the
    /// run length is not compared.
    pub fn closes(open: FenceChar, fence: FenceChar, info: &str) -> bool {
        info.is_empty() && open == fence
    }

    /// A fence that never found a partner line, as an empty code block.
    pub fn unpaired(info: String) -> BlockToken {
        BlockToken::CodeBlock {
            info,
            lines: vec![],
        }
    }
}
