//! # blockmark-engine
//!
//! A block-level structural tokenizer for a Markdown-like markup language.
//!
//! Text goes in, an ordered sequence of [`BlockToken`]s comes out: headings,
//! paragraphs, code blocks, horizontal rules, block quotes, list items,
//! setext headings and indented code. Inline spans and rendering are left to
//! the consumer.
//!
//! ```text
//! text → lines → (parallel) classify → reorder by index → merge pass → tokens
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use blockmark_engine::{BlockToken, tokenize};
//!
//! let tokens = tokenize("Title\n=====\n\n```rust\nfn main() {}\n```");
//!
//! assert_eq!(
//!     tokens,
//!     vec![
//!         BlockToken::heading(1, "Title"),
//!         BlockToken::SetextHeadingMarker,
//!         BlockToken::Blank,
//!         BlockToken::code_block("rust", vec!["fn main() {}"]),
//!     ]
//! );
//! ```

pub mod error;
pub mod parsing;

pub use error::TokenError;
pub use parsing::{
    Tokenizer, TokenizerOptions,
    blocks::{BlockToken, FenceChar, HeadingLevel, ListMarker, classify_line},
    indent::{IndentInfo, count_indent},
    tokenize,
};
