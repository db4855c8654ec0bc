//! # Block Tokenizing
//!
//! Two-phase block tokenizing: per-line classification, then a sequential
//! merge pass.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`, `dispatch`): every line becomes
//!    exactly one [`BlockToken`] on its own, without looking at its
//!    neighbours. Lines are classified in parallel and reassembled in source
//!    order.
//!
//! 2. **Merge** (`builder`): a [`BlockBuilder`] walks the ordered tokens,
//!    pairs code fences, and resolves ambiguous markers and indented blocks
//!    against the previously emitted token.
//!
//! ## Modules
//!
//! - **`types`**: The token data model (`BlockToken`, `HeadingLevel`, `ClassifiedLine`)
//! - **`kinds`**: One detector per construct, each owning its delimiters
//! - **`classify`**: `MarkdownLineClassifier` dispatches a line to a detector
//! - **`dispatch`**: Parallel classification with index-ordered reassembly
//! - **`builder`**: `BlockBuilder` state machine for the merge pass
//!
//! ## Key Invariants
//!
//! - Every line yields one token; unclaimed lines are paragraphs
//! - Fenced code blocks are raw zones: interior lines are kept verbatim
//! - Merge output only holds terminal tokens, containers included

pub mod builder;
pub mod classify;
pub mod dispatch;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{MarkdownLineClassifier, classify_line};
pub use dispatch::classify_lines;
pub use types::{BlockToken, ClassifiedLine, FenceChar, HeadingLevel, ListMarker, Resolution};
