//! One module per block construct. Each owns the syntax knowledge for its
//! construct (delimiter characters, minimum run lengths) and exposes a
//! `detect` function that either claims a line or declines with `None`.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod horizontal_rule;
pub mod list_item;
pub mod marker;
pub mod paragraph;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use horizontal_rule::HorizontalRule;
pub use list_item::ListItem;
pub use marker::Marker;
pub use paragraph::Paragraph;

/// Space or tab, the only separators block syntax recognises.
pub(crate) fn is_space_or_tab(c: char) -> bool {
    c == ' ' || c == '\t'
}
