use crate::parsing::blocks::types::BlockToken;

/// Thematic break: three or more of one marker character, spaces allowed.
pub struct HorizontalRule;

impl HorizontalRule {
    pub const MIN_MARKERS: usize = 3;

    /// Whether `input` is a rule made of its first character.
    ///
    /// Spaces may appear anywhere after the first marker; any other
    /// character disqualifies the line.
    pub fn matches(input: &str) -> bool {
        let mut chars = input.chars();
        let Some(marker) = chars.next() else {
            return false;
        };
        if marker == ' ' {
            return false;
        }

        let mut count = 1usize;
        for c in chars {
            if c == ' ' {
                continue;
            }
            if c != marker {
                return false;
            }
            count += 1;
        }

        count >= Self::MIN_MARKERS
    }

    pub fn detect(input: &str) -> Option<BlockToken> {
        Self::matches(input).then_some(BlockToken::HorizontalRule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::asterisks("***")]
    #[case::underscores("___")]
    #[case::hyphens("---")]
    #[case::long_asterisks("*****")]
    #[case::long_underscores("_____")]
    #[case::long_hyphens("-----")]
    #[case::spaced("- - -")]
    #[case::irregular_spacing("*  **   *")]
    #[case::trailing_space("---   ")]
    fn matches_rules(#[case] input: &str) {
        assert!(HorizontalRule::matches(input));
        assert_eq!(HorizontalRule::detect(input), Some(BlockToken::HorizontalRule));
    }

    #[rstest]
    #[case::one("*")]
    #[case::two("__")]
    #[case::two_spaced("- -")]
    #[case::other_character("--a")]
    #[case::mixed_markers("-*-")]
    #[case::tab_inside("-\t--")]
    #[case::leading_space(" ---")]
    #[case::empty("")]
    fn declines_non_rules(#[case] input: &str) {
        assert!(!HorizontalRule::matches(input));
        assert_eq!(HorizontalRule::detect(input), None);
    }
}
