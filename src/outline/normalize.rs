//! Heading normalization
//!
//! Produces the grouping key used to compare competitor headings: full-width
//! brackets and all whitespace removed. Case folding is opt-in and only
//! touches ASCII letters.

use crate::constants::outline::STRIPPED_BRACKETS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderNormalizer {
    fold_latin_case: bool,
}

impl HeaderNormalizer {
    pub fn new(fold_latin_case: bool) -> Self {
        Self { fold_latin_case }
    }

    /// Canonical grouping key for `raw`
    pub fn normalize(&self, raw: &str) -> String {
        raw.chars()
            .filter(|c| !c.is_whitespace() && !STRIPPED_BRACKETS.contains(c))
            .map(|c| {
                if self.fold_latin_case {
                    c.to_ascii_lowercase()
                } else {
                    c
                }
            })
            .collect()
    }
}

/// Normalize with default settings (no case folding)
pub fn normalize_heading(raw: &str) -> String {
    HeaderNormalizer::default().normalize(raw)
}

/// Human-readable form of a heading: brackets removed, outer whitespace trimmed
pub fn display_heading(raw: &str) -> String {
    raw.replace(STRIPPED_BRACKETS, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bracket_insensitive() {
        assert_eq!(normalize_heading("【SEOとは】"), normalize_heading("SEOとは"));
        assert_eq!(normalize_heading("【SEOとは】"), "SEOとは");
    }

    #[test]
    fn test_whitespace_insensitive() {
        assert_eq!(normalize_heading("a b"), normalize_heading("ab"));
        assert_eq!(normalize_heading("  手数料を　比較する\t\n"), "手数料を比較する");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(normalize_heading(""), "");
        assert_eq!(normalize_heading(" 【 】 "), "");
    }

    #[test]
    fn test_case_preserved_by_default() {
        assert_ne!(normalize_heading("SEO"), normalize_heading("seo"));
    }

    #[test]
    fn test_case_folding_opt_in() {
        let normalizer = HeaderNormalizer::new(true);
        assert_eq!(normalizer.normalize("How To Choose"), normalizer.normalize("how to choose"));
        assert_eq!(normalizer.normalize("How To Choose"), "howtochoose");
        // non-ASCII is untouched
        assert_eq!(normalizer.normalize("ＳＥＯ対策"), "ＳＥＯ対策");
    }

    #[test]
    fn test_display_heading() {
        assert_eq!(display_heading("  【保存版】手数料を比較する "), "保存版手数料を比較する");
        assert_eq!(display_heading("How to choose"), "How to choose");
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(s in "\\PC*") {
            let once = normalize_heading(&s);
            prop_assert_eq!(normalize_heading(&once), once.clone());
        }

        #[test]
        fn prop_output_has_no_whitespace_or_brackets(s in "\\PC*") {
            let key = normalize_heading(&s);
            prop_assert!(!key.chars().any(|c| c.is_whitespace() || c == '【' || c == '】'));
        }

        #[test]
        fn prop_inserted_spacing_and_brackets_do_not_matter(
            a in "[a-zA-Z0-9ぁ-んァ-ン]{0,8}",
            b in "[a-zA-Z0-9ぁ-んァ-ン]{0,8}",
            sep in "[ \t　【】]{1,3}",
        ) {
            let joined = format!("{a}{sep}{b}");
            prop_assert_eq!(normalize_heading(&joined), format!("{a}{b}"));
        }
    }
}
