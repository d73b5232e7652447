// src/extractors/normalize.rs
//! String cleanup applied to extracted field values.
//!
//! Each function is a pure transform; the field table in `field.rs` decides
//! which of them run for a given field and in what order.

use once_cell::sync::Lazy;
use regex::Regex;

// Letter-spaced page footer emitted by pdftotext, e.g. "42 | P a g e".
static PAGE_FOOTER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+\s*\|\s*P\s*a\s*g\s*e").expect("Failed to compile PAGE_FOOTER_RE")
});

static SPACE_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" {2,}").expect("Failed to compile SPACE_RUN_RE"));

const FORM_FEED: char = '\u{0C}';

/// Replaces every newline with a single space.
pub fn fold_newlines(value: &str) -> String {
    value.replace('\n', " ")
}

/// Removes every "<digits> | P a g e" footer, wherever it sits in the value.
pub fn strip_page_footers(value: &str) -> String {
    PAGE_FOOTER_RE.replace_all(value, "").into_owned()
}

/// Removes literal form-feed characters left at page breaks.
pub fn strip_form_feeds(value: &str) -> String {
    value.replace(FORM_FEED, "")
}

/// Collapses runs of two or more spaces into one.
pub fn collapse_spaces(value: &str) -> String {
    SPACE_RUN_RE.replace_all(value, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fold_newlines() {
        assert_eq!(fold_newlines("one\ntwo\n\nthree"), "one two  three");
    }

    #[test]
    fn test_strip_page_footers_inside_value() {
        let value = "Run the following:\n\n12 | P a g e\n\u{0C}# mount | grep /tmp";
        let cleaned = strip_form_feeds(&strip_page_footers(value));
        assert_eq!(cleaned, "Run the following:\n\n\n# mount | grep /tmp");
    }

    #[test]
    fn test_strip_page_footers_tolerates_spacing() {
        assert_eq!(strip_page_footers("a 7|P a g e b"), "a  b");
        assert_eq!(strip_page_footers("a 123  |  P a g e"), "a ");
    }

    #[test]
    fn test_strip_page_footers_leaves_pipes_alone() {
        let value = "# lsmod | grep cramfs";
        assert_eq!(strip_page_footers(value), value);
    }

    #[test]
    fn test_collapse_spaces() {
        assert_eq!(collapse_spaces("a  b    c d"), "a b c d");
        assert_eq!(collapse_spaces("tab\t\tstays"), "tab\t\tstays");
    }

    proptest! {
        #[test]
        fn collapse_spaces_is_idempotent(input in "[ a-z\\n\\t]{0,64}") {
            let once = collapse_spaces(&input);
            prop_assert_eq!(collapse_spaces(&once), once.clone());
            prop_assert!(!once.contains("  "));
        }
    }
}
