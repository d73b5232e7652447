// src/extractors/field.rs
//! Anchor-delimited extraction of the named fields of one control span.
//!
//! A field value is the text between its label (e.g. `Rationale:`) and the
//! label of the field that follows it in a benchmark. Either label missing
//! means the field is absent; nothing here returns an error.

use super::normalize::{collapse_spaces, fold_newlines, strip_form_feeds, strip_page_footers};
use once_cell::sync::Lazy;
use regex::Regex;

// --- Regex Patterns (Lazy Static) ---
static SECTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+\.\d+\.\d+(?:\.\d+)*").expect("Failed to compile SECTION_RE")
});

static LEVEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Level \d").expect("Failed to compile LEVEL_RE"));

const PROFILE_ANCHOR: &str = "Profile Applicability:";

/// Values of the impact field that mean "no impact".
const NULL_SENTINELS: [&str; 2] = ["None", "None."];

/// The named fields of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Section,
    Title,
    ProfileApplicability,
    Description,
    Rationale,
    Impact,
    Audit,
    Remediation,
    Default,
    References,
}

#[derive(Debug, Clone, Copy)]
enum Cleanup {
    FoldNewlines,
    StripFooters,
    StripFormFeeds,
    CollapseSpaces,
}

impl Cleanup {
    fn apply(self, value: &str) -> String {
        match self {
            Cleanup::FoldNewlines => fold_newlines(value),
            Cleanup::StripFooters => strip_page_footers(value),
            Cleanup::StripFormFeeds => strip_form_feeds(value),
            Cleanup::CollapseSpaces => collapse_spaces(value),
        }
    }
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Section,
        Field::Title,
        Field::ProfileApplicability,
        Field::Description,
        Field::Rationale,
        Field::Impact,
        Field::Audit,
        Field::Remediation,
        Field::Default,
        Field::References,
    ];

    /// Key used for this field in the flat JSON projection.
    pub fn key(self) -> &'static str {
        match self {
            Field::Section => "section",
            Field::Title => "title",
            Field::ProfileApplicability => "profile_applicability",
            Field::Description => "description",
            Field::Rationale => "rationale",
            Field::Impact => "impact",
            Field::Audit => "audit",
            Field::Remediation => "remediation",
            Field::Default => "default",
            Field::References => "references",
        }
    }

    /// Left label and right boundary label for the anchor-delimited fields.
    fn anchors(self) -> Option<(&'static str, &'static str)> {
        match self {
            Field::Description => Some(("Description:", "Rationale:")),
            Field::Rationale => Some(("Rationale:", "Impact:")),
            Field::Impact => Some(("Impact:", "Audit:")),
            Field::Audit => Some(("Audit:", "Remediation:")),
            Field::Remediation => Some(("Remediation:", "Default Value:")),
            Field::Default => Some(("Default Value:", "References:")),
            Field::References => Some(("References:", "CIS Controls:")),
            Field::Section | Field::Title | Field::ProfileApplicability => None,
        }
    }

    /// Cleanups applied in order before the final trim.
    fn cleanups(self) -> &'static [Cleanup] {
        use Cleanup::{CollapseSpaces, FoldNewlines, StripFooters, StripFormFeeds};
        match self {
            Field::Section | Field::ProfileApplicability => &[],
            Field::Title | Field::Description => &[FoldNewlines],
            Field::Rationale => &[FoldNewlines, CollapseSpaces],
            Field::Impact => &[FoldNewlines, StripFooters, StripFormFeeds, CollapseSpaces],
            Field::Audit | Field::Remediation | Field::References => {
                &[StripFooters, StripFormFeeds]
            }
            Field::Default => &[FoldNewlines, StripFooters, StripFormFeeds],
        }
    }
}

/// Extracts and normalizes one field from a control span.
///
/// Returns `None` when an anchor is missing, when the cleaned value is empty,
/// or when the impact field holds the "None" sentinel.
pub fn extract_field(raw: &str, field: Field) -> Option<String> {
    let located = locate(raw, field)?;
    let cleaned = field
        .cleanups()
        .iter()
        .fold(located.to_string(), |value, step| step.apply(&value));
    let value = cleaned.trim();

    if value.is_empty() {
        return None;
    }
    if field == Field::Impact && NULL_SENTINELS.contains(&value) {
        tracing::trace!("Impact holds a null sentinel ({:?})", value);
        return None;
    }
    Some(value.to_string())
}

/// Finds the raw, uncleaned text of a field.
fn locate(raw: &str, field: Field) -> Option<&str> {
    match field {
        Field::Section => SECTION_RE.find(raw).map(|m| m.as_str()),
        Field::ProfileApplicability => LEVEL_RE.find(raw).map(|m| m.as_str()),
        Field::Title => {
            let section = SECTION_RE.find(raw)?;
            slice_until(raw, section.end(), PROFILE_ANCHOR)
        }
        _ => {
            let (left, right) = field.anchors()?;
            let start = raw.find(left)? + left.len();
            slice_until(raw, start, right)
        }
    }
}

/// Slices `raw` from `start` up to the first `right` found at or after `start`.
fn slice_until<'a>(raw: &'a str, start: usize, right: &str) -> Option<&'a str> {
    let tail = raw.get(start..)?;
    let end = tail.find(right)?;
    Some(&tail[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPAN: &str = "1.1.1 Ensure mounting of cramfs filesystems is\ndisabled (Automated)\n\
Profile Applicability:\n Level 1 - Server\n\n\
Description:\nThe cramfs filesystem type is a compressed\nread-only Linux filesystem.\n\n\
Rationale:\nRemoving support for   unneeded filesystem types\nreduces the local attack surface.\n\n\
Impact:\nNone.\n\n\
Audit:\nRun the following command:\n# modprobe -n -v cramfs\n\n14 | P a g e\n\u{0C}install /bin/true\n\n\
Remediation:\nEdit or create a file in /etc/modprobe.d/\n\n\
Default Value:\nThe module\nis loaded.\n\n\
References:\n1. NIST SP 800-53 Rev. 5: CM-7\n\n\
CIS Controls:\nVersion 8\n";

    #[test]
    fn test_section_and_title() {
        assert_eq!(extract_field(SPAN, Field::Section).as_deref(), Some("1.1.1"));
        assert_eq!(
            extract_field(SPAN, Field::Title).as_deref(),
            Some("Ensure mounting of cramfs filesystems is disabled (Automated)")
        );
    }

    #[test]
    fn test_profile_applicability() {
        assert_eq!(
            extract_field(SPAN, Field::ProfileApplicability).as_deref(),
            Some("Level 1")
        );
    }

    #[test]
    fn test_paragraph_fields_are_folded() {
        assert_eq!(
            extract_field(SPAN, Field::Description).as_deref(),
            Some("The cramfs filesystem type is a compressed read-only Linux filesystem.")
        );
        assert_eq!(
            extract_field(SPAN, Field::Rationale).as_deref(),
            Some("Removing support for unneeded filesystem types reduces the local attack surface.")
        );
        assert_eq!(
            extract_field(SPAN, Field::Default).as_deref(),
            Some("The module is loaded.")
        );
    }

    #[test]
    fn test_audit_strips_page_artifacts_but_keeps_lines() {
        assert_eq!(
            extract_field(SPAN, Field::Audit).as_deref(),
            Some("Run the following command:\n# modprobe -n -v cramfs\n\n\ninstall /bin/true")
        );
    }

    #[test]
    fn test_references_bounded_by_cis_controls() {
        assert_eq!(
            extract_field(SPAN, Field::References).as_deref(),
            Some("1. NIST SP 800-53 Rev. 5: CM-7")
        );
    }

    #[test]
    fn test_impact_sentinels_map_to_none() {
        assert_eq!(extract_field(SPAN, Field::Impact), None);

        let span = "Impact:\nNone\nAudit:\n";
        assert_eq!(extract_field(span, Field::Impact), None);

        // Case-sensitive: only the exact sentinel is dropped.
        let span = "Impact:\nnone\nAudit:\n";
        assert_eq!(extract_field(span, Field::Impact).as_deref(), Some("none"));
    }

    #[test]
    fn test_impact_is_cleaned() {
        let span =
            "Impact:\nDisabling the\n7 | P a g e\n\u{0C}module   may break things.\nAudit:\n";
        assert_eq!(
            extract_field(span, Field::Impact).as_deref(),
            Some("Disabling the module may break things.")
        );
    }

    #[test]
    fn test_missing_right_anchor_is_absent() {
        let span = SPAN.replace("Default Value:", "Default:");
        assert_eq!(extract_field(&span, Field::Remediation), None);
        assert_eq!(extract_field(&span, Field::Default), None);
        // Neighbouring fields are unaffected.
        assert!(extract_field(&span, Field::Audit).is_some());
        assert!(extract_field(&span, Field::References).is_some());
    }

    #[test]
    fn test_missing_left_anchor_is_absent() {
        let span = SPAN.replace("Remediation:", "Fix:");
        assert_eq!(extract_field(&span, Field::Remediation), None);
        assert_eq!(extract_field(&span, Field::Audit), None);
        assert!(extract_field(&span, Field::Default).is_some());
    }

    #[test]
    fn test_right_anchor_must_follow_left_anchor() {
        let span = "Rationale: appears first\nDescription:\nText with no end";
        assert_eq!(extract_field(span, Field::Description), None);
    }

    #[test]
    fn test_empty_value_is_absent() {
        assert_eq!(extract_field("Audit:\n\n\u{0C}\nRemediation:", Field::Audit), None);
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<_> = Field::ALL.iter().map(|f| f.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Field::ALL.len());
    }
}
