// src/extractors/control.rs
use super::field::{extract_field, Field};
use serde::Serialize;

/// One benchmark control, parsed once from its raw span.
///
/// All fields are computed at construction and never change afterwards; the
/// span it was built from is kept for provenance and is not serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Control {
    section: Option<String>,
    title: Option<String>,
    description: Option<String>,
    default: Option<String>,
    rationale: Option<String>,
    impact: Option<String>,
    audit: Option<String>,
    remediation: Option<String>,
    profile_applicability: Option<String>,
    references: Option<String>,
    #[serde(skip)]
    raw: String,
}

impl Control {
    /// Builds a control from one raw span. Never fails: a span that matches
    /// nothing yields a control whose fields are all absent.
    pub fn from_raw(raw: &str) -> Self {
        let get = |field| extract_field(raw, field);
        let control = Self {
            section: get(Field::Section),
            title: get(Field::Title),
            description: get(Field::Description),
            default: get(Field::Default),
            rationale: get(Field::Rationale),
            impact: get(Field::Impact),
            audit: get(Field::Audit),
            remediation: get(Field::Remediation),
            profile_applicability: get(Field::ProfileApplicability),
            references: get(Field::References),
            raw: raw.to_string(),
        };

        if control.is_degenerate() {
            tracing::warn!(
                "Unparseable control span ({} bytes): {:?}",
                raw.len(),
                raw.lines().next().unwrap_or_default()
            );
        }
        control
    }

    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn profile_applicability(&self) -> Option<&str> {
        self.profile_applicability.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn rationale(&self) -> Option<&str> {
        self.rationale.as_deref()
    }

    /// `None` both when the label is missing and when the benchmark says "None".
    pub fn impact(&self) -> Option<&str> {
        self.impact.as_deref()
    }

    pub fn audit(&self) -> Option<&str> {
        self.audit.as_deref()
    }

    pub fn remediation(&self) -> Option<&str> {
        self.remediation.as_deref()
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn references(&self) -> Option<&str> {
        self.references.as_deref()
    }

    /// The unmodified span this control was parsed from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Looks a field up by name.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Section => self.section(),
            Field::Title => self.title(),
            Field::ProfileApplicability => self.profile_applicability(),
            Field::Description => self.description(),
            Field::Rationale => self.rationale(),
            Field::Impact => self.impact(),
            Field::Audit => self.audit(),
            Field::Remediation => self.remediation(),
            Field::Default => self.default_value(),
            Field::References => self.references(),
        }
    }

    /// Flat `(key, value)` projection in field order.
    pub fn to_flat(&self) -> Vec<(&'static str, Option<&str>)> {
        Field::ALL
            .iter()
            .map(|&field| (field.key(), self.get(field)))
            .collect()
    }

    fn is_degenerate(&self) -> bool {
        Field::ALL.iter().all(|&field| self.get(field).is_none())
    }
}
