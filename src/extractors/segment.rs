// src/extractors/segment.rs
//! Splits a converted benchmark into one raw span per control occurrence.
//!
//! A control starts at a line beginning with a dotted identifier of depth
//! three or more ("1.1.2 Ensure ..."). Scanning begins after the first
//! top-level section header ("1 Initial Setup") so the title pages and the
//! table of contents are skipped; table-of-contents lines that still slip
//! through are recognized by their dot leaders. A line may begin with form
//! feeds, since pdftotext puts the first line of each page right after one.

use super::section_map::SectionMap;
use once_cell::sync::Lazy;
use regex::Regex;

// --- Regex Patterns (Lazy Static) ---
static SCAN_START_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\x0C*\d[ \t]+\w[\w ]*$").expect("Failed to compile SCAN_START_RE")
});

static BOUNDARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\x0C*(?P<section>\d+\.\d+\.\d+(?:\.\d+)*) [^\n]*")
        .expect("Failed to compile BOUNDARY_RE")
});

const DOT_LEADER: &str = "..";

/// Start of one control occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary<'a> {
    pub section: &'a str,
    /// Byte offset of the section identifier, past any leading form feeds.
    pub start: usize,
}

/// One control occurrence and the text that belongs to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub section: &'a str,
    pub start: usize,
    pub raw: &'a str,
}

/// Offset just past the first top-level section header, or 0 if there is none.
pub fn scan_start(text: &str) -> usize {
    match SCAN_START_RE.find(text) {
        Some(m) => {
            tracing::debug!("Scan starts after header {:?} at offset {}", m.as_str(), m.end());
            m.end()
        }
        None => {
            tracing::debug!("No top-level section header found, scanning from the start");
            0
        }
    }
}

/// Finds every control boundary after the scan start, in document order.
pub fn find_boundaries(text: &str) -> Vec<Boundary<'_>> {
    let mut boundaries = Vec::new();
    let mut cursor = scan_start(text);

    while let Some(caps) = BOUNDARY_RE.captures_at(text, cursor) {
        let (Some(m), Some(section)) = (caps.get(0), caps.name("section")) else {
            break;
        };
        // The cursor must move forward or the scan would never end.
        if m.end() <= cursor {
            tracing::warn!("Boundary scan stalled at offset {}", cursor);
            break;
        }
        cursor = m.end();

        let line = m.as_str();
        if line.contains(DOT_LEADER) {
            tracing::trace!("Skipping dot-leader line at {}: {:?}", m.start(), line);
            continue;
        }
        boundaries.push(Boundary {
            section: section.as_str(),
            start: section.start(),
        });
    }

    tracing::debug!("Found {} control boundaries", boundaries.len());
    boundaries
}

/// Slices the text into one segment per boundary. Each segment runs to the
/// start of the next boundary; the last one runs to the end of the text.
pub fn segment(text: &str) -> Vec<Segment<'_>> {
    let boundaries = find_boundaries(text);
    boundaries
        .iter()
        .enumerate()
        .map(|(i, boundary)| {
            let end = boundaries.get(i + 1).map_or(text.len(), |next| next.start);
            Segment {
                section: boundary.section,
                start: boundary.start,
                raw: &text[boundary.start..end],
            }
        })
        .collect()
}

/// Raw spans keyed by section. A repeated section keeps its first position
/// but takes the span of its last occurrence.
pub fn spans_by_section(text: &str) -> SectionMap<&str> {
    let mut spans = SectionMap::new();
    for seg in segment(text) {
        if spans.insert(seg.section, seg.raw).is_some() {
            tracing::debug!(
                "Section {} repeated at offset {}, keeping the later one",
                seg.section,
                seg.start
            );
        }
    }
    spans
}
