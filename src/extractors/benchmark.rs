// src/extractors/benchmark.rs
use super::control::Control;
use super::section_map::SectionMap;
use super::segment::spans_by_section;

/// All controls of one benchmark, keyed by section identifier in document order.
#[derive(Debug, Clone, Default)]
pub struct Benchmark {
    controls: SectionMap<Control>,
}

impl Benchmark {
    /// Segments the converted text and parses every control span.
    ///
    /// A section that occurs more than once is represented by its last
    /// occurrence. Text without any control boundary gives an empty benchmark.
    pub fn from_text(text: &str) -> Self {
        let controls: SectionMap<Control> = spans_by_section(text)
            .iter()
            .map(|(section, raw)| (section, Control::from_raw(raw)))
            .collect();
        tracing::info!("Parsed {} controls", controls.len());
        Self { controls }
    }

    /// Looks up a single control. Unknown identifiers simply return `None`.
    pub fn control(&self, section: &str) -> Option<&Control> {
        self.controls.get(section)
    }

    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.controls.keys()
    }

    pub fn controls(&self) -> impl Iterator<Item = &Control> {
        self.controls.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Control)> {
        self.controls.iter()
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}
