// src/extractors/section_map.rs
use std::collections::HashMap;

/// Insertion-ordered map keyed by section identifier.
///
/// Inserting an existing key replaces the value in place, so a key keeps the
/// position of its first appearance while holding its latest value.
#[derive(Debug, Clone)]
pub struct SectionMap<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> Default for SectionMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> SectionMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under `section`, returning the value it replaced.
    pub fn insert(&mut self, section: impl Into<String>, value: V) -> Option<V> {
        let section = section.into();
        match self.index.get(&section) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.index.insert(section.clone(), self.entries.len());
                self.entries.push((section, value));
                None
            }
        }
    }

    pub fn get(&self, section: &str) -> Option<&V> {
        self.index.get(section).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains_key(&self, section: &str) -> bool {
        self.index.contains_key(section)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for SectionMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}
