//! Glyph store seam and a small in-memory project.
//!
//! The engine only talks to `GlyphStore`; font editors plug their own project
//! type in behind it. `Project` is the in-memory store used by the CLI,
//! the tools and the tests.

use crate::syllable::{Syllable, SYLLABLE_BASE, SYLLABLE_LAST};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A glyph record: a display name plus an ordered list of component ids.
///
/// Components are ids into the same store, not owned glyphs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyph {
    pub name: String,
    components: Vec<u32>,
}

impl Glyph {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            components: Vec::new(),
        }
    }

    pub fn set_name<N: Into<String>>(&mut self, name: N) {
        self.name = name.into();
    }

    /// Append a component reference.
    pub fn add_component(&mut self, id: u32) {
        self.components.push(id);
    }

    pub fn components(&self) -> &[u32] {
        &self.components
    }

    pub fn clear_components(&mut self) {
        self.components.clear();
    }
}

/// Id-addressed glyph storage owned outside the engine.
///
/// Ids double as placeholder ids and Unicode codepoints.
pub trait GlyphStore {
    /// Copy of the glyph at `id`, or `None` if absent.
    fn get_glyph(&self, id: u32) -> Option<Glyph>;

    /// Insert or overwrite the glyph at `id`.
    fn set_glyph(&mut self, id: u32, glyph: Glyph);

    fn contains_glyph(&self, id: u32) -> bool {
        self.get_glyph(id).is_some()
    }
}

/// In-memory glyph store.
#[derive(Debug, Clone, Default)]
pub struct Project {
    glyphs: AHashMap<u32, Glyph>,
}

impl Project {
    pub fn new() -> Self {
        Self {
            glyphs: AHashMap::new(),
        }
    }

    /// A project holding one empty glyph per Hangul syllable, named `uniXXXX`.
    pub fn with_hangul_syllables() -> Self {
        let mut project = Self::new();
        for codepoint in SYLLABLE_BASE..=SYLLABLE_LAST {
            project.set_glyph(codepoint, Glyph::new(format!("uni{:04X}", codepoint)));
        }
        project
    }

    pub fn glyph(&self, id: u32) -> Option<&Glyph> {
        self.glyphs.get(&id)
    }

    /// Composite glyph of a syllable.
    pub fn syllable_glyph(&self, syllable: Syllable) -> Option<&Glyph> {
        self.glyph(syllable.codepoint())
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Pretty JSON snapshot of the store, ordered by id.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let ordered: BTreeMap<u32, &Glyph> = self.glyphs.iter().map(|(k, v)| (*k, v)).collect();
        serde_json::to_string_pretty(&ordered)
    }
}

impl GlyphStore for Project {
    fn get_glyph(&self, id: u32) -> Option<Glyph> {
        self.glyphs.get(&id).cloned()
    }

    fn set_glyph(&mut self, id: u32, glyph: Glyph) {
        self.glyphs.insert(id, glyph);
    }

    fn contains_glyph(&self, id: u32) -> bool {
        self.glyphs.contains_key(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syllable::SYLLABLE_COUNT;

    #[test]
    fn glyph_components_keep_order() {
        let mut g = Glyph::new("x");
        g.add_component(7);
        g.add_component(3);
        assert_eq!(g.components(), &[7, 3]);
        g.clear_components();
        assert!(g.components().is_empty());
        g.set_name("y");
        assert_eq!(g.name, "y");
    }

    #[test]
    fn seeded_project_covers_block() {
        let project = Project::with_hangul_syllables();
        assert_eq!(project.len(), SYLLABLE_COUNT);
        assert_eq!(project.glyph(0xAC00).map(|g| g.name.as_str()), Some("uniAC00"));
        assert!(project.contains_glyph(0xD7A3));
        assert!(!project.contains_glyph(0xD7A4));
    }

    #[test]
    fn set_overwrites() {
        let mut project = Project::new();
        project.set_glyph(1, Glyph::new("a"));
        project.set_glyph(1, Glyph::new("b"));
        assert_eq!(project.len(), 1);
        assert_eq!(project.get_glyph(1).unwrap().name, "b");
    }

    #[test]
    fn json_snapshot_is_ordered() {
        let mut project = Project::new();
        project.set_glyph(20, Glyph::new("late"));
        project.set_glyph(10, Glyph::new("early"));
        let json = project.to_json().unwrap();
        let early = json.find("early").unwrap();
        let late = json.find("late").unwrap();
        assert!(early < late);
    }
}
