//! Looking up glyphs by name, for resolving components

use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

use indexmap::IndexMap;

use crate::{PenError, PointPen, SegmentPen};

/// Something that can be drawn with either drawing protocol.
pub trait DrawGlyph {
    /// Draw this glyph with segments.
    fn draw(&self, pen: &mut dyn SegmentPen) -> Result<(), PenError>;

    /// Draw this glyph with points.
    fn draw_points(&self, pen: &mut dyn PointPen) -> Result<(), PenError>;
}

/// A collection of named glyphs.
///
/// The pens use this to check that components reference a known glyph, and
/// to draw the referenced glyph when a component has to be decomposed.
pub trait GlyphSet {
    type Glyph: DrawGlyph;

    /// The glyph named `name`, if there is one.
    fn get(&self, name: &str) -> Option<&Self::Glyph>;

    /// `true` if there is a glyph named `name`.
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

impl<T: DrawGlyph, S: BuildHasher> GlyphSet for HashMap<String, T, S> {
    type Glyph = T;

    fn get(&self, name: &str) -> Option<&T> {
        HashMap::get(self, name)
    }
}

impl<T: DrawGlyph> GlyphSet for BTreeMap<String, T> {
    type Glyph = T;

    fn get(&self, name: &str) -> Option<&T> {
        BTreeMap::get(self, name)
    }
}

impl<T: DrawGlyph, S: BuildHasher> GlyphSet for IndexMap<String, T, S> {
    type Glyph = T;

    fn get(&self, name: &str) -> Option<&T> {
        IndexMap::get(self, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Glyph, SimpleGlyph};

    fn contains_a(glyph_set: &impl GlyphSet) -> bool {
        glyph_set.contains("a")
    }

    #[test]
    fn map_lookups() {
        let glyph = Glyph::Simple(SimpleGlyph::default());

        let mut hash_map = HashMap::new();
        hash_map.insert("a".to_string(), glyph.clone());
        assert!(contains_a(&hash_map));
        assert!(!GlyphSet::contains(&hash_map, "b"));

        let mut btree_map = BTreeMap::new();
        btree_map.insert("a".to_string(), glyph.clone());
        assert!(contains_a(&btree_map));

        let mut index_map = IndexMap::new();
        index_map.insert("a".to_string(), glyph);
        assert!(contains_a(&index_map));
        assert_eq!(GlyphSet::get(&index_map, "a").map(Glyph::is_empty), Some(true));
    }
}
