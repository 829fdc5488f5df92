use hecs::Entity;

/// The ordered children of an entity.
///
/// For a text entity this is one node per visible glyph, in layout order - child `i` belongs to the
/// `i`th non-whitespace character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Children(pub Vec<Entity>);

impl Children {
    /// The child at `index`, if there is one
    pub fn get(&self, index: usize) -> Option<Entity> {
        self.0.get(index).copied()
    }

}
