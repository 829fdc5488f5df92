use hecs::{ComponentError, Entity, NoSuchEntity};
use thiserror::Error;

/// Everything that can go wrong while materialising or releasing text.
///
/// A layout that simply hasn't arrived yet is *not* an error - the text stays unprepared until it does.
#[derive(Error, Debug)]
pub enum KineticTextError {
    /// The text has fewer child nodes than it has visible glyphs
    #[error("Text {text:?} has no child node for visible glyph {glyph_index} (needed child #{child_index})")]
    MissingGlyphNode {
        /// The text entity being materialised
        text: Entity,
        /// Slot index of the glyph in the layout
        glyph_index: usize,
        /// Index into the text's children that was missing
        child_index: usize,
    },
    /// A glyph node exists but carries no mesh
    #[error("Glyph node {0:?} has no GlyphMesh to recentre")]
    MissingGlyphMesh(Entity),
    /// The text has visible glyphs but no children at all
    #[error("Text {0:?} has visible glyphs but no Children component")]
    MissingChildren(Entity),
    /// A component lookup failed
    #[error(transparent)]
    Component(#[from] ComponentError),
    /// An entity has been despawned from under us
    #[error(transparent)]
    NoSuchEntity(#[from] NoSuchEntity),
    /// Something else
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
