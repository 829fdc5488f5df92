use glam::Vec3;
use hecs::{Entity, World};

use crate::{
    components::{Children, GlobalTransform, GlyphMesh, LocalTransform, Parent},
    KineticTextResult,
};

/// The character that marks the end of a layout
pub const TERMINATOR: char = '\0';

/// One laid out character slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterInfo {
    /// The character in this slot
    pub character: char,
    /// Bottom left corner of the glyph's bounding box, in the text's local space
    pub bottom_left: Vec3,
    /// Top right corner of the glyph's bounding box, in the text's local space
    pub top_right: Vec3,
}

impl CharacterInfo {
    /// Midpoint of the bounding box
    pub fn centre(&self) -> Vec3 {
        (self.bottom_left + self.top_right) / 2.0
    }

    /// Extent of the bounding box on each axis
    pub fn size(&self) -> Vec3 {
        self.top_right - self.bottom_left
    }

    /// Does this slot end the layout?
    pub fn is_terminator(&self) -> bool {
        self.character == TERMINATOR
    }
}

/// The result of laying out a piece of text: one slot per character, in reading order.
///
/// Slots after the first [`TERMINATOR`] are ignored; layout engines often hand out oversized buffers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextLayout {
    /// Character slots
    pub characters: Vec<CharacterInfo>,
}

impl TextLayout {
    /// Iterate over the glyphs that will actually be drawn, along with their slot index.
    /// Stops at the first terminator and skips whitespace.
    pub fn visible_glyphs(&self) -> impl Iterator<Item = (usize, &CharacterInfo)> + '_ {
        self.characters
            .iter()
            .enumerate()
            .take_while(|(_, c)| !c.is_terminator())
            .filter(|(_, c)| !c.character.is_whitespace())
    }

    /// How many glyphs will actually be drawn
    pub fn visible_count(&self) -> usize {
        self.visible_glyphs().count()
    }

    /// Lay out `text` on a fixed grid. The first line's baseline sits at `y = 0`, and each `'\n'` starts a new
    /// line below the last. Whitespace still gets a slot, just like in a real layout engine.
    pub fn monospace(text: &str, metrics: &MonospaceMetrics) -> Self {
        let mut characters = Vec::with_capacity(text.len());
        let mut cursor_x = 0.0;
        let mut baseline = 0.0;

        for character in text.chars() {
            let bottom_left = Vec3::new(cursor_x, baseline, 0.0);
            let top_right = bottom_left + Vec3::new(metrics.glyph_width, metrics.glyph_height, 0.0);
            characters.push(CharacterInfo {
                character,
                bottom_left,
                top_right,
            });

            if character == '\n' {
                cursor_x = 0.0;
                baseline -= metrics.line_height;
            } else {
                cursor_x += metrics.advance;
            }
        }

        Self { characters }
    }
}

/// Sizes used by [`TextLayout::monospace`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    /// Horizontal distance between the left edges of consecutive glyphs
    pub advance: f32,
    /// Vertical distance between consecutive baselines
    pub line_height: f32,
    /// Width of a glyph's bounding box
    pub glyph_width: f32,
    /// Height of a glyph's bounding box
    pub glyph_height: f32,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self {
            advance: 0.6,
            line_height: 1.2,
            glyph_width: 0.5,
            glyph_height: 0.7,
        }
    }
}

/// Give `text` one child node per visible glyph of `layout`, each with a quad [`GlyphMesh`] covering the glyph.
///
/// This is the work a host renderer does when it splits a string into per-glyph sub-meshes: the nodes all sit at
/// the text's origin and the quads are positioned in text space.
pub fn spawn_glyph_nodes(
    world: &mut World,
    text: Entity,
    layout: &TextLayout,
) -> KineticTextResult<Vec<Entity>> {
    let nodes = layout
        .visible_glyphs()
        .map(|(_, info)| {
            let local_transform = LocalTransform::default();
            world.spawn((
                GlyphMesh::quad(info.bottom_left, info.top_right),
                local_transform,
                GlobalTransform::from(local_transform),
                Parent(text),
            ))
        })
        .collect::<Vec<_>>();

    world.insert_one(text, Children(nodes.clone()))?;
    Ok(nodes)
}
