use glam::Vec3;
use hecs::{ComponentError, Entity, World};
use log::debug;

use crate::{
    components::{
        Children, Collider, GlobalTransform, GlyphMesh, KineticCharacter, LocalTransform, RigidBody,
    },
    text_layout::{CharacterInfo, TextLayout},
    KineticTextError, KineticTextResult,
};

/// Give every visible glyph of `layout` its own kinematic rigid body.
///
/// Child `i` of `text` is paired with the `i`th visible glyph. Each child is moved onto the centre of its glyph's
/// bounding box, its [`GlyphMesh`] is shifted back by the same amount (so nothing visibly moves), and it gets a box
/// [`Collider`] the size of the glyph (`mesh_depth` deep) and a kinematic [`RigidBody`].
///
/// Everything is checked before anything is touched: if a glyph has no child, or a child has no mesh, the world is
/// left as it was and the error is returned. An empty result means there was nothing visible to materialise.
pub fn materialize(
    world: &mut World,
    text: Entity,
    layout: &TextLayout,
    mesh_depth: f32,
) -> KineticTextResult<Vec<KineticCharacter>> {
    let glyphs = pair_glyphs_with_nodes(world, text, layout)?;

    let mut characters = Vec::with_capacity(glyphs.len());
    for (node, glyph_index, info) in glyphs {
        let centre = info.centre();
        let size = info.size().abs();

        world.get::<&mut GlyphMesh>(node)?.recentre(centre);

        let local_transform = match world.get::<&LocalTransform>(node) {
            Ok(local_transform) => LocalTransform {
                translation: centre,
                ..*local_transform
            },
            Err(_) => LocalTransform::from_translation(centre),
        };
        let collider = Collider::cuboid(Vec3::new(size.x / 2., size.y / 2., mesh_depth / 2.));
        world.insert(
            node,
            (
                local_transform,
                collider,
                RigidBody::kinematic_position_based(),
            ),
        )?;

        let has_global_transform = world.get::<&GlobalTransform>(node).is_ok();
        if !has_global_transform {
            world.insert_one(node, GlobalTransform::default())?;
        }

        characters.push(KineticCharacter {
            entity: node,
            glyph_index,
            character: info.character,
        });
    }

    debug!(
        "Materialised {} glyphs of {} slots for {:?}",
        characters.len(),
        layout.characters.len(),
        text
    );

    Ok(characters)
}

fn pair_glyphs_with_nodes(
    world: &World,
    text: Entity,
    layout: &TextLayout,
) -> KineticTextResult<Vec<(Entity, usize, CharacterInfo)>> {
    if layout.visible_count() == 0 {
        return Ok(Vec::new());
    }

    let children = match world.get::<&Children>(text) {
        Ok(children) => (*children).clone(),
        Err(ComponentError::MissingComponent(_)) => {
            return Err(KineticTextError::MissingChildren(text))
        }
        Err(e) => return Err(e.into()),
    };

    layout
        .visible_glyphs()
        .enumerate()
        .map(|(child_index, (glyph_index, info))| {
            let node = children
                .get(child_index)
                .ok_or(KineticTextError::MissingGlyphNode {
                    text,
                    glyph_index,
                    child_index,
                })?;
            if world.get::<&GlyphMesh>(node).is_err() {
                return Err(KineticTextError::MissingGlyphMesh(node));
            }
            Ok((node, glyph_index, *info))
        })
        .collect()
}
