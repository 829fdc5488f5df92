use hecs::World;

use crate::{
    components::{GlobalTransform, LocalTransform, Parent},
    Engine,
};

/// Update global transform system
/// Walks through each entity's LocalTransform and every LocalTransform above it to work out where it is in the world.
pub fn update_global_transform_system(engine: &mut Engine) {
    update_global_transform_system_inner(&mut engine.world);
}

pub(crate) fn update_global_transform_system_inner(world: &mut World) {
    let global_transforms = world
        .query::<(&LocalTransform, &GlobalTransform)>()
        .iter()
        .map(|(entity, (local_transform, _))| {
            let mut affine = local_transform.to_affine();
            let mut parent = world.get::<&Parent>(entity).ok().map(|p| p.0);
            while let Some(p) = parent {
                if let Ok(parent_transform) = world.get::<&LocalTransform>(p) {
                    affine = parent_transform.to_affine() * affine;
                }
                parent = world.get::<&Parent>(p).ok().map(|p| p.0);
            }
            (entity, affine)
        })
        .collect::<Vec<_>>();

    for (entity, affine) in global_transforms {
        if let Ok(mut global_transform) = world.get::<&mut GlobalTransform>(entity) {
            global_transform.0 = affine;
        }
    }
}
