use std::collections::HashSet;

use glam::Affine3A;
use hecs::{Entity, World};

use crate::{
    components::{
        BodyType, Collider, GlobalTransform, LocalTransform, Parent, PendingImpulses,
        PhysicsHandle, RigidBody,
    },
    contexts::{physics_context::body_affine, PhysicsContext},
    Engine, KineticTextResult,
};

/// Physics system
/// Keeps the physics simulation in step with the world, then advances it by one tick.
///
/// In order:
/// 1. Entities with a [`RigidBody`], [`Collider`] and [`GlobalTransform`] but no [`PhysicsHandle`] are added to the simulation.
/// 1. Changes to [`RigidBody::body_type`] are pushed into the simulation, and kinematic bodies are moved to their
///    [`GlobalTransform`].
/// 1. [`PendingImpulses`] are applied and removed - except on bodies that were created or changed type this tick,
///    which keep theirs until the simulation has stepped them once.
/// 1. The simulation steps.
/// 1. Dynamic bodies have their [`LocalTransform`] and [`GlobalTransform`] overwritten with where the simulation put them.
pub fn physics_system(engine: &mut Engine) -> KineticTextResult<()> {
    let world = &mut engine.world;
    let physics_context = &mut engine.physics_context;
    physics_system_inner(world, physics_context)
}

pub(crate) fn physics_system_inner(
    world: &mut World,
    physics_context: &mut PhysicsContext,
) -> KineticTextResult<()> {
    let mut settling = create_new_bodies(world, physics_context)?;
    sync_bodies(world, physics_context, &mut settling)?;
    apply_pending_impulses(world, physics_context, &settling)?;

    physics_context.update();

    write_back_dynamic_bodies(world, physics_context)
}

fn create_new_bodies(
    world: &mut World,
    physics_context: &mut PhysicsContext,
) -> KineticTextResult<HashSet<Entity>> {
    let created = world
        .query::<(&RigidBody, &Collider, &GlobalTransform, Option<&PhysicsHandle>)>()
        .iter()
        .filter(|(_, (_, _, _, handle))| handle.is_none())
        .map(|(entity, (rigid_body, collider, global_transform, _))| {
            let handle = physics_context.create_rigid_body_and_collider(
                entity,
                &global_transform.0,
                rigid_body,
                collider,
            );
            (entity, handle)
        })
        .collect::<Vec<_>>();

    let mut settling = HashSet::with_capacity(created.len());
    for (entity, handle) in created {
        world.insert_one(entity, handle)?;
        settling.insert(entity);
    }

    Ok(settling)
}

fn sync_bodies(
    world: &World,
    physics_context: &mut PhysicsContext,
    settling: &mut HashSet<Entity>,
) -> KineticTextResult<()> {
    for (entity, (rigid_body, handle, global_transform)) in world
        .query::<(&RigidBody, &PhysicsHandle, &GlobalTransform)>()
        .iter()
    {
        let changed_type = {
            let body = physics_context.get_rigid_body(*handle)?;
            let body_type = rigid_body.body_type.into();
            let changed_type = body.body_type() != body_type;
            if changed_type {
                body.set_body_type(body_type, true);
            }

            if rigid_body.body_type == BodyType::KinematicPositionBased {
                body.set_next_kinematic_position(global_transform.to_isometry());
            }
            changed_type
        };

        // A body that becomes dynamic has to join the island manager's active set, or it's never integrated.
        if changed_type {
            physics_context.island_manager.wake_up(
                &mut physics_context.rigid_bodies,
                handle.rigid_body,
                true,
            );
            settling.insert(entity);
        }
    }

    Ok(())
}

fn apply_pending_impulses(
    world: &mut World,
    physics_context: &mut PhysicsContext,
    settling: &HashSet<Entity>,
) -> KineticTextResult<()> {
    let ready = world
        .query::<(&PendingImpulses, &PhysicsHandle)>()
        .iter()
        .filter(|(entity, _)| !settling.contains(entity))
        .map(|(entity, (_, handle))| (entity, *handle))
        .collect::<Vec<_>>();

    for (entity, handle) in ready {
        let PendingImpulses(impulses) = world.remove_one::<PendingImpulses>(entity)?;
        for impulse in &impulses {
            physics_context.apply_impulse(handle, impulse)?;
        }
    }

    Ok(())
}

fn write_back_dynamic_bodies(
    world: &mut World,
    physics_context: &mut PhysicsContext,
) -> KineticTextResult<()> {
    let dynamic = world
        .query::<(&RigidBody, &PhysicsHandle, Option<&Parent>)>()
        .iter()
        .filter(|(_, (rigid_body, _, _))| rigid_body.body_type == BodyType::Dynamic)
        .map(|(entity, (_, handle, parent))| (entity, *handle, parent.copied()))
        .collect::<Vec<_>>();

    for (entity, handle, parent) in dynamic {
        let body_transform = body_affine(physics_context.get_rigid_body(handle)?);
        let parent_transform = parent
            .and_then(|Parent(p)| world.get::<&GlobalTransform>(p).ok().map(|g| g.0))
            .unwrap_or(Affine3A::IDENTITY);

        let (_, rotation, translation) =
            (parent_transform.inverse() * body_transform).to_scale_rotation_translation();

        let mut local_transform = world.get::<&mut LocalTransform>(entity)?;
        local_transform.rotation = rotation;
        local_transform.translation = translation;

        let mut global_transform = world.get::<&mut GlobalTransform>(entity)?;
        global_transform.0 = parent_transform * local_transform.to_affine();
    }

    Ok(())
}
