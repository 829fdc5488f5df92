use glam::Vec3;
use hecs::World;
use log::trace;
use rand::Rng;

use crate::{
    components::{BodyType, Explosion, Impulse, KineticCharacter, PendingImpulses, RigidBody},
    settings::KineticTextSettings,
    KineticTextResult,
};

/// Hand every character over to the physics simulation, with a random spin and an explosion centred on
/// `explosion_origin`.
///
/// The impulses are queued as [`PendingImpulses`] and applied by [`crate::systems::physics_system`]. Calling this
/// again on characters that are already falling queues more impulses on top.
pub fn trigger_fall<R: Rng + ?Sized>(
    world: &mut World,
    characters: &[KineticCharacter],
    settings: &KineticTextSettings,
    explosion_origin: Vec3,
    rng: &mut R,
) -> KineticTextResult<()> {
    let torque_range = settings.torque_range();
    let explosion = Explosion {
        origin: explosion_origin,
        ..settings.explosion
    };

    // Either every character falls or none do.
    for character in characters {
        world.get::<&RigidBody>(character.entity)?;
    }

    for character in characters {
        world.get::<&mut RigidBody>(character.entity)?.body_type = BodyType::Dynamic;

        let torque = random_torque(rng, torque_range);
        trace!("Releasing {:?} with torque {torque}", character.character);

        let has_pending = world.get::<&PendingImpulses>(character.entity).is_ok();
        if !has_pending {
            world.insert_one(character.entity, PendingImpulses::default())?;
        }

        let mut pending = world.get::<&mut PendingImpulses>(character.entity)?;
        pending.push(Impulse::Torque {
            value: torque,
            mode: settings.torque_mode,
        });
        pending.push(Impulse::Explosion(explosion));
    }

    Ok(())
}

/// Each axis drawn uniformly from `[-range, range]`
pub(crate) fn random_torque<R: Rng + ?Sized>(rng: &mut R, range: f32) -> Vec3 {
    Vec3::new(
        rng.gen_range(-range..=range),
        rng.gen_range(-range..=range),
        rng.gen_range(-range..=range),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        components::{ForceMode, LocalTransform},
        systems::materialize,
        text_layout::{spawn_glyph_nodes, TextLayout},
    };
    use rand::{rngs::StdRng, SeedableRng};

    fn materialized(text: &str) -> (World, Vec<KineticCharacter>) {
        let mut world = World::new();
        let layout = TextLayout::monospace(text, &Default::default());
        let text = world.spawn((LocalTransform::default(),));
        spawn_glyph_nodes(&mut world, text, &layout).unwrap();
        let characters = materialize(&mut world, text, &layout, 0.05).unwrap();
        (world, characters)
    }

    fn torques_and_explosions(world: &World, character: &KineticCharacter) -> (Vec<Vec3>, Vec<Explosion>) {
        let pending = world.get::<&PendingImpulses>(character.entity).unwrap();
        let mut torques = vec![];
        let mut explosions = vec![];
        for impulse in &pending.0 {
            match impulse {
                Impulse::Torque { value, .. } => torques.push(*value),
                Impulse::Explosion(explosion) => explosions.push(*explosion),
                Impulse::Linear { .. } => panic!("Unexpected linear impulse"),
            }
        }
        (torques, explosions)
    }

    #[test]
    pub fn test_trigger_fall() {
        let (mut world, characters) = materialized("Hi");
        let settings = KineticTextSettings::default()
            .fall_torque(10.0)
            .explosion_force(20.0);
        let origin = Vec3::new(0.5, -1.0, 0.0);
        let mut rng = StdRng::seed_from_u64(7);

        trigger_fall(&mut world, &characters, &settings, origin, &mut rng).unwrap();

        for character in &characters {
            let rigid_body = world.get::<&RigidBody>(character.entity).unwrap();
            assert_eq!(rigid_body.body_type, BodyType::Dynamic);

            let (torques, explosions) = torques_and_explosions(&world, character);
            assert_eq!(torques.len(), 1);
            assert!(torques[0].abs().max_element() <= 10.0);

            assert_eq!(explosions.len(), 1);
            assert_eq!(explosions[0].force, 20.0);
            assert_eq!(explosions[0].origin, origin);
            assert_eq!(explosions[0].radius, settings.explosion.radius);
            assert_eq!(explosions[0].mode, ForceMode::VelocityChange);
        }
    }

    #[test]
    pub fn test_trigger_twice_stacks() {
        let (mut world, characters) = materialized("Hi");
        let settings = KineticTextSettings::default();
        let mut rng = StdRng::seed_from_u64(1);

        trigger_fall(&mut world, &characters, &settings, Vec3::ZERO, &mut rng).unwrap();
        trigger_fall(&mut world, &characters, &settings, Vec3::ZERO, &mut rng).unwrap();

        let (torques, explosions) = torques_and_explosions(&world, &characters[0]);
        assert_eq!(torques.len(), 2);
        assert_eq!(explosions.len(), 2);
        let rigid_body = world.get::<&RigidBody>(characters[0].entity).unwrap();
        assert_eq!(rigid_body.body_type, BodyType::Dynamic);
    }

    #[test]
    pub fn test_random_torque_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(1234);
        for range in [0.0, 0.5, 10.0, 250.0] {
            for _ in 0..200 {
                let torque = random_torque(&mut rng, range);
                assert!(torque.abs().max_element() <= range, "{torque} out of {range}");
            }
        }
    }

    #[test]
    pub fn test_negative_torque_range_uses_magnitude() {
        let (mut world, characters) = materialized("x");
        let settings = KineticTextSettings::default().fall_torque(-2.0);
        let mut rng = StdRng::seed_from_u64(3);

        trigger_fall(&mut world, &characters, &settings, Vec3::ZERO, &mut rng).unwrap();

        let (torques, _) = torques_and_explosions(&world, &characters[0]);
        assert!(torques[0].abs().max_element() <= 2.0);
    }
}
