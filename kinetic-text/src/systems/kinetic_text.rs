use hecs::{Entity, World};
use log::{debug, error, info, warn};
use rand::Rng;

use crate::{
    components::{GlobalTransform, KineticText, KineticTextState},
    contexts::{LayoutCompleted, TextLayoutContext},
    systems::{materialize, trigger_fall},
    text_layout::TextLayout,
    Engine, KineticTextResult,
};

/// Kinetic text system
/// Materialises texts whose layout has just completed, then releases any prepared text that has been asked to fall.
pub fn kinetic_text_system(engine: &mut Engine) -> KineticTextResult<()> {
    let world = &mut engine.world;
    let text_layout_context = &engine.text_layout_context;
    let rng = &mut engine.rng;
    kinetic_text_system_inner(world, text_layout_context, rng)
}

pub(crate) fn kinetic_text_system_inner<R: Rng + ?Sized>(
    world: &mut World,
    text_layout_context: &TextLayoutContext,
    rng: &mut R,
) -> KineticTextResult<()> {
    // One broken text mustn't hold the others up, so carry on and report the first failure at the end.
    let mut first_error = None;

    for LayoutCompleted { text, layout } in text_layout_context.completed() {
        if let Err(e) = prepare(world, text, &layout) {
            error!("Unable to prepare {text:?}: {e}");
            first_error.get_or_insert(e);
        }
    }

    let falling = world
        .query::<&KineticText>()
        .iter()
        .filter(|(_, kinetic_text)| kinetic_text.begin_falling && kinetic_text.is_prepared())
        .map(|(entity, kinetic_text)| {
            (
                entity,
                kinetic_text.characters.clone(),
                kinetic_text.settings.clone(),
                kinetic_text.explosion_anchor,
            )
        })
        .collect::<Vec<_>>();

    for (text, characters, settings, explosion_anchor) in falling {
        world.get::<&mut KineticText>(text)?.begin_falling = false;

        let explosion_origin = explosion_anchor
            .and_then(|anchor| world.get::<&GlobalTransform>(anchor).ok().map(|g| g.translation()))
            .unwrap_or(settings.explosion.origin);

        info!("{text:?} is falling! Explosion at {explosion_origin}");
        match trigger_fall(world, &characters, &settings, explosion_origin, rng) {
            Ok(()) => world.get::<&mut KineticText>(text)?.state = KineticTextState::Fallen,
            Err(e) => {
                error!("Unable to release {text:?}: {e}");
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn prepare(world: &mut World, text: Entity, layout: &TextLayout) -> KineticTextResult<()> {
    let (state, mesh_depth) = match world.get::<&KineticText>(text) {
        Ok(kinetic_text) => (kinetic_text.state, kinetic_text.settings.mesh_depth),
        Err(_) => {
            debug!("Ignoring layout for {text:?}, which isn't a kinetic text");
            return Ok(());
        }
    };

    if state != KineticTextState::Unprepared {
        warn!("{text:?} was laid out again after being prepared; keeping the original glyphs");
        return Ok(());
    }

    let characters = materialize(world, text, layout, mesh_depth)?;
    if characters.is_empty() {
        debug!("{text:?} has nothing visible yet");
        return Ok(());
    }

    info!("{text:?} prepared with {} glyphs", characters.len());
    let mut kinetic_text = world.get::<&mut KineticText>(text)?;
    kinetic_text.characters = characters;
    kinetic_text.state = KineticTextState::Static;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        components::{BodyType, Impulse, LocalTransform, PendingImpulses, RigidBody},
        settings::KineticTextSettings,
        text_layout::spawn_glyph_nodes,
        KineticTextError,
    };
    use glam::Vec3;
    use rand::{rngs::StdRng, SeedableRng};

    struct Fixture {
        world: World,
        context: TextLayoutContext,
        rng: StdRng,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                world: World::new(),
                context: TextLayoutContext::default(),
                rng: StdRng::seed_from_u64(0),
            }
        }

        fn spawn_text(&mut self, text: &str) -> (Entity, TextLayout) {
            let layout = TextLayout::monospace(text, &Default::default());
            let entity = self
                .world
                .spawn((KineticText::default(), LocalTransform::default()));
            spawn_glyph_nodes(&mut self.world, entity, &layout).unwrap();
            (entity, layout)
        }

        fn tick(&mut self) -> KineticTextResult<()> {
            kinetic_text_system_inner(&mut self.world, &self.context, &mut self.rng)
        }

        fn state(&self, text: Entity) -> KineticTextState {
            self.world.get::<&KineticText>(text).unwrap().state()
        }
    }

    #[test]
    pub fn test_waits_for_layout() {
        let mut fixture = Fixture::new();
        let (text, layout) = fixture.spawn_text("Hi");

        fixture.tick().unwrap();
        fixture.tick().unwrap();
        assert_eq!(fixture.state(text), KineticTextState::Unprepared);
        assert_eq!(fixture.world.query::<&RigidBody>().iter().count(), 0);

        fixture.context.notifier().notify(text, layout);
        fixture.tick().unwrap();
        assert_eq!(fixture.state(text), KineticTextState::Static);

        let kinetic_text = fixture.world.get::<&KineticText>(text).unwrap();
        assert_eq!(kinetic_text.characters().len(), 2);
        assert!(kinetic_text.is_prepared());
    }

    #[test]
    pub fn test_fall_request_waits_until_prepared() {
        let mut fixture = Fixture::new();
        let (text, layout) = fixture.spawn_text("Hi");
        fixture.world.get::<&mut KineticText>(text).unwrap().begin_falling = true;

        fixture.tick().unwrap();
        assert!(fixture.world.get::<&KineticText>(text).unwrap().begin_falling);

        fixture.context.notifier().notify(text, layout);
        fixture.tick().unwrap();

        let kinetic_text = fixture.world.get::<&KineticText>(text).unwrap();
        assert!(!kinetic_text.begin_falling);
        assert_eq!(kinetic_text.state(), KineticTextState::Fallen);
        for character in kinetic_text.characters() {
            let rigid_body = fixture.world.get::<&RigidBody>(character.entity).unwrap();
            assert_eq!(rigid_body.body_type, BodyType::Dynamic);
        }
    }

    #[test]
    pub fn test_nothing_visible_stays_unprepared() {
        let mut fixture = Fixture::new();
        let (text, layout) = fixture.spawn_text("   ");
        fixture.context.notifier().notify(text, layout);
        fixture.tick().unwrap();

        assert_eq!(fixture.state(text), KineticTextState::Unprepared);
        assert_eq!(fixture.world.query::<&RigidBody>().iter().count(), 0);

        // A later layout with something in it still works.
        let layout = TextLayout::monospace("ok", &Default::default());
        spawn_glyph_nodes(&mut fixture.world, text, &layout).unwrap();
        fixture.context.notifier().notify(text, layout);
        fixture.tick().unwrap();
        assert_eq!(fixture.state(text), KineticTextState::Static);
    }

    #[test]
    pub fn test_second_layout_is_ignored() {
        let mut fixture = Fixture::new();
        let (text, layout) = fixture.spawn_text("Hi");
        let notifier = fixture.context.notifier();
        notifier.notify(text, layout);
        fixture.tick().unwrap();

        notifier.notify(text, TextLayout::monospace("Hello", &Default::default()));
        fixture.tick().unwrap();
        let kinetic_text = fixture.world.get::<&KineticText>(text).unwrap();
        assert_eq!(kinetic_text.characters().len(), 2);
    }

    #[test]
    pub fn test_fall_is_edge_triggered_and_stacks() {
        let mut fixture = Fixture::new();
        let (text, layout) = fixture.spawn_text("Hi");
        fixture.context.notifier().notify(text, layout);
        fixture.tick().unwrap();

        fixture.world.get::<&mut KineticText>(text).unwrap().begin_falling = true;
        fixture.tick().unwrap();
        fixture.tick().unwrap();

        let first = fixture.world.get::<&KineticText>(text).unwrap().characters()[0];
        assert_eq!(
            fixture.world.get::<&PendingImpulses>(first.entity).unwrap().0.len(),
            2
        );

        fixture.world.get::<&mut KineticText>(text).unwrap().begin_falling = true;
        fixture.tick().unwrap();
        assert_eq!(
            fixture.world.get::<&PendingImpulses>(first.entity).unwrap().0.len(),
            4
        );
        assert_eq!(fixture.state(text), KineticTextState::Fallen);
    }

    #[test]
    pub fn test_explosion_anchor() {
        let mut fixture = Fixture::new();
        let (text, layout) = fixture.spawn_text("Hi");
        let anchor_position = Vec3::new(3.0, -2.0, 1.0);
        let anchor = fixture.world.spawn((GlobalTransform::from(
            LocalTransform::from_translation(anchor_position),
        ),));
        {
            let mut kinetic_text = fixture.world.get::<&mut KineticText>(text).unwrap();
            kinetic_text.settings = KineticTextSettings::default().explosion_origin(Vec3::ZERO);
            kinetic_text.explosion_anchor = Some(anchor);
            kinetic_text.begin_falling = true;
        }
        fixture.context.notifier().notify(text, layout);
        fixture.tick().unwrap();

        let first = fixture.world.get::<&KineticText>(text).unwrap().characters()[0];
        let pending = fixture.world.get::<&PendingImpulses>(first.entity).unwrap();
        let origins = pending
            .0
            .iter()
            .filter_map(|impulse| match impulse {
                Impulse::Explosion(explosion) => Some(explosion.origin),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(origins, vec![anchor_position]);
    }

    #[test]
    pub fn test_missing_glyph_nodes_propagate() {
        let mut fixture = Fixture::new();
        let text = fixture.world.spawn((KineticText::default(),));
        fixture
            .context
            .notifier()
            .notify(text, TextLayout::monospace("Hi", &Default::default()));

        let result = fixture.tick();
        assert!(matches!(result, Err(KineticTextError::MissingChildren(_))));
        assert_eq!(fixture.state(text), KineticTextState::Unprepared);
    }

    #[test]
    pub fn test_layout_for_plain_entity_is_ignored() {
        let mut fixture = Fixture::new();
        let plain = fixture.world.spawn(());
        fixture
            .context
            .notifier()
            .notify(plain, TextLayout::monospace("Hi", &Default::default()));
        fixture.tick().unwrap();
    }

    #[test]
    pub fn test_broken_layout_does_not_block_others() {
        let mut fixture = Fixture::new();
        let broken = fixture.world.spawn((KineticText::default(),));
        let (text, layout) = fixture.spawn_text("Hi");
        let notifier = fixture.context.notifier();
        notifier.notify(broken, TextLayout::monospace("Hi", &Default::default()));
        notifier.notify(text, layout);

        let result = fixture.tick();
        assert!(matches!(result, Err(KineticTextError::MissingChildren(_))));
        assert_eq!(fixture.state(broken), KineticTextState::Unprepared);
        assert_eq!(fixture.state(text), KineticTextState::Static);

        // Nothing is left queued for the next tick.
        fixture.tick().unwrap();
        assert_eq!(fixture.state(text), KineticTextState::Static);
    }

    #[test]
    pub fn test_broken_fall_does_not_block_others() {
        let mut fixture = Fixture::new();
        let (broken, broken_layout) = fixture.spawn_text("Hi");
        let (text, layout) = fixture.spawn_text("Hi");
        let notifier = fixture.context.notifier();
        notifier.notify(broken, broken_layout);
        notifier.notify(text, layout);
        fixture.tick().unwrap();

        let broken_characters = fixture.world.get::<&KineticText>(broken).unwrap().characters().to_vec();
        fixture
            .world
            .remove_one::<RigidBody>(broken_characters[1].entity)
            .unwrap();
        for entity in [broken, text] {
            fixture.world.get::<&mut KineticText>(entity).unwrap().begin_falling = true;
        }

        assert!(matches!(fixture.tick(), Err(KineticTextError::Component(_))));

        assert_eq!(fixture.state(text), KineticTextState::Fallen);
        for character in fixture.world.get::<&KineticText>(text).unwrap().characters() {
            let rigid_body = fixture.world.get::<&RigidBody>(character.entity).unwrap();
            assert_eq!(rigid_body.body_type, BodyType::Dynamic);
        }

        assert_eq!(fixture.state(broken), KineticTextState::Static);
        assert!(!fixture.world.get::<&KineticText>(broken).unwrap().begin_falling);
        let untouched = fixture.world.get::<&RigidBody>(broken_characters[0].entity).unwrap();
        assert_eq!(untouched.body_type, BodyType::KinematicPositionBased);
        assert!(fixture.world.get::<&PendingImpulses>(broken_characters[0].entity).is_err());
    }
}
