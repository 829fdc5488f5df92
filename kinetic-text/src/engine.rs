use glam::Vec3;
use hecs::World;
use log::debug;
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    contexts::{
        physics_context::{DEFAULT_GRAVITY, DEFAULT_TIMESTEP},
        PhysicsContext, TextLayoutContext,
    },
    systems::{kinetic_text_system, physics_system, update_global_transform_system},
    KineticTextResult,
};

/// Builder for `Engine`.
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    gravity: Option<Vec3>,
    timestep: Option<f32>,
    seed: Option<u64>,
}

impl EngineBuilder {
    /// Create an `EngineBuilder`
    pub fn new() -> Self {
        Default::default()
    }

    /// Set gravity, in metres per second squared. Defaults to earth gravity pointing down `-Y`.
    pub fn gravity(mut self, gravity: Option<Vec3>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the length of a tick, in seconds. Defaults to 60 ticks a second.
    pub fn timestep(mut self, timestep: Option<f32>) -> Self {
        self.timestep = timestep;
        self
    }

    /// Seed the random number generator, for reproducible falls. Unseeded engines use entropy.
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Build the `Engine`
    pub fn build(self) -> Engine {
        let gravity = self.gravity.unwrap_or(DEFAULT_GRAVITY);
        let timestep = self.timestep.unwrap_or(DEFAULT_TIMESTEP);
        debug!("Building engine with gravity {gravity} and timestep {timestep}");

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Engine {
            world: Default::default(),
            physics_context: PhysicsContext::new(gravity, timestep),
            text_layout_context: Default::default(),
            rng,
        }
    }
}

/// Owns the world and everything the systems need to run against it.
pub struct Engine {
    /// Every entity and component
    pub world: World,
    /// The rigid body simulation
    pub physics_context: PhysicsContext,
    /// Completed layouts waiting to be materialised
    pub text_layout_context: TextLayoutContext,
    /// Source of randomness for falling glyphs
    pub rng: StdRng,
}

impl Default for Engine {
    fn default() -> Self {
        EngineBuilder::new().build()
    }
}

impl Engine {
    /// Run a single tick: kinetic text, transforms, physics, then transforms again so everything reflects the
    /// new physics state.
    ///
    /// Errors are precondition failures (a text with fewer glyph nodes than glyphs, say) and are not recoverable.
    pub fn update(&mut self) -> KineticTextResult<()> {
        kinetic_text_system(self)?;
        update_global_transform_system(self);
        physics_system(self)?;
        update_global_transform_system(self);
        Ok(())
    }

    /// How long a tick lasts, in seconds
    pub fn timestep(&self) -> f32 {
        self.physics_context.integration_parameters.dt
    }
}
