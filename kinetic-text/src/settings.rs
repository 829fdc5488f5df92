use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::components::{Explosion, ForceMode};

/// Tunables for a single kinetic text instance.
///
/// Every field has a sensible default, so a partial JSON document is fine:
/// ```
/// let settings: kinetic_text::settings::KineticTextSettings =
///     serde_json::from_str(r#"{ "fall_torque": 3.0 }"#).unwrap();
/// assert_eq!(settings.mesh_depth, 0.05);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KineticTextSettings {
    /// Depth of each glyph's box collider
    pub mesh_depth: f32,
    /// Each axis of the spin given to a falling glyph is drawn from `[-fall_torque, fall_torque]`
    pub fall_torque: f32,
    /// How the spin is delivered
    pub torque_mode: ForceMode,
    /// The explosion that scatters the glyphs
    pub explosion: Explosion,
}

impl Default for KineticTextSettings {
    fn default() -> Self {
        Self {
            mesh_depth: 0.05,
            fall_torque: 10.0,
            torque_mode: ForceMode::Force,
            explosion: Default::default(),
        }
    }
}

impl KineticTextSettings {
    /// Set the collider depth
    pub fn mesh_depth(mut self, mesh_depth: f32) -> Self {
        self.mesh_depth = mesh_depth;
        self
    }

    /// Set the torque range. Negative values are treated by their magnitude.
    pub fn fall_torque(mut self, fall_torque: f32) -> Self {
        self.fall_torque = fall_torque;
        self
    }

    /// Set how torque is delivered
    pub fn torque_mode(mut self, torque_mode: ForceMode) -> Self {
        self.torque_mode = torque_mode;
        self
    }

    /// Set the explosion strength
    pub fn explosion_force(mut self, force: f32) -> Self {
        self.explosion.force = force;
        self
    }

    /// Set where the explosion happens, in world space
    pub fn explosion_origin(mut self, origin: Vec3) -> Self {
        self.explosion.origin = origin;
        self
    }

    /// Set how far the explosion reaches
    pub fn explosion_radius(mut self, radius: f32) -> Self {
        self.explosion.radius = radius;
        self
    }

    /// Set how much lift the explosion gives
    pub fn explosion_upwards_modifier(mut self, upwards_modifier: f32) -> Self {
        self.explosion.upwards_modifier = upwards_modifier;
        self
    }

    /// Set how the explosion is delivered
    pub fn explosion_mode(mut self, mode: ForceMode) -> Self {
        self.explosion.mode = mode;
        self
    }

    /// The torque range actually used when sampling
    pub(crate) fn torque_range(&self) -> f32 {
        self.fall_torque.abs()
    }
}
