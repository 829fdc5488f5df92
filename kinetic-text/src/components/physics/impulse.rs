use glam::Vec3;

use super::{Explosion, ForceMode};

/// Something to do to a rigid body on the next physics tick.
#[derive(Debug, Clone, PartialEq)]
pub enum Impulse {
    /// Push the body's centre of mass
    Linear {
        /// Direction and magnitude
        value: Vec3,
        /// How `value` is delivered
        mode: ForceMode,
    },
    /// Spin the body
    Torque {
        /// Axis and magnitude
        value: Vec3,
        /// How `value` is delivered
        mode: ForceMode,
    },
    /// Push the body away from a point
    Explosion(Explosion),
}

/// A "one-shot" component holding impulses waiting to be applied.
///
/// [`crate::systems::physics_system`] applies everything in here on its next tick and then removes the component.
/// Impulses pushed onto a body that is still kinematic when that tick runs do nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingImpulses(pub Vec<Impulse>);

impl PendingImpulses {
    /// Queue an impulse
    pub fn push(&mut self, impulse: Impulse) {
        self.0.push(impulse);
    }
}
