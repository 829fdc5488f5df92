use serde::{Deserialize, Serialize};

/// How an impulse's `value` is delivered to a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ForceMode {
    /// A force applied over a single physics step - the body's mass matters
    #[default]
    Force,
    /// An acceleration applied over a single physics step - mass is ignored
    Acceleration,
    /// An instantaneous impulse - the body's mass matters
    Impulse,
    /// An instantaneous change in velocity - mass is ignored
    VelocityChange,
}

impl ForceMode {
    /// Does this mode ignore the body's mass (or inertia)?
    pub fn ignores_mass(self) -> bool {
        matches!(self, ForceMode::Acceleration | ForceMode::VelocityChange)
    }

    /// Scale `value` down to what should be delivered this step, given a timestep of `dt`.
    pub fn per_step(self, value: glam::Vec3, dt: f32) -> glam::Vec3 {
        match self {
            ForceMode::Force | ForceMode::Acceleration => value * dt,
            ForceMode::Impulse | ForceMode::VelocityChange => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    pub fn test_per_step() {
        let value = Vec3::new(60.0, 0.0, -30.0);
        assert_eq!(ForceMode::Force.per_step(value, 0.5), Vec3::new(30.0, 0.0, -15.0));
        assert_eq!(ForceMode::Acceleration.per_step(value, 0.5), Vec3::new(30.0, 0.0, -15.0));
        assert_eq!(ForceMode::Impulse.per_step(value, 0.5), value);
        assert_eq!(ForceMode::VelocityChange.per_step(value, 0.5), value);

        assert!(ForceMode::VelocityChange.ignores_mass());
        assert!(!ForceMode::Impulse.ignores_mass());
    }
}
