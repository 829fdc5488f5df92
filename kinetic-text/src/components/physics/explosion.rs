use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::ForceMode;

/// A radial push away from `origin` that fades out with distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Explosion {
    /// Strength at the centre of the explosion
    pub force: f32,
    /// Centre of the explosion, in world space
    pub origin: Vec3,
    /// Bodies further away than this are unaffected. Zero means "infinite".
    pub radius: f32,
    /// Lowers the apparent centre of the explosion, giving everything a lift
    pub upwards_modifier: f32,
    /// How the resulting push is delivered
    pub mode: ForceMode,
}

impl Default for Explosion {
    fn default() -> Self {
        Self {
            force: 20.0,
            origin: Vec3::ZERO,
            radius: 10.0,
            upwards_modifier: 0.2,
            mode: ForceMode::VelocityChange,
        }
    }
}

impl Explosion {
    /// The push felt by something at `point`, before `mode` is applied.
    ///
    /// Falls off linearly to zero at `radius`. Returns `None` when `point` is out of range.
    pub fn impulse_at(&self, point: Vec3) -> Option<Vec3> {
        let distance = point.distance(self.origin);
        let falloff = if self.radius > 0.0 {
            if distance > self.radius {
                return None;
            }
            1.0 - distance / self.radius
        } else {
            1.0
        };

        let apparent_origin = self.origin - Vec3::Y * self.upwards_modifier;
        let direction = (point - apparent_origin).try_normalize().unwrap_or(Vec3::Y);

        Some(direction * self.force * falloff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    pub fn test_falloff_and_direction() {
        let explosion = Explosion {
            force: 20.0,
            origin: Vec3::ZERO,
            radius: 10.0,
            upwards_modifier: 0.0,
            mode: ForceMode::Impulse,
        };

        let push = explosion.impulse_at([5.0, 0.0, 0.0].into()).unwrap();
        assert_relative_eq!(push, Vec3::new(10.0, 0.0, 0.0));

        let push = explosion.impulse_at([0.0, 0.0, -2.0].into()).unwrap();
        assert_relative_eq!(push, Vec3::new(0.0, 0.0, -16.0));

        assert!(explosion.impulse_at([10.5, 0.0, 0.0].into()).is_none());
    }

    #[test]
    pub fn test_upwards_modifier_lifts() {
        let explosion = Explosion {
            upwards_modifier: 1.0,
            radius: 0.0,
            ..Default::default()
        };

        // Level with the origin, but the apparent origin sits below us.
        let push = explosion.impulse_at([1.0, 0.0, 0.0].into()).unwrap();
        assert!(push.y > 0.0);
        assert_relative_eq!(push.length(), 20.0, epsilon = 1e-5);
    }

    #[test]
    pub fn test_at_origin_pushes_up() {
        let explosion = Explosion {
            upwards_modifier: 0.0,
            ..Default::default()
        };
        let push = explosion.impulse_at(Vec3::ZERO).unwrap();
        assert_relative_eq!(push, Vec3::new(0.0, 20.0, 0.0));
    }
}
