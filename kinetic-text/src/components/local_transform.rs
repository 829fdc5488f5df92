use glam::{Affine3A, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// The entity's position relative to its [`super::Parent`], or to the world if it has none.
///
/// There are two ways an entity gets moved:
///
/// 1. **Game controlled** - you write to [`LocalTransform`] and, if the entity has a kinematic
///    [`super::RigidBody`], the physics simulation follows along.
/// 1. **Physics controlled** - the entity has a [`super::physics::BodyType::Dynamic`] body, and
///    [`crate::systems::physics_system`] overwrites this transform every tick. Anything you write here is lost.
#[derive(Clone, PartialEq, Debug, Copy, Deserialize, Serialize)]
pub struct LocalTransform {
    /// The translation of the entity
    pub translation: Vec3,
    /// The rotation of the entity
    pub rotation: Quat,
    /// The non-uniform scale of the entity
    pub scale: Vec3,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl LocalTransform {
    /// Convenience function to create a [`LocalTransform`] that is only translated
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    /// Convenience function to convert the [`LocalTransform`] into a [`glam::Affine3A`]
    pub fn to_affine(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}
