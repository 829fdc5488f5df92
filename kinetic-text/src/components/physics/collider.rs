use std::fmt::Debug;

use glam::Vec3;
pub use rapier3d::prelude::SharedShape;

/// A component that enables collision - essentially a thin wrapper around [`rapier3d::prelude::Collider`].
///
/// The simulator-side collider is created by [`crate::systems::physics_system`] the first tick after this
/// component and a [`super::RigidBody`] are both present on an entity.
#[derive(Clone)]
pub struct Collider {
    /// The shape of this collider
    pub shape: SharedShape,
    /// Is this a sensor collider?
    pub sensor: bool,
    /// Should this collider be offset from its rigid body?
    pub offset_from_parent: Vec3,
    /// How "bouncy" is this collider?
    pub restitution: f32,
    /// What's the friction co-efficient of this collider?
    pub friction: f32,
}

impl Debug for Collider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collider")
            .field("shape", &self.shape.shape_type())
            .field("sensor", &self.sensor)
            .field("offset_from_parent", &self.offset_from_parent)
            .field("restitution", &self.restitution)
            .field("friction", &self.friction)
            .finish()
    }
}

impl Collider {
    /// Create a new collider
    pub fn new(shape: SharedShape) -> Collider {
        Collider {
            shape,
            ..Default::default()
        }
    }

    /// A box centred on the entity's origin
    pub fn cuboid(half_extents: Vec3) -> Collider {
        Collider::new(SharedShape::cuboid(
            half_extents.x,
            half_extents.y,
            half_extents.z,
        ))
    }

    /// Half extents of this collider, if it's a box
    pub fn half_extents(&self) -> Option<Vec3> {
        self.shape
            .as_cuboid()
            .map(|c| Vec3::new(c.half_extents.x, c.half_extents.y, c.half_extents.z))
    }
}

impl Default for Collider {
    fn default() -> Self {
        Self {
            shape: SharedShape::ball(1.0),
            sensor: false,
            offset_from_parent: Default::default(),
            restitution: 0.5,
            friction: 0.5,
        }
    }
}
