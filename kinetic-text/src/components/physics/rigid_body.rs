use rapier3d::prelude::RigidBodyType as RapierBodyType;

/// A component used to synchronise this entity's position in the game simulation with the physics simulation.
///
/// You can indicate to [`crate::systems::physics_system`] how you'd like this entity to be treated by changing the `body_type` field.
/// Setting the `body_type` to [`BodyType::Dynamic`] will result in the entity having its [`crate::components::LocalTransform`]
/// and [`crate::components::GlobalTransform`] overwritten by its position in the physics simulation.
///
/// Any other kind of body is treated as *game controlled* - the position of the entity in the physics simulation is
/// updated from its [`crate::components::GlobalTransform`] (all transforms in the physics simulation are in global space).
///
/// Changing `body_type` on an existing body is picked up on the next tick.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    /// How should the physics simulation treat this body?
    pub body_type: BodyType,
    /// Mass of the body, in kilograms
    pub mass: f32,
}

/// The kinds of rigid body the simulation understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    /// Moved by setting its position, unaffected by forces
    KinematicPositionBased,
    /// Fully simulated
    Dynamic,
}

impl From<BodyType> for RapierBodyType {
    fn from(r: BodyType) -> Self {
        match r {
            BodyType::KinematicPositionBased => RapierBodyType::KinematicPositionBased,
            BodyType::Dynamic => RapierBodyType::Dynamic,
        }
    }
}

impl Default for RigidBody {
    fn default() -> Self {
        Self {
            body_type: BodyType::Dynamic,
            mass: 1.,
        }
    }
}

impl RigidBody {
    /// A body that follows its transform and ignores forces
    pub fn kinematic_position_based() -> Self {
        Self {
            body_type: BodyType::KinematicPositionBased,
            ..Default::default()
        }
    }
}
