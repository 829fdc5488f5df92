use rapier3d::prelude::{ColliderHandle, RigidBodyHandle};

/// Links an entity to its body and collider inside [`crate::contexts::PhysicsContext`].
///
/// Inserted by [`crate::systems::physics_system`]; you shouldn't need to create one yourself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicsHandle {
    /// Handle of the rigid body
    pub rigid_body: RigidBodyHandle,
    /// Handle of the collider attached to the rigid body
    pub collider: ColliderHandle,
}
