#![allow(missing_docs)]
pub mod collider;
pub mod explosion;
pub mod force_mode;
pub mod impulse;
pub mod physics_handle;
pub mod rigid_body;

pub use collider::Collider;
pub use collider::SharedShape;
pub use explosion::Explosion;
pub use force_mode::ForceMode;
pub use impulse::Impulse;
pub use impulse::PendingImpulses;
pub use physics_handle::PhysicsHandle;
pub use rigid_body::BodyType;
pub use rigid_body::RigidBody;
