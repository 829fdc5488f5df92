#![allow(missing_docs)]
pub mod children;
pub mod global_transform;
pub mod glyph_mesh;
pub mod kinetic_text;
pub mod local_transform;
pub mod parent;
/// Rigid bodies, colliders and the impulses that push them around
pub mod physics;

pub use children::Children;
pub use global_transform::GlobalTransform;
pub use glyph_mesh::GlyphMesh;
pub use kinetic_text::{KineticCharacter, KineticText, KineticTextState};
pub use local_transform::LocalTransform;
pub use parent::Parent;
pub use physics::{
    BodyType, Collider, Explosion, ForceMode, Impulse, PendingImpulses, PhysicsHandle, RigidBody,
};
