#![allow(missing_docs)]
pub mod fall;
pub mod kinetic_text;
pub mod materialize;
pub mod physics;
pub mod update_global_transform;

pub use fall::trigger_fall;
pub use kinetic_text::kinetic_text_system;
pub use materialize::materialize;
pub use physics::physics_system;
pub use update_global_transform::update_global_transform_system;

pub(crate) use update_global_transform::update_global_transform_system_inner;
