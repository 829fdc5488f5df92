#![allow(missing_docs)]
pub mod physics_context;
pub mod text_layout_context;

pub use physics_context::PhysicsContext;
pub use text_layout_context::{LayoutCompleted, LayoutNotifier, TextLayoutContext};
