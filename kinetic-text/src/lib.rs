#![deny(missing_docs)]

//! Kinetic text turns a line of rendered text into a pile of tiny rigid bodies.
//!
//! Each visible glyph of a laid out string gets its own child entity. Once the host's layout engine
//! reports that layout is complete, every glyph is recentred around its own bounding box, given a box
//! collider and parked as a kinematic body, so the text looks exactly as it did before. Flip
//! [`components::KineticText::begin_falling`] and the glyphs are released to the physics simulation with a
//! random spin and a radial explosion impulse.
//!
//! # Getting started
//! ```no_run
//! use kinetic_text::{
//!     components::KineticText,
//!     text_layout::{spawn_glyph_nodes, MonospaceMetrics, TextLayout},
//!     EngineBuilder,
//! };
//!
//! let mut engine = EngineBuilder::new().seed(Some(42)).build();
//! let layout = TextLayout::monospace("Hello", &MonospaceMetrics::default());
//! let text = engine.world.spawn((KineticText::default(),));
//! spawn_glyph_nodes(&mut engine.world, text, &layout).unwrap();
//! engine.text_layout_context.notifier().notify(text, layout);
//!
//! engine.update().unwrap();
//! engine.world.get::<&mut KineticText>(text).unwrap().begin_falling = true;
//! engine.update().unwrap();
//! ```

pub use engine::{Engine, EngineBuilder};
pub use glam;
pub use hecs;
pub use kinetic_text_error::KineticTextError;
pub use rapier3d;

/// Components are data attached to entities in the [`hecs::World`]
pub mod components;
/// Contexts wrap external state the systems interact with
pub mod contexts;
mod engine;
mod kinetic_text_error;
/// Configuration for a kinetic text instance
pub mod settings;
/// Systems are functions called each tick to update the simulation
pub mod systems;
/// Glyph layout data and a tiny fixed-advance layout engine
pub mod text_layout;
/// Kitchen sink utility functions
pub mod util;

/// Kinetic text result type
pub type KineticTextResult<T> = std::result::Result<T, KineticTextError>;
