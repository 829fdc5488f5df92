use hecs::Entity;

use crate::settings::KineticTextSettings;

/// Where a kinetic text is in its short life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KineticTextState {
    /// Waiting for layout, or layout had nothing visible in it
    #[default]
    Unprepared,
    /// Every glyph has a kinematic body; the text looks untouched
    Static,
    /// The glyphs have been handed over to the physics simulation
    Fallen,
}

/// One visible glyph that has been given a rigid body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KineticCharacter {
    /// The glyph node carrying the [`super::RigidBody`]. Owned by the world, not by us.
    pub entity: Entity,
    /// Slot index of the glyph in its [`crate::text_layout::TextLayout`]
    pub glyph_index: usize,
    /// The glyph itself
    pub character: char,
}

/// Turns the glyph children of this entity into rigid bodies once its layout arrives, and drops them on request.
///
/// Driven by [`crate::systems::kinetic_text_system`]. Set `begin_falling` to release the glyphs; the flag is
/// cleared once the request has been handled. Asking an unprepared text to fall keeps the request pending until
/// it is prepared.
#[derive(Debug, Clone, Default)]
pub struct KineticText {
    /// Tunables
    pub settings: KineticTextSettings,
    /// Set to `true` to release the glyphs
    pub begin_falling: bool,
    /// If set, the explosion is centred on this entity's [`super::GlobalTransform`] instead of `settings.explosion.origin`
    pub explosion_anchor: Option<Entity>,
    pub(crate) state: KineticTextState,
    pub(crate) characters: Vec<KineticCharacter>,
}

impl KineticText {
    /// Create a new kinetic text with the given settings
    pub fn new(settings: KineticTextSettings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    /// Have the glyphs been given bodies yet?
    pub fn is_prepared(&self) -> bool {
        self.state != KineticTextState::Unprepared
    }

    /// Current lifecycle state
    pub fn state(&self) -> KineticTextState {
        self.state
    }

    /// The materialised glyphs, in layout order
    pub fn characters(&self) -> &[KineticCharacter] {
        &self.characters
    }
}
