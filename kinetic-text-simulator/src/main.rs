use std::fs;

use anyhow::{Context, Result};
use kinetic_text::{
    components::{GlobalTransform, KineticText, LocalTransform},
    glam::Vec3,
    settings::KineticTextSettings,
    text_layout::{spawn_glyph_nodes, MonospaceMetrics, TextLayout},
    EngineBuilder,
};
use log::{debug, info};

static TEXT: &'_ str = "Kinetic\ntext";
const LAYOUT_READY_TICK: usize = 3;
const FALL_TICK: usize = 60;
const LAST_TICK: usize = 240;

/// Lays out some text, lets it sit for a second, then drops it and reports where each glyph ends up.
///
/// Pass the path to a JSON file of `KineticTextSettings` to tweak the fall.
pub fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let settings: KineticTextSettings = match std::env::args().nth(1) {
        Some(path) => {
            let contents =
                fs::read_to_string(&path).with_context(|| format!("Unable to read {path}"))?;
            serde_json::from_str(&contents).with_context(|| format!("Invalid settings in {path}"))?
        }
        None => KineticTextSettings::default().explosion_origin([1.5, 0.5, 0.5].into()),
    };
    debug!("Using settings {settings:?}");

    let mut engine = EngineBuilder::new().seed(Some(0)).build();

    let layout = TextLayout::monospace(TEXT, &MonospaceMetrics::default());
    let local_transform = LocalTransform::from_translation([0.0, 2.0, 0.0].into());
    let text = engine.world.spawn((
        KineticText::new(settings),
        local_transform,
        GlobalTransform::from(local_transform),
    ));
    let nodes = spawn_glyph_nodes(&mut engine.world, text, &layout)?;
    info!("Spawned {} glyph nodes for {TEXT:?}", nodes.len());

    let notifier = engine.text_layout_context.notifier();
    for tick in 0..=LAST_TICK {
        // Pretend layout takes a few frames, as it does in a real renderer.
        if tick == LAYOUT_READY_TICK {
            notifier.notify(text, layout.clone());
        }
        if tick == FALL_TICK {
            engine.world.get::<&mut KineticText>(text)?.begin_falling = true;
        }

        engine.update()?;

        if tick % 60 == 0 {
            let lowest = nodes
                .iter()
                .filter_map(|node| engine.world.get::<&GlobalTransform>(*node).ok())
                .map(|g| g.translation().y)
                .fold(f32::INFINITY, f32::min);
            info!(
                "t = {:.2}s, lowest glyph at y = {lowest:.3}",
                tick as f32 * engine.timestep()
            );
        }
    }

    let kinetic_text = engine.world.get::<&KineticText>(text)?;
    for character in kinetic_text.characters() {
        let global_transform = engine.world.get::<&GlobalTransform>(character.entity)?;
        let start = layout.characters[character.glyph_index].centre() + Vec3::new(0.0, 2.0, 0.0);
        let end = global_transform.translation();
        info!(
            "{:?} went from {start} to {end} ({:.2}m)",
            character.character,
            start.distance(end)
        );
    }

    Ok(())
}
