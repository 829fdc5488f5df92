use crossbeam::channel::{Receiver, Sender};
use hecs::Entity;
use log::warn;

use crate::text_layout::TextLayout;

/// A layout engine has finished laying out `text`.
#[derive(Debug, Clone)]
pub struct LayoutCompleted {
    pub text: Entity,
    pub layout: TextLayout,
}

/// Handed to whatever lays out text, so it can tell us when it's done.
#[derive(Debug, Clone)]
pub struct LayoutNotifier {
    sender: Sender<LayoutCompleted>,
}

impl LayoutNotifier {
    /// Report that `text` has been laid out. Returns `false`, and drops the layout, if the engine has gone away.
    pub fn notify(&self, text: Entity, layout: TextLayout) -> bool {
        let sent = self.sender.send(LayoutCompleted { text, layout }).is_ok();
        if !sent {
            warn!("Dropping layout for {text:?}: nothing is listening any more");
        }
        sent
    }
}

/// Collects completed layouts until [`crate::systems::kinetic_text_system`] gets around to them.
pub struct TextLayoutContext {
    sender: Sender<LayoutCompleted>,
    receiver: Receiver<LayoutCompleted>,
}

impl Default for TextLayoutContext {
    fn default() -> Self {
        let (sender, receiver) = crossbeam::channel::unbounded();
        Self { sender, receiver }
    }
}

impl TextLayoutContext {
    pub fn notifier(&self) -> LayoutNotifier {
        LayoutNotifier {
            sender: self.sender.clone(),
        }
    }

    /// Everything that has completed since the last call. Never blocks.
    pub fn completed(&self) -> Vec<LayoutCompleted> {
        self.receiver.try_iter().collect()
    }
}
