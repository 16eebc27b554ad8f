use crate::api::types::{Extent, TextureId};

/// Page events the animation reacts to.
/// Event callbacks push these; the runner applies them between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropInput {
    /// The sprite image finished loading.
    TextureLoaded { texture: TextureId },
    /// The sprite image failed to load. The animation stays empty.
    TextureFailed,
    /// A scroll observation: the trigger element's bottom edge and the
    /// viewport's bottom edge, both in document pixels.
    Scroll { trigger_bottom: f32, viewport_bottom: f32 },
    /// The replay button was pressed.
    Reset,
    /// The container or window changed size.
    Resize { container: Extent, window: Extent },
}

/// A queue of page events.
/// JS pushes into the queue; Rust drains it at the start of each frame.
pub struct InputQueue {
    events: Vec<DropInput>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, event: DropInput) {
        self.events.push(event);
    }

    /// Drain all pending events in arrival order.
    pub fn drain(&mut self) -> Vec<DropInput> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain_in_order() {
        let mut q = InputQueue::new();
        q.push(DropInput::Reset);
        q.push(DropInput::Scroll { trigger_bottom: 900.0, viewport_bottom: 900.0 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events[0], DropInput::Reset);
        assert!(matches!(events[1], DropInput::Scroll { .. }));
        assert!(q.is_empty());
    }
}
