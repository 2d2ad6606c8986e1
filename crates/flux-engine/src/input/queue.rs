use crate::api::params::{ForceMode, ParamPatch, SimParams};

/// Input and control events the engine understands.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A touch/click began at surface coordinates (x, y).
    PointerDown { x: f32, y: f32 },
    /// A touch/click ended at surface coordinates (x, y).
    PointerUp { x: f32, y: f32 },
    /// A touch/cursor moved to surface coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// A key was pressed (DOM `keyCode`).
    KeyDown { key_code: u32 },
    /// Switch the force field.
    SetMode(ForceMode),
    /// Replace the population.
    Reset,
    /// The render surface changed size.
    Resize { width: f32, height: f32 },
    /// Replace the whole parameter set.
    SetParams(SimParams),
    /// Overwrite only the listed parameters, merged over the values current
    /// when the event is applied.
    UpdateParams(ParamPatch),
}

/// A queue of input events.
/// The host pushes events between ticks; the driver drains them at the
/// start of the next tick.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
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
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(InputEvent::KeyDown { key_code: 32 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn drain_preserves_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::SetMode(ForceMode::Chaos));
        q.push(InputEvent::Reset);
        q.push(InputEvent::Resize { width: 640.0, height: 480.0 });
        let events = q.drain();
        assert_eq!(events[0], InputEvent::SetMode(ForceMode::Chaos));
        assert_eq!(events[1], InputEvent::Reset);
        assert_eq!(events[2], InputEvent::Resize { width: 640.0, height: 480.0 });
    }
}
