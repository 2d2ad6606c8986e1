use glam::Vec2;

use crate::api::params::{ForceMode, SimParams};

/// Pointer position and button state as last reported by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub pos: Vec2,
    pub down: bool,
    /// Displacement between the two most recent pointer reports.
    pub velocity: Vec2,
}

impl PointerState {
    pub fn move_to(&mut self, pos: Vec2) {
        self.velocity = pos - self.pos;
        self.pos = pos;
    }
}

/// Immutable per-tick snapshot handed to every force computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimContext {
    pub pointer: PointerState,
    /// Simulated time accumulated so far.
    pub time: f32,
    /// Viewport width and height.
    pub viewport: Vec2,
    pub params: SimParams,
}

impl SimContext {
    pub fn new(viewport: Vec2, params: SimParams) -> Self {
        Self {
            pointer: PointerState::default(),
            time: 0.0,
            viewport,
            params,
        }
    }

    pub fn with_pointer(mut self, pointer: PointerState) -> Self {
        self.pointer = pointer;
        self
    }

    pub fn with_time(mut self, time: f32) -> Self {
        self.time = time;
        self
    }

    pub fn with_mode(mut self, mode: ForceMode) -> Self {
        self.params.mode = mode;
        self
    }

    pub fn mode(&self) -> ForceMode {
        self.params.mode
    }
}
