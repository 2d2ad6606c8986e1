use glam::Vec2;

use crate::api::context::{PointerState, SimContext};
use crate::api::params::{ForceMode, ParamPatch, SimParams};
use crate::audio::AudioSource;
use crate::core::particle::Particle;
use crate::core::rng::Rng;
use crate::core::store::ParticleStore;
use crate::core::time::FrameClock;
use crate::input::keys::KeyAction;
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::surface::RenderSurface;
use crate::systems::render;
use crate::systems::step_particle;

/// Configuration for the driver, fixed for its lifetime.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Simulated time added per tick (default: 0.016).
    pub time_step: f32,
    /// RNG seed for population and force noise (default: 42).
    pub seed: u64,
    /// Initial viewport width (default: 800).
    pub width: f32,
    /// Initial viewport height (default: 600).
    pub height: f32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            time_step: 0.016,
            seed: 42,
            width: 800.0,
            height: 600.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// No tick loop scheduled.
    Idle,
    /// The host should keep requesting frames.
    Running,
}

/// Values shown by the stats overlay, refreshed every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    pub fps: f32,
    pub particle_count: usize,
    pub mode: ForceMode,
    pub audio_energy: f32,
}

impl FrameStats {
    pub fn lines(&self) -> [String; 4] {
        [
            format!("FPS: {:.0}", self.fps),
            format!("Particles: {}", self.particle_count),
            format!("Mode: {}", self.mode),
            format!("Audio: {:.0}%", self.audio_energy * 100.0),
        ]
    }
}

/// Orchestrates ticks: timing, audio sampling, the per-particle pipeline and
/// drawing.
///
/// Everything outside a tick (pointer updates, parameter changes, control
/// requests) is applied between ticks, either directly through the methods
/// here or queued and drained at the start of the next tick.
pub struct FrameDriver {
    state: DriverState,
    store: ParticleStore,
    params: SimParams,
    pointer: PointerState,
    clock: FrameClock,
    viewport: Vec2,
    rng: Rng,
    stats: FrameStats,
}

impl FrameDriver {
    /// Create an idle driver with a freshly populated store.
    pub fn new(config: DriverConfig, params: SimParams) -> Self {
        let mut driver = Self {
            clock: FrameClock::new(config.time_step),
            viewport: Vec2::new(config.width, config.height),
            rng: Rng::new(config.seed),
            state: DriverState::Idle,
            store: ParticleStore::new(),
            pointer: PointerState::default(),
            stats: FrameStats { mode: params.mode, ..FrameStats::default() },
            params,
        };
        driver.reset();
        driver
    }

    // -- Loop state --

    /// idle -> running. `now_ms` anchors the first frame delta.
    pub fn start(&mut self, now_ms: f64) {
        if self.state == DriverState::Running {
            return;
        }
        self.clock.restart(now_ms);
        self.state = DriverState::Running;
        log::info!("driver: started with {} particles in {} mode", self.store.len(), self.params.mode);
    }

    /// running -> idle. Only prevents the next tick; never interrupts one.
    pub fn stop(&mut self) {
        if self.state == DriverState::Idle {
            return;
        }
        self.state = DriverState::Idle;
        log::info!("driver: stopped after {} frames", self.clock.frames());
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    // -- Control --

    /// Replace the population with `particle_count` random particles.
    pub fn reset(&mut self) {
        let count = self.params.particle_count;
        self.store.reset(count, self.viewport.x, self.viewport.y, &mut self.rng);
        self.stats.particle_count = count;
        log::info!("driver: population reset to {} over {}x{}", count, self.viewport.x, self.viewport.y);
    }

    /// Takes effect on the next tick. Particle state carries over.
    pub fn set_mode(&mut self, mode: ForceMode) {
        if self.params.mode != mode {
            log::debug!("driver: mode {} -> {}", self.params.mode, mode);
        }
        self.params.mode = mode;
    }

    /// Replace the parameter set. A changed particle count repopulates.
    pub fn set_params(&mut self, params: SimParams) {
        let recount = params.particle_count != self.params.particle_count;
        log::debug!("driver: params updated {:?}", params);
        self.params = params;
        if recount {
            self.reset();
        }
    }

    /// Write `patch` over the current parameters, then sanitize. A patch
    /// that does not deserialize leaves the parameters untouched.
    pub fn update_params(&mut self, patch: &ParamPatch) {
        match self.params.merged(patch) {
            Ok(params) => self.set_params(params.sanitized()),
            Err(e) => log::warn!("driver: ignoring parameter update: {}", e),
        }
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    /// Particles are not moved; the next boundary check pulls stragglers in.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
        log::info!("driver: resized to {}x{}", width, height);
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    // -- Pointer and keys --

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.pointer.move_to(Vec2::new(x, y));
        self.pointer.down = true;
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) {
        self.pointer.move_to(Vec2::new(x, y));
        self.pointer.down = false;
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer.move_to(Vec2::new(x, y));
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn key_down(&mut self, key_code: u32) {
        match KeyAction::from_key_code(key_code) {
            Some(KeyAction::SelectMode(mode)) => self.set_mode(mode),
            Some(KeyAction::NextMode) => self.set_mode(self.params.mode.next()),
            Some(KeyAction::Reset) => self.reset(),
            Some(KeyAction::ToggleTrails) => self.params.trails_enabled = !self.params.trails_enabled,
            Some(KeyAction::ToggleBloom) => self.params.bloom_enabled = !self.params.bloom_enabled,
            Some(KeyAction::ToggleStats) => self.params.stats_enabled = !self.params.stats_enabled,
            None => {}
        }
    }

    /// Apply one queued event.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { x, y } => self.pointer_down(x, y),
            InputEvent::PointerUp { x, y } => self.pointer_up(x, y),
            InputEvent::PointerMove { x, y } => self.pointer_move(x, y),
            InputEvent::KeyDown { key_code } => self.key_down(key_code),
            InputEvent::SetMode(mode) => self.set_mode(mode),
            InputEvent::Reset => self.reset(),
            InputEvent::Resize { width, height } => self.resize(width, height),
            InputEvent::SetParams(params) => self.set_params(params),
            InputEvent::UpdateParams(patch) => self.update_params(&patch),
        }
    }

    /// Apply and clear every queued event, in order.
    pub fn apply_all(&mut self, queue: &mut InputQueue) {
        for event in queue.drain() {
            self.apply(event);
        }
    }

    // -- Inspection --

    pub fn particles(&self) -> &[Particle] {
        self.store.as_slice()
    }

    pub fn particles_mut(&mut self) -> &mut ParticleStore {
        &mut self.store
    }

    /// Simulated time accumulated so far.
    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    /// Seed the simulated time, e.g. to replay a run.
    pub fn set_elapsed(&mut self, elapsed: f32) {
        self.clock.set_elapsed(elapsed);
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Snapshot of everything the force laws read this tick.
    pub fn context(&self) -> SimContext {
        SimContext::new(self.viewport, self.params)
            .with_pointer(self.pointer)
            .with_time(self.clock.elapsed())
    }

    // -- Tick --

    /// Run one tick at host time `now_ms` and draw it onto `surface`.
    ///
    /// Returns whether the host should schedule another frame. While idle
    /// nothing is simulated or drawn and `false` is returned.
    pub fn tick(
        &mut self,
        now_ms: f64,
        surface: &mut dyn RenderSurface,
        audio: Option<&dyn AudioSource>,
    ) -> bool {
        if self.state == DriverState::Idle {
            return false;
        }

        self.clock.advance(now_ms);

        let params = self.params;
        render::draw_fade(surface, params.trails_enabled);

        let energy = audio.map_or(0.0, |a| a.sample_energy().clamp(0.0, 1.0));

        let ctx = self.context();
        let rng = &mut self.rng;
        self.store.for_each(|p| {
            step_particle(p, &ctx, energy, rng);
            render::draw_particle(surface, p, params.trails_enabled, params.bloom_enabled);
        });

        if let Some(source) = audio {
            render::draw_spectrum(surface, source.sample_spectrum());
        }

        if self.pointer.down {
            render::draw_pointer_ring(surface, self.pointer.pos, params.interaction_radius);
        }

        self.stats = FrameStats {
            fps: self.clock.fps(),
            particle_count: self.store.len(),
            mode: params.mode,
            audio_energy: energy,
        };
        if params.stats_enabled {
            render::draw_stats(surface, &self.stats);
        }

        true
    }
}
