/// Frame timing for the tick loop.
///
/// Wall-clock deltas only feed the FPS readout. Simulated time advances by a
/// fixed step per tick no matter how long the frame actually took.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Simulated time added per tick.
    step: f32,
    /// Accumulated simulated time.
    elapsed: f32,
    /// Host timestamp of the previous tick, in milliseconds.
    last_ms: Option<f64>,
    /// Instantaneous, unsmoothed frames per second.
    fps: f32,
    frames: u64,
}

impl FrameClock {
    pub fn new(step: f32) -> Self {
        Self {
            step,
            elapsed: 0.0,
            last_ms: None,
            fps: 0.0,
            frames: 0,
        }
    }

    /// Mark `now_ms` as the reference point for the next delta.
    pub fn restart(&mut self, now_ms: f64) {
        self.last_ms = Some(now_ms);
    }

    /// Record a tick at `now_ms`. Returns the wall-clock delta in
    /// milliseconds and advances simulated time by one step.
    pub fn advance(&mut self, now_ms: f64) -> f64 {
        let delta_ms = match self.last_ms {
            Some(last) => now_ms - last,
            None => 0.0,
        };
        // A zero or negative delta keeps the previous reading
        if delta_ms > 0.0 {
            self.fps = (1000.0 / delta_ms) as f32;
        }
        self.last_ms = Some(now_ms);
        self.elapsed += self.step;
        self.frames += 1;
        delta_ms
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn set_elapsed(&mut self, elapsed: f32) {
        self.elapsed = elapsed;
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
