use flux_engine::{
    AudioSource, DriverConfig, FrameDriver, FrameStats, InputEvent, InputQueue,
    SimParams, SpectrumBuffer, VectorSurface,
};

/// Wires the frame driver to a vector surface, an input queue and the
/// latest audio frame pushed by the host.
///
/// The browser owns the `requestAnimationFrame` loop: it calls `tick` once
/// per frame and keeps scheduling while `tick` returns true.
pub struct SimRunner {
    driver: FrameDriver,
    input: InputQueue,
    surface: VectorSurface,
    audio: SpectrumBuffer,
    audio_attached: bool,
}

impl SimRunner {
    pub fn new(width: f32, height: f32) -> Self {
        let config = DriverConfig {
            width,
            height,
            ..DriverConfig::default()
        };
        Self {
            driver: FrameDriver::new(config, SimParams::default()),
            input: InputQueue::new(),
            surface: VectorSurface::new(width, height),
            audio: SpectrumBuffer::new(),
            audio_attached: false,
        }
    }

    pub fn start(&mut self, now_ms: f64) {
        self.driver.start(now_ms);
    }

    pub fn stop(&mut self) {
        self.driver.stop();
    }

    /// Push an input event; applied at the start of the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame. Returns whether the host should request another.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        for event in self.input.drain() {
            if let InputEvent::Resize { width, height } = event {
                self.surface.resize(width, height);
            }
            self.driver.apply(event);
        }

        self.surface.begin_frame();
        let audio = if self.audio_attached {
            Some(&self.audio as &dyn AudioSource)
        } else {
            None
        };
        self.driver.tick(now_ms, &mut self.surface, audio)
    }

    /// Queue a partial parameter update. Keys the JSON leaves out keep their
    /// current values; the merged set is sanitized when applied. Returns
    /// false and queues nothing if the JSON is malformed.
    pub fn set_params_json(&mut self, json: &str) -> bool {
        let checked = SimParams::patch_from_json(json)
            .and_then(|patch| self.driver.params().merged(&patch).map(|_| patch));
        match checked {
            Ok(patch) => {
                self.push_input(InputEvent::UpdateParams(patch));
                true
            }
            Err(e) => {
                log::warn!("ignoring malformed params: {}", e);
                false
            }
        }
    }

    /// Queue a resize. Sizes that are not positive and finite are dropped.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            log::warn!("ignoring resize to {}x{}", width, height);
            return false;
        }
        self.push_input(InputEvent::Resize { width, height });
        true
    }

    pub fn params_json(&self) -> String {
        self.driver.params().to_json().unwrap_or_default()
    }

    /// Store the latest analyser byte frame and treat audio as attached.
    pub fn push_spectrum(&mut self, data: &[u8]) {
        self.attach_audio(data.len());
        self.audio.write_bytes(data);
    }

    /// Same as `push_spectrum` for float magnitudes in [0, 1].
    pub fn push_magnitudes(&mut self, data: &[f32]) {
        self.attach_audio(data.len());
        self.audio.write_magnitudes(data);
    }

    fn attach_audio(&mut self, bins: usize) {
        if !self.audio_attached {
            log::info!("audio attached ({} bins)", bins);
        }
        self.audio_attached = true;
    }

    pub fn detach_audio(&mut self) {
        self.audio.clear();
        self.audio_attached = false;
    }

    // ---- Accessors for host reads ----

    pub fn vector_vertices_ptr(&self) -> *const f32 {
        self.surface.buffer_ptr()
    }

    pub fn vector_vertex_count(&self) -> u32 {
        self.surface.vertex_count() as u32
    }

    pub fn overlay_lines(&self) -> Vec<String> {
        self.surface.labels().iter().map(|l| l.text.clone()).collect()
    }

    pub fn stats(&self) -> &FrameStats {
        self.driver.stats()
    }

    pub fn driver(&self) -> &FrameDriver {
        &self.driver
    }

    pub fn surface(&self) -> &VectorSurface {
        &self.surface
    }
}
