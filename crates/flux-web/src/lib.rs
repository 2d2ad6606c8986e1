//! Browser bridge for the particle field.
//!
//! wasm-bindgen cannot export generic or stateful structs the way the host
//! needs, so a single `SimRunner` lives in a `thread_local!` and every export
//! is a free function that borrows it.

pub mod runner;

pub use runner::SimRunner;

use std::cell::RefCell;

use flux_engine::{ForceMode, InputEvent};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<SimRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut SimRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Simulation not initialized. Call sim_init() first.");
        f(runner)
    })
}

#[wasm_bindgen]
pub fn sim_init(width: f32, height: f32) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = SimRunner::new(width, height);
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("flux: initialized {}x{}", width, height);
}

#[wasm_bindgen]
pub fn sim_start(now_ms: f64) {
    with_runner(|r| r.start(now_ms));
}

#[wasm_bindgen]
pub fn sim_stop() {
    with_runner(|r| r.stop());
}

/// Returns whether the host should request another animation frame.
#[wasm_bindgen]
pub fn sim_tick(now_ms: f64) -> bool {
    with_runner(|r| r.tick(now_ms))
}

#[wasm_bindgen]
pub fn sim_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn sim_pointer_up(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
}

#[wasm_bindgen]
pub fn sim_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn sim_key_down(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
}

/// Select a mode by its position in the mode list. Unknown indices are ignored.
#[wasm_bindgen]
pub fn sim_set_mode(index: u32) -> bool {
    match ForceMode::from_index(index) {
        Some(mode) => {
            with_runner(|r| r.push_input(InputEvent::SetMode(mode)));
            true
        }
        None => {
            log::warn!("ignoring unknown mode index {}", index);
            false
        }
    }
}

#[wasm_bindgen]
pub fn sim_reset() {
    with_runner(|r| r.push_input(InputEvent::Reset));
}

#[wasm_bindgen]
pub fn sim_resize(width: f32, height: f32) -> bool {
    with_runner(|r| r.resize(width, height))
}

#[wasm_bindgen]
pub fn sim_set_params(json: &str) -> bool {
    with_runner(|r| r.set_params_json(json))
}

#[wasm_bindgen]
pub fn sim_get_params() -> String {
    with_runner(|r| r.params_json())
}

/// Latest `AnalyserNode.getByteFrequencyData` frame.
#[wasm_bindgen]
pub fn sim_push_spectrum(data: &[u8]) {
    with_runner(|r| r.push_spectrum(data));
}

/// Latest spectrum as float magnitudes in [0, 1].
#[wasm_bindgen]
pub fn sim_push_magnitudes(data: &[f32]) {
    with_runner(|r| r.push_magnitudes(data));
}

#[wasm_bindgen]
pub fn sim_detach_audio() {
    with_runner(|r| r.detach_audio());
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_vector_vertices_ptr() -> *const f32 {
    with_runner(|r| r.vector_vertices_ptr())
}

#[wasm_bindgen]
pub fn get_vector_vertex_count() -> u32 {
    with_runner(|r| r.vector_vertex_count())
}

#[wasm_bindgen]
pub fn get_overlay_text() -> js_sys::Array {
    with_runner(|r| {
        r.overlay_lines()
            .iter()
            .map(|line| JsValue::from_str(line))
            .collect()
    })
}

#[wasm_bindgen]
pub fn get_fps() -> f32 {
    with_runner(|r| r.stats().fps)
}

#[wasm_bindgen]
pub fn get_particle_count() -> u32 {
    with_runner(|r| r.stats().particle_count as u32)
}
