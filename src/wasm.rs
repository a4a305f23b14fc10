//! Browser bindings
//!
//! Exposes the session to JavaScript. Canvas drawing, DOM updates and event
//! listeners stay on the JS side; it feeds frame times and jump events in and
//! reads snapshots back out.

use wasm_bindgen::prelude::*;

use crate::driver::Driver;
use crate::sim::{GameState, Snapshot};
use crate::tuning::Tuning;

/// Game instance holding all state
#[wasm_bindgen]
pub struct WasmGame {
    state: GameState,
    driver: Driver,
    last: Option<Snapshot>,
}

#[wasm_bindgen]
impl WasmGame {
    /// Create and start a run with default tuning
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> WasmGame {
        Self::build(seed, Tuning::default())
    }

    /// Create and start a run from a JSON tuning document. Missing, blank or
    /// invalid documents fall back to defaults.
    pub fn with_tuning(seed: u64, tuning_json: Option<String>) -> WasmGame {
        Self::build(seed, Tuning::from_json_or_default(tuning_json.as_deref()))
    }

    fn build(seed: u64, tuning: Tuning) -> WasmGame {
        console_error_panic_hook::set_once();
        // Ignore double init when several games are created
        let _ = console_log::init_with_level(log::Level::Info);

        let mut state = GameState::with_tuning(seed, tuning);
        state.start();
        log::info!("Rabbit Run initialized with seed: {}", seed);

        WasmGame {
            state,
            driver: Driver::new(),
            last: None,
        }
    }

    /// Restart button
    pub fn start(&mut self) {
        self.state.start();
    }

    /// Keyboard or touch jump
    pub fn request_jump(&mut self) {
        if self.state.is_running() {
            self.driver.request_jump();
        }
    }

    /// Advance by `dt_ms` of wall time. Returns the number of steps run.
    pub fn frame(&mut self, dt_ms: f64) -> u32 {
        let mut last = None;
        let steps = self
            .driver
            .frame(&mut self.state, (dt_ms / 1000.0) as f32, &mut |s: &Snapshot| {
                last = Some(s.clone())
            });
        self.last = last;
        steps
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn score(&self) -> u32 {
        self.state.score()
    }

    /// Latest snapshot as JSON for the JS renderer
    pub fn snapshot_json(&self) -> String {
        let snapshot = match &self.last {
            Some(s) => s.clone(),
            None => Snapshot::capture(&self.state),
        };
        serde_json::to_string(&snapshot).unwrap_or_else(|e| {
            log::warn!("Snapshot serialization failed: {e}");
            String::from("{}")
        })
    }
}
