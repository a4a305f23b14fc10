//! Fixed-step driver
//!
//! Converts variable frame times into whole simulation steps and hands a
//! snapshot to the render sink once per frame. The simulation itself never
//! schedules anything.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::sim::{GameState, RenderSink, Snapshot, TickInput, tick};

/// Frame-to-step adapter with one-shot input latching
#[derive(Debug, Clone, Default)]
pub struct Driver {
    accumulator: f32,
    input: TickInput,
    /// Total steps run since creation
    pub steps: u64,
}

impl Driver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch a jump for the next step (input events arrive between frames)
    pub fn request_jump(&mut self) {
        self.input.jump = true;
    }

    /// Account for `dt` seconds of wall time, run the steps that fit, then
    /// present one snapshot. Returns the number of steps run.
    pub fn frame(&mut self, state: &mut GameState, dt: f32, sink: &mut impl RenderSink) -> u32 {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            if !state.is_running() {
                // Nothing left to simulate; don't bank time for a later run
                self.accumulator = 0.0;
                break;
            }
            tick(state, &self.input);
            self.accumulator -= SIM_DT;
            substeps += 1;
            self.steps += 1;

            // Clear one-shot inputs after processing
            self.input.jump = false;
        }

        // Drop excess time after a stall instead of fast-forwarding later
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }

        sink.present(&Snapshot::capture(state));
        substeps
    }

    /// Run exactly one step and present it, ignoring wall time
    pub fn step_once(&mut self, state: &mut GameState, sink: &mut impl RenderSink) {
        if state.is_running() {
            tick(state, &self.input);
            self.input.jump = false;
            self.steps += 1;
        }
        sink.present(&Snapshot::capture(state));
    }
}
