//! Rabbit Run entry point
//!
//! Native: runs a headless demo with the autopilot and logs the result.
//! Web: the `wasm` module's `WasmGame` is the entry point; JS owns the loop.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rabbit_run::consts::SIM_DT;
    use rabbit_run::renderer::frame_vertices;
    use rabbit_run::{Driver, GameState, Snapshot, Tuning, autopilot};

    /// Stop the demo even if the autopilot never dies
    const MAX_STEPS: u64 = 60 * 60 * 5;

    env_logger::init();
    log::info!("Rabbit Run (native) starting...");

    let tuning = match std::env::var(Tuning::ENV_VAR) {
        Ok(path) => Tuning::load(&path).unwrap_or_else(|e| {
            log::error!("{e}; using default tuning");
            Tuning::default()
        }),
        Err(_) => Tuning::default(),
    };

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(rand::random);
    log::info!("Game initialized with seed: {}", seed);

    let mut state = GameState::with_tuning(seed, tuning);
    state.start();

    let mut driver = Driver::new();
    let mut vertex_count = 0;
    let mut sink = |s: &Snapshot| vertex_count = frame_vertices(s).len();

    while state.is_running() && driver.steps < MAX_STEPS {
        if autopilot::should_jump(&state) {
            driver.request_jump();
        }
        driver.frame(&mut state, SIM_DT, &mut sink);
    }

    log::info!(
        "Run finished after {} steps: score {}, speed {}, last frame {} vertices",
        state.time_ticks,
        state.score(),
        state.game_speed,
        vertex_count
    );
    println!("Final score: {}", state.score());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is WasmGame, this is just to satisfy the compiler
}
