//! Property tests over seeds and tunings

use glam::Vec2;
use proptest::prelude::*;

use rabbit_run::autopilot;
use rabbit_run::sim::difficulty::update_speed;
use rabbit_run::sim::obstacles;
use rabbit_run::sim::physics::integrate;
use rabbit_run::sim::{GamePhase, GameState, Obstacle, Player};
use rabbit_run::Tuning;

fn started(seed: u64, spawn_chance: f64) -> GameState {
    let mut state = GameState::new(seed);
    state.tuning.spawn_chance = spawn_chance;
    state.start();
    state
}

proptest! {
    #[test]
    fn jump_rises_then_falls_back_to_rest(gravity in 0.1f32..2.0, jump_power in 1.0f32..30.0) {
        let tuning = Tuning { gravity, jump_power, ..Tuning::default() };
        let resting = tuning.resting_y();
        let mut player = Player::new(&tuning);
        prop_assert!(player.jump(jump_power));

        let mut ys = vec![player.pos.y];
        for _ in 0..2000 {
            integrate(&mut player, gravity, resting);
            ys.push(player.pos.y);
            if !player.jumping {
                break;
            }
        }
        prop_assert!(!player.jumping);
        prop_assert_eq!(player.pos.y, resting);

        for y in &ys {
            prop_assert!(*y <= resting);
        }

        // Strictly up, at most one flat apex step, then strictly down
        let diffs: Vec<f32> = ys.windows(2).map(|w| w[1] - w[0]).collect();
        let rise = diffs.iter().take_while(|d| **d < 0.0).count();
        let mut fall = &diffs[rise..];
        if fall.first() == Some(&0.0) {
            fall = &fall[1..];
        }
        prop_assert!(rise > 0);
        prop_assert!(!fall.is_empty());
        prop_assert!(fall.iter().all(|d| *d > 0.0));
    }

    #[test]
    fn spawned_obstacles_never_overlap_or_linger(seed in any::<u64>(), spawn_chance in 0.0f64..1.0, steps in 1usize..3000) {
        let mut state = started(seed, spawn_chance);
        for _ in 0..steps {
            obstacles::update(&mut state);

            prop_assert!(state.spawn.consecutive <= state.tuning.max_consecutive);
            for o in &state.obstacles {
                prop_assert!(o.pos.x + o.size.x > 0.0, "off-field obstacle survived a step");
            }
            for pair in state.obstacles.windows(2) {
                prop_assert!(
                    pair[1].pos.x >= pair[0].pos.x + pair[0].size.x,
                    "obstacles overlap: {:?} / {:?}", pair[0].pos, pair[1].pos
                );
            }
        }
    }

    #[test]
    fn spacing_holds_across_tunings(
        seed in any::<u64>(),
        obstacle_width in 5.0f32..60.0,
        extra_gap in 0.0f32..80.0,
        base_speed in 0.5f32..20.0,
        max_consecutive in 1u32..6,
        steps in 1usize..2000,
    ) {
        let tuning = Tuning {
            obstacle_width,
            min_gap: obstacle_width + extra_gap,
            base_speed,
            max_consecutive,
            spawn_chance: 1.0,
            gap_chance: 0.5,
            ..Tuning::default()
        };
        prop_assert!(tuning.validate().is_ok());

        let mut state = GameState::with_tuning(seed, tuning);
        state.start();
        for _ in 0..steps {
            obstacles::update(&mut state);
            for pair in state.obstacles.windows(2) {
                prop_assert!(
                    pair[1].pos.x >= pair[0].pos.x + pair[0].size.x,
                    "obstacles overlap: {:?} / {:?}", pair[0].pos, pair[1].pos
                );
            }
        }
    }

    #[test]
    fn score_counts_each_pass_once(seed in any::<u64>(), steps in 1usize..3000) {
        let mut state = started(seed, 0.05);
        let mut total = 0;
        for _ in 0..steps {
            let score_before = state.score();
            let points = obstacles::update(&mut state);
            total += points;

            prop_assert_eq!(state.score(), score_before + points);
            let passed_now = state.obstacles.iter().filter(|o| o.passed).count();
            prop_assert!(passed_now as u32 <= state.score());
        }
        prop_assert_eq!(state.score(), total);
    }

    #[test]
    fn autopilot_runs_are_monotonic(seed in any::<u64>()) {
        let mut state = started(seed, 0.02);
        let mut last_score = 0;
        let mut last_speed = state.game_speed;
        for _ in 0..5000 {
            if autopilot::should_jump(&state) {
                state.request_jump();
            }
            state.step();
            prop_assert!(state.score() >= last_score);
            prop_assert!(state.game_speed >= last_speed);
            prop_assert!(state.player.pos.y <= state.resting_y());
            last_score = state.score();
            last_speed = state.game_speed;
            if !state.is_running() {
                break;
            }
        }
    }

    #[test]
    fn speed_never_decreases(mut scores in prop::collection::vec(0u32..500, 1..200)) {
        scores.sort_unstable();
        let tuning = Tuning::default();
        let mut speed = tuning.base_speed;
        for score in scores {
            let next = update_speed(speed, score, &tuning);
            prop_assert!(next >= speed);
            if score < 10 {
                prop_assert_eq!(next, 5.0);
            }
            speed = next;
        }
    }

    #[test]
    fn player_inside_obstacle_ends_run(inset_x in 0.0f32..20.0, inset_y in 0.0f32..20.0) {
        let mut state = started(1, 0.0);
        let player = state.player.rect();
        // Big enough to still enclose the rabbit after scrolling one step
        let pos = Vec2::new(player.left() - inset_x, player.top() - inset_y);
        let size = Vec2::new(player.size.x + inset_x + 40.0, player.size.y + inset_y);
        state.obstacles.push(Obstacle { pos, size, passed: false });

        let report = state.step();
        prop_assert!(report.game_over);
        prop_assert_eq!(state.phase, GamePhase::GameOver);
        prop_assert_eq!(state.score(), 0);
    }

    #[test]
    fn clear_obstacle_never_ends_run(x in 100.0f32..780.0, height in 1.0f32..200.0) {
        let mut state = started(1, 0.0);
        state.insert_obstacle(x, height);
        state.step();
        prop_assert!(state.is_running());
    }
}

#[test]
fn restart_after_game_over_is_fresh() {
    let mut state = started(77, 0.0);
    state.insert_obstacle(60.0, 30.0);
    state.step();
    assert_eq!(state.phase, GamePhase::GameOver);
    assert_eq!(state.score(), 0);

    state.start();
    assert!(state.is_running());
    assert!(state.obstacles.is_empty());
    assert_eq!(state.spawn.consecutive, 0);
    assert_eq!(state.spawn.last_obstacle_x, 0.0);
    assert_eq!(state.score(), 0);
}

#[test]
fn forty_steps_after_jump_lands_with_zero_score() {
    let mut state = GameState::new(2024);
    state.start();
    state.request_jump();
    for _ in 0..40 {
        state.step();
    }
    assert!(state.is_running());
    assert!(!state.player.jumping);
    assert_eq!(state.player.pos.y, state.resting_y());
    assert_eq!(state.score(), 0);
}
