//! Score-driven game speed
//!
//! Speed only changes on the exact step the score lands on a milestone
//! (a positive multiple of `speed_milestone`) and otherwise holds. A score
//! that skips over a milestone in one step does not bump the speed.

use crate::tuning::Tuning;

/// Speed for a score sitting on a milestone, `None` between milestones
pub fn milestone_speed(score: u32, tuning: &Tuning) -> Option<f32> {
    if score > 0 && score.is_multiple_of(tuning.speed_milestone) {
        Some(tuning.base_speed + (score / tuning.speed_milestone) as f32)
    } else {
        None
    }
}

/// Latch the speed for this step
pub fn update_speed(current: f32, score: u32, tuning: &Tuning) -> f32 {
    match milestone_speed(score, tuning) {
        Some(speed) => {
            if speed != current {
                log::debug!("Speed {:.0} -> {:.0} at score {}", current, speed, score);
            }
            speed
        }
        None => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_speed_below_first_milestone() {
        let tuning = Tuning::default();
        let mut speed = tuning.base_speed;
        for score in 0..10 {
            speed = update_speed(speed, score, &tuning);
            assert_eq!(speed, 5.0, "score {score}");
        }
    }

    #[test]
    fn test_milestones() {
        let tuning = Tuning::default();
        assert_eq!(milestone_speed(10, &tuning), Some(6.0));
        assert_eq!(milestone_speed(20, &tuning), Some(7.0));
        assert_eq!(milestone_speed(55, &tuning), None);
        assert_eq!(milestone_speed(0, &tuning), None);
    }

    #[test]
    fn test_speed_holds_between_milestones() {
        let tuning = Tuning::default();
        let mut speed = tuning.base_speed;
        let mut last = speed;
        for score in 0..=45 {
            speed = update_speed(speed, score, &tuning);
            assert!(speed >= last);
            last = speed;
            if (20..30).contains(&score) {
                assert_eq!(speed, 7.0);
            }
        }
        assert_eq!(speed, 9.0);
    }

    #[test]
    fn test_skipped_milestone_holds() {
        let tuning = Tuning::default();
        let speed = update_speed(5.0, 9, &tuning);
        assert_eq!(update_speed(speed, 11, &tuning), 5.0);
    }
}
