//! Goal evaluation and star rating.
//!
//! Both are pure functions of the terminal frame. The simulator calls
//! them at the end of every run; they are public so hosts can re-grade a
//! stored result without re-running it.

use gridquest_types::{LevelGoal, Point};

/// Whether the terminal state satisfies every clause of `goal`.
///
/// The step clause re-checks the level's own `stepLimit` even when a
/// caller override let the run go further.
pub fn goals_met(goal: &LevelGoal, position: Point, remaining: u32, steps: u32) -> bool {
    if goal.requires_clearing() && remaining > 0 {
        return false;
    }
    if goal.reach.is_some_and(|reach| reach != position) {
        return false;
    }
    if goal.step_limit.is_some_and(|limit| steps > limit) {
        return false;
    }
    true
}

/// Star rating from 0 to 3.
///
/// Failures score 0. A success that left collectibles behind is capped at
/// 1. Otherwise par or better is 3, up to two over par is 2, anything
/// slower is 1.
pub fn star_rating(success: bool, steps: u32, remaining: u32, best_steps: u32) -> u8 {
    if !success {
        return 0;
    }
    if remaining > 0 {
        return 1;
    }
    if steps <= best_steps {
        3
    } else if steps <= best_steps.saturating_add(2) {
        2
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reach_and_clear() -> LevelGoal {
        LevelGoal {
            collectibles: Some(1),
            reach: Some(Point::new(2, 1)),
            step_limit: Some(10),
        }
    }

    #[test]
    fn test_empty_goal_always_met() {
        assert!(goals_met(&LevelGoal::default(), Point::new(7, 7), 3, 999));
    }

    #[test]
    fn test_all_clauses_met() {
        assert!(goals_met(&reach_and_clear(), Point::new(2, 1), 0, 10));
    }

    #[test]
    fn test_wrong_position_fails() {
        assert!(!goals_met(&reach_and_clear(), Point::new(2, 2), 0, 5));
    }

    #[test]
    fn test_pending_collectibles_fail_only_when_required() {
        assert!(!goals_met(&reach_and_clear(), Point::new(2, 1), 1, 5));

        let reach_only = LevelGoal {
            reach: Some(Point::new(2, 1)),
            ..LevelGoal::default()
        };
        assert!(goals_met(&reach_only, Point::new(2, 1), 1, 5));
    }

    #[test]
    fn test_clear_marker_value_is_irrelevant() {
        let goal = LevelGoal {
            collectibles: Some(0),
            ..LevelGoal::default()
        };
        assert!(!goals_met(&goal, Point::new(0, 0), 1, 1));
        assert!(goals_met(&goal, Point::new(0, 0), 0, 1));
    }

    #[test]
    fn test_step_limit_rechecked() {
        assert!(!goals_met(&reach_and_clear(), Point::new(2, 1), 0, 11));
    }

    #[test]
    fn test_failure_scores_zero() {
        assert_eq!(star_rating(false, 1, 0, 5), 0);
    }

    #[test]
    fn test_star_thresholds() {
        assert_eq!(star_rating(true, 3, 0, 5), 3);
        assert_eq!(star_rating(true, 5, 0, 5), 3);
        assert_eq!(star_rating(true, 6, 0, 5), 2);
        assert_eq!(star_rating(true, 7, 0, 5), 2);
        assert_eq!(star_rating(true, 8, 0, 5), 1);
        assert_eq!(star_rating(true, 500, 0, 5), 1);
    }

    #[test]
    fn test_pending_collectibles_cap_at_one() {
        assert_eq!(star_rating(true, 1, 2, 5), 1);
    }

    #[test]
    fn test_par_near_max_does_not_overflow() {
        assert_eq!(star_rating(true, u32::MAX, 0, u32::MAX - 1), 2);
    }
}
