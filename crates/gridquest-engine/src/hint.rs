//! Hint heuristic.
//!
//! Picks one learner-facing hint from the attempt count, the last run's
//! error code and the level's canned hints. Stateless: the caller keeps
//! the attempt counter between retries.

use gridquest_types::{ErrorCode, LevelDefinition};
use serde::{Deserialize, Serialize};

/// Shown after a collision, whatever the level.
pub const OBSTACLE_HINT: &str = "哎呀，前面有障碍！换个方向试试？";
/// Shown after the step budget ran out.
pub const USE_REPEAT_HINT: &str = "步骤太多了，试试用“重复”积木吧！";
/// Before the first attempt, on a level without hints.
pub const FIRST_RUN_FALLBACK: &str = "尝试运行你的方案。";
/// Later attempts, on a level without hints.
pub const BLOCK_ORDER_FALLBACK: &str = "检查一下积木的顺序。";

/// Attempt count from which the third canned hint is always offered.
const ESCALATION_ATTEMPTS: u32 = 3;

/// What the caller knows about the learner's progress on a level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HintRequest {
    #[serde(default)]
    pub attempts: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error: Option<ErrorCode>,
}

impl HintRequest {
    pub fn new(attempts: u32, last_error: Option<ErrorCode>) -> Self {
        Self {
            attempts,
            last_error,
        }
    }
}

/// Choose a hint for `level`.
///
/// Rules, first match wins:
/// 1. no attempts yet: the first canned hint
/// 2. last run collided: [`OBSTACLE_HINT`]
/// 3. last run hit the step limit: [`USE_REPEAT_HINT`]
/// 4. three or more attempts and a non-empty third hint: that hint
/// 5. the canned hint at `min(attempts, len - 1)`
pub fn compute_hint(level: &LevelDefinition, request: &HintRequest) -> String {
    let hints = &level.hints;

    if request.attempts == 0 {
        return hints
            .first()
            .map_or(FIRST_RUN_FALLBACK, String::as_str)
            .to_string();
    }

    match request.last_error {
        Some(ErrorCode::Collide) => return OBSTACLE_HINT.to_string(),
        Some(ErrorCode::StepLimit) => return USE_REPEAT_HINT.to_string(),
        Some(ErrorCode::LoopDepth | ErrorCode::GoalNotMet) | None => {}
    }

    if request.attempts >= ESCALATION_ATTEMPTS {
        if let Some(strongest) = hints.get(2).filter(|hint| !hint.is_empty()) {
            return strongest.clone();
        }
    }

    let Some(last) = hints.len().checked_sub(1) else {
        return BLOCK_ORDER_FALLBACK.to_string();
    };
    let index = (request.attempts as usize).min(last);
    hints[index].clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridquest_types::{Direction, LevelGoal, Pose, Tile};

    fn level_with_hints(hints: &[&str]) -> LevelDefinition {
        LevelDefinition {
            id: "hints".into(),
            name: "Hints".into(),
            width: 1,
            height: 1,
            tiles: vec![Tile::floor(0, 0)],
            start: Pose::new(0, 0, Direction::North),
            goal: LevelGoal::default(),
            best_steps: 1,
            hints: hints.iter().map(|h| h.to_string()).collect(),
            allowed_blocks: None,
        }
    }

    #[test]
    fn test_first_attempt_ignores_last_error() {
        let level = level_with_hints(&["go", "grab"]);
        let hint = compute_hint(&level, &HintRequest::new(0, Some(ErrorCode::Collide)));
        assert_eq!(hint, "go");
    }

    #[test]
    fn test_fallbacks_without_hints() {
        let level = level_with_hints(&[]);
        assert_eq!(
            compute_hint(&level, &HintRequest::new(0, None)),
            FIRST_RUN_FALLBACK
        );
        assert_eq!(
            compute_hint(&level, &HintRequest::new(4, None)),
            BLOCK_ORDER_FALLBACK
        );
    }

    #[test]
    fn test_step_limit_suggests_repeat() {
        let level = level_with_hints(&["a", "b", "c"]);
        assert_eq!(
            compute_hint(&level, &HintRequest::new(5, Some(ErrorCode::StepLimit))),
            USE_REPEAT_HINT
        );
    }

    #[test]
    fn test_index_clamps_to_last_hint() {
        let level = level_with_hints(&["a", "b"]);
        assert_eq!(compute_hint(&level, &HintRequest::new(1, None)), "b");
        assert_eq!(compute_hint(&level, &HintRequest::new(9, None)), "b");
    }

    #[test]
    fn test_empty_third_hint_is_not_escalated() {
        let level = level_with_hints(&["a", "b", "", "d"]);
        assert_eq!(compute_hint(&level, &HintRequest::new(3, None)), "d");
    }

    #[test]
    fn test_goal_errors_fall_through_to_canned_hints() {
        let level = level_with_hints(&["a", "b", "c"]);
        assert_eq!(
            compute_hint(&level, &HintRequest::new(1, Some(ErrorCode::GoalNotMet))),
            "b"
        );
        assert_eq!(
            compute_hint(&level, &HintRequest::new(2, Some(ErrorCode::LoopDepth))),
            "c"
        );
    }

    #[test]
    fn test_request_json() {
        let request: HintRequest =
            serde_json::from_str(r#"{ "attempts": 2, "lastError": "E_COLLIDE" }"#).unwrap();
        assert_eq!(request, HintRequest::new(2, Some(ErrorCode::Collide)));

        let request: HintRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, HintRequest::default());
    }
}
