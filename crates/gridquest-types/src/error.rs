use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Why a run did not succeed.
///
/// This is a closed vocabulary shared by the simulator and the hint
/// generator. It is reported as data inside a result, never raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// A move targeted an out-of-bounds or non-walkable tile.
    #[serde(rename = "E_COLLIDE")]
    Collide,
    /// The step budget ran out before the program finished.
    #[serde(rename = "E_STEP_LIMIT")]
    StepLimit,
    /// Control instructions were nested deeper than the engine allows.
    #[serde(rename = "E_LOOP_DEPTH")]
    LoopDepth,
    /// The program finished cleanly but the victory condition was not met.
    #[serde(rename = "E_GOAL_NOT_MET")]
    GoalNotMet,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 4] = [
        Self::Collide,
        Self::StepLimit,
        Self::LoopDepth,
        Self::GoalNotMet,
    ];

    /// Wire name, e.g. `E_COLLIDE`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Collide => "E_COLLIDE",
            Self::StepLimit => "E_STEP_LIMIT",
            Self::LoopDepth => "E_LOOP_DEPTH",
            Self::GoalNotMet => "E_GOAL_NOT_MET",
        }
    }

    /// Short English description for logs and tooling.
    pub fn description(self) -> &'static str {
        match self {
            Self::Collide => "move blocked by an obstacle or the grid edge",
            Self::StepLimit => "step budget exhausted",
            Self::LoopDepth => "control blocks nested too deeply",
            Self::GoalNotMet => "program finished without meeting the goal",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string that is not one of the four run error codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown error code '{0}'")]
pub struct UnknownErrorCode(pub String);

impl FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnknownErrorCode(s.to_string()))
    }
}

/// A level that breaks a structural invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: u32, height: u32 },

    #[error("bestSteps must be positive")]
    ZeroBestSteps,

    #[error("tile ({x}, {y}) lies outside the grid")]
    TileOutOfBounds { x: i32, y: i32 },

    #[error("tile ({x}, {y}) is defined more than once")]
    DuplicateTile { x: i32, y: i32 },

    #[error("start ({x}, {y}) is not a walkable tile")]
    StartNotWalkable { x: i32, y: i32 },

    #[error("goal point ({x}, {y}) lies outside the grid")]
    ReachOutOfBounds { x: i32, y: i32 },
}
