//! Values produced by a simulation run.

use crate::ast::Instruction;
use crate::error::ErrorCode;
use crate::level::{LevelGoal, Pose};
use serde::{Deserialize, Serialize};

/// One trace entry, recorded when a run captures its log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStep {
    /// 1-based step number.
    pub index: u32,
    pub instruction: Instruction,
    /// Pose after the instruction's own effect. Control instructions do
    /// not move the robot, so they record the pose their body starts from.
    pub position: Pose,
    /// Collectibles still on the grid after this step.
    pub collectibles: u32,
}

/// Echo of the level's grading inputs, for client display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultMetadata {
    pub best_steps: u32,
    pub goal: LevelGoal,
}

/// Verdict of running one program against one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub success: bool,
    pub steps: u32,
    /// 0 to 3.
    pub stars: u8,
    /// Present exactly when `success` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
    pub remaining_collectibles: u32,
    pub final_position: Pose,
    #[serde(rename = "log", default)]
    pub trace: Vec<SimulationStep>,
    pub metadata: ResultMetadata,
}

