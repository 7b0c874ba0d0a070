//! Per-run configuration.

use gridquest_types::LevelGoal;
use serde::{Deserialize, Serialize};

/// Step budget used when neither the caller nor the level sets one.
pub const DEFAULT_STEP_LIMIT: u32 = 200;

/// Deepest allowed structural nesting of `Repeat`/`Conditional` blocks.
///
/// This caps nesting, not iteration count: a flat `Repeat` with a huge
/// `times` is bounded by the step budget alone. See
/// [`nesting_depth`](crate::nesting_depth).
pub const MAX_NESTING_DEPTH: usize = 10;

/// Options for a single [`LevelSimulator::run`](crate::LevelSimulator::run).
///
/// Deserializes from camelCase JSON; absent fields take their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationOptions {
    /// Overrides the level's own `goal.stepLimit` as the execution budget.
    pub step_limit: Option<u32>,
    /// Record a [`SimulationStep`](gridquest_types::SimulationStep) per
    /// executed instruction.
    pub capture_log: bool,
}

impl SimulationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_step_limit(mut self, limit: u32) -> Self {
        self.step_limit = Some(limit);
        self
    }

    pub fn with_capture_log(mut self, capture: bool) -> Self {
        self.capture_log = capture;
        self
    }

    /// Budget in effect: explicit override, then the level's limit, then
    /// [`DEFAULT_STEP_LIMIT`].
    pub fn effective_step_limit(&self, goal: &LevelGoal) -> u32 {
        self.step_limit
            .or(goal.step_limit)
            .unwrap_or(DEFAULT_STEP_LIMIT)
    }
}
