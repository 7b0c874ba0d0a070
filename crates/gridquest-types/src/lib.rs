//! Shared types for GridQuest.
//!
//! This crate defines the level model, the instruction tree a learner
//! assembles, the closed run-outcome error vocabulary, and the result
//! values returned by the engine. Everything here is plain data with
//! serde support so hosts can exchange it as JSON.

pub mod ast;
mod error;
mod level;
mod result;

pub use ast::{BlockKind, Condition, Instruction, TurnDirection};
pub use error::{ErrorCode, LevelError, UnknownErrorCode};
pub use level::{Direction, LevelDefinition, LevelGoal, Point, Pose, Tile};
pub use result::{ResultMetadata, SimulationResult, SimulationStep};

/// Result type used for level-contract checks.
pub type Result<T> = std::result::Result<T, LevelError>;
