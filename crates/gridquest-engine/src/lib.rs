//! GridQuest execution engine.
//!
//! Runs a learner's instruction tree against a [`LevelDefinition`] and
//! reports the verdict: final pose, collected items, success, star rating
//! and a structured [`ErrorCode`]. Also hosts the hint heuristic that
//! turns the same error vocabulary into learner-facing advice.
//!
//! The engine is pure: no I/O, no shared state between runs. A
//! [`LevelSimulator`] only borrows its level, so one level may be
//! simulated from many threads at once.
//!
//! ```
//! use gridquest_engine::{LevelSimulator, SimulationOptions};
//! use gridquest_types::{Direction, Instruction, LevelDefinition, LevelGoal, Point, Pose, Tile};
//!
//! let level = LevelDefinition {
//!     id: "demo".into(),
//!     name: "Demo".into(),
//!     width: 2,
//!     height: 1,
//!     tiles: vec![Tile::floor(0, 0), Tile::floor(1, 0)],
//!     start: Pose::new(0, 0, Direction::East),
//!     goal: LevelGoal { reach: Some(Point::new(1, 0)), ..LevelGoal::default() },
//!     best_steps: 1,
//!     hints: vec![],
//!     allowed_blocks: None,
//! };
//!
//! let result = LevelSimulator::new(&level).run(&[Instruction::Move], &SimulationOptions::new());
//! assert!(result.success);
//! assert_eq!(result.stars, 3);
//! ```
//!
//! [`LevelDefinition`]: gridquest_types::LevelDefinition
//! [`ErrorCode`]: gridquest_types::ErrorCode

pub mod hint;
pub mod inspect;
mod options;
pub mod scoring;
mod simulator;

pub use hint::{compute_hint, HintRequest};
pub use inspect::{disallowed_blocks, instruction_count, nesting_depth};
pub use options::{SimulationOptions, DEFAULT_STEP_LIMIT, MAX_NESTING_DEPTH};
pub use scoring::{goals_met, star_rating};
pub use simulator::LevelSimulator;
