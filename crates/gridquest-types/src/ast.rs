//! Instruction tree for GridQuest programs.
//!
//! A program is an ordered list of [`Instruction`]s. Control instructions
//! (`Repeat`, `Conditional`) own their child lists outright, so a program
//! is always a finite tree with no shared or back references.
//!
//! The wire form is an internally tagged JSON object:
//!
//! ```json
//! [
//!   { "type": "move" },
//!   { "type": "turn", "direction": "right" },
//!   { "type": "repeat", "times": 3, "body": [{ "type": "collect" }] },
//!   {
//!     "type": "conditional",
//!     "condition": { "type": "tile-ahead-walkable" },
//!     "truthy": [{ "type": "move" }]
//!   }
//! ]
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// ══════════════════════════════════════════════════════════════════════════════
// Instructions
// ══════════════════════════════════════════════════════════════════════════════

/// One node of a learner's program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Instruction {
    /// Step one tile forward in the facing direction.
    Move,
    /// Rotate 90° in place.
    Turn { direction: TurnDirection },
    /// Pick up the collectible on the current tile, if any.
    Collect,
    /// Run `body` `times` times in sequence.
    Repeat { times: u32, body: Vec<Instruction> },
    /// Run `truthy` when `condition` holds, `falsy` otherwise.
    Conditional {
        condition: Condition,
        truthy: Vec<Instruction>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        falsy: Vec<Instruction>,
    },
}

impl Instruction {
    /// Shorthand for `Turn { direction: Left }`.
    pub fn turn_left() -> Self {
        Self::Turn {
            direction: TurnDirection::Left,
        }
    }

    /// Shorthand for `Turn { direction: Right }`.
    pub fn turn_right() -> Self {
        Self::Turn {
            direction: TurnDirection::Right,
        }
    }

    /// Build a `Repeat` node.
    pub fn repeat(times: u32, body: Vec<Instruction>) -> Self {
        Self::Repeat { times, body }
    }

    /// Build a `Conditional` node.
    pub fn conditional(
        condition: Condition,
        truthy: Vec<Instruction>,
        falsy: Vec<Instruction>,
    ) -> Self {
        Self::Conditional {
            condition,
            truthy,
            falsy,
        }
    }

    /// Visit `program` in depth-first pre-order.
    ///
    /// Both branches of a `Conditional` are visited, `truthy` first.
    pub fn walk<'a>(program: &'a [Instruction], visit: &mut impl FnMut(&'a Instruction)) {
        for instruction in program {
            visit(instruction);
            match instruction {
                Self::Repeat { body, .. } => Self::walk(body, visit),
                Self::Conditional { truthy, falsy, .. } => {
                    Self::walk(truthy, visit);
                    Self::walk(falsy, visit);
                }
                Self::Move | Self::Turn { .. } | Self::Collect => {}
            }
        }
    }
}

/// Rotation sense of a `Turn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnDirection {
    Left,
    Right,
}

/// Read-only predicates a `Conditional` may test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Condition {
    /// The tile directly ahead is inside the grid and walkable.
    TileAheadWalkable,
    /// At least one collectible has not been picked up yet.
    CollectiblesRemaining,
}

// ══════════════════════════════════════════════════════════════════════════════
// Palette blocks
// ══════════════════════════════════════════════════════════════════════════════

/// Editor palette block, as listed in a level's `allowedBlocks`.
///
/// Turning left and right are separate blocks in the palette even though
/// they share one instruction variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockKind {
    Move,
    TurnLeft,
    TurnRight,
    Collect,
    Repeat,
    If,
}

impl BlockKind {
    /// The palette block an instruction was built from.
    pub fn of(instruction: &Instruction) -> Self {
        match instruction {
            Instruction::Move => Self::Move,
            Instruction::Turn {
                direction: TurnDirection::Left,
            } => Self::TurnLeft,
            Instruction::Turn {
                direction: TurnDirection::Right,
            } => Self::TurnRight,
            Instruction::Collect => Self::Collect,
            Instruction::Repeat { .. } => Self::Repeat,
            Instruction::Conditional { .. } => Self::If,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Move => "MOVE",
            Self::TurnLeft => "TURN_LEFT",
            Self::TurnRight => "TURN_RIGHT",
            Self::Collect => "COLLECT",
            Self::Repeat => "REPEAT",
            Self::If => "IF",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
