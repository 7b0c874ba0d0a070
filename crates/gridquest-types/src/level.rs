//! Level model: grid, start pose, victory condition, par and hints.

use crate::ast::{BlockKind, TurnDirection};
use crate::error::LevelError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Compass heading of the robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Clockwise order, starting from north.
    pub const CLOCKWISE: [Direction; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Grid offset of one step in this direction. `y` grows southward.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }

    /// Heading after a 90° turn.
    pub fn rotate(self, turn: TurnDirection) -> Self {
        let index = Self::CLOCKWISE
            .iter()
            .position(|d| *d == self)
            .unwrap_or_default();
        let next = match turn {
            TurnDirection::Right => (index + 1) % 4,
            TurnDirection::Left => (index + 3) % 4,
        };
        Self::CLOCKWISE[next]
    }
}

/// A grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Position plus heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pose {
    pub x: i32,
    pub y: i32,
    pub facing: Direction,
}

impl Pose {
    pub fn new(x: i32, y: i32, facing: Direction) -> Self {
        Self { x, y, facing }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The cell one step ahead. May lie outside the grid.
    pub fn ahead(&self) -> Point {
        let (dx, dy) = self.facing.delta();
        Point::new(self.x + dx, self.y + dy)
    }
}

/// One grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
    pub walkable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collectible: Option<String>,
}

impl Tile {
    pub fn floor(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            walkable: true,
            collectible: None,
        }
    }

    pub fn wall(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            walkable: false,
            collectible: None,
        }
    }

    pub fn with_collectible(mut self, id: impl Into<String>) -> Self {
        self.collectible = Some(id.into());
        self
    }

    /// The collectible identifier, treating an empty id as no collectible.
    pub fn collectible_id(&self) -> Option<&str> {
        self.collectible.as_deref().filter(|id| !id.is_empty())
    }
}

/// Victory condition. Every present clause must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelGoal {
    /// Presence means every collectible must be picked up. The count
    /// itself is informational for level editors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collectibles: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reach: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_limit: Option<u32>,
}

impl LevelGoal {
    pub fn requires_clearing(&self) -> bool {
        self.collectibles.is_some()
    }
}

/// A puzzle level as authored in the level editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelDefinition {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub tiles: Vec<Tile>,
    pub start: Pose,
    #[serde(default)]
    pub goal: LevelGoal,
    /// Par step count used for the star rating.
    pub best_steps: u32,
    #[serde(default)]
    pub hints: Vec<String>,
    /// Palette restriction for the block editor. `None` allows every block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_blocks: Option<Vec<BlockKind>>,
}

impl LevelDefinition {
    /// Whether `(x, y)` lies inside the grid.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as i64) < self.width as i64 && (y as i64) < self.height as i64
    }

    /// Number of tiles carrying a collectible.
    pub fn collectible_count(&self) -> u32 {
        self.tiles
            .iter()
            .filter(|tile| tile.collectible_id().is_some())
            .count() as u32
    }

    /// Check the structural invariants a level must satisfy before it is
    /// handed to the engine. Reports the first violation found.
    pub fn validate(&self) -> crate::Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(LevelError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        if self.best_steps == 0 {
            return Err(LevelError::ZeroBestSteps);
        }

        let mut seen = BTreeSet::new();
        for tile in &self.tiles {
            if !self.contains(tile.x, tile.y) {
                return Err(LevelError::TileOutOfBounds {
                    x: tile.x,
                    y: tile.y,
                });
            }
            if !seen.insert((tile.x, tile.y)) {
                return Err(LevelError::DuplicateTile {
                    x: tile.x,
                    y: tile.y,
                });
            }
        }

        let start = self.start.point();
        match self
            .tiles
            .iter()
            .find(|tile| tile.x == start.x && tile.y == start.y)
        {
            Some(tile) if tile.walkable => {}
            _ => {
                return Err(LevelError::StartNotWalkable {
                    x: start.x,
                    y: start.y,
                })
            }
        }

        if let Some(reach) = self.goal.reach {
            if !self.contains(reach.x, reach.y) {
                return Err(LevelError::ReachOutOfBounds {
                    x: reach.x,
                    y: reach.y,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip() -> LevelDefinition {
        LevelDefinition {
            id: "strip".into(),
            name: "Strip".into(),
            width: 3,
            height: 1,
            tiles: vec![
                Tile::floor(0, 0),
                Tile::floor(1, 0),
                Tile::floor(2, 0).with_collectible("gem"),
            ],
            start: Pose::new(0, 0, Direction::East),
            goal: LevelGoal::default(),
            best_steps: 2,
            hints: vec![],
            allowed_blocks: None,
        }
    }

    #[test]
    fn test_rotation_cycle() {
        assert_eq!(Direction::North.rotate(TurnDirection::Right), Direction::East);
        assert_eq!(Direction::West.rotate(TurnDirection::Right), Direction::North);
        assert_eq!(Direction::North.rotate(TurnDirection::Left), Direction::West);
        assert_eq!(Direction::East.rotate(TurnDirection::Left), Direction::North);
        for d in Direction::CLOCKWISE {
            assert_eq!(d.rotate(TurnDirection::Left).rotate(TurnDirection::Right), d);
        }
    }

    #[test]
    fn test_pose_ahead() {
        assert_eq!(Pose::new(1, 1, Direction::North).ahead(), Point::new(1, 0));
        assert_eq!(Pose::new(1, 1, Direction::South).ahead(), Point::new(1, 2));
        assert_eq!(Pose::new(1, 1, Direction::East).ahead(), Point::new(2, 1));
        assert_eq!(Pose::new(0, 0, Direction::West).ahead(), Point::new(-1, 0));
    }

    #[test]
    fn test_collectible_count_ignores_empty_ids() {
        let mut level = strip();
        level.tiles[1].collectible = Some(String::new());
        assert_eq!(level.collectible_count(), 1);
    }

    #[test]
    fn test_valid_level() {
        assert!(strip().validate().is_ok());
    }

    #[test]
    fn test_empty_grid_rejected() {
        let mut level = strip();
        level.height = 0;
        assert_eq!(
            level.validate(),
            Err(LevelError::EmptyGrid {
                width: 3,
                height: 0
            })
        );
    }

    #[test]
    fn test_zero_par_rejected() {
        let mut level = strip();
        level.best_steps = 0;
        assert_eq!(level.validate(), Err(LevelError::ZeroBestSteps));
    }

    #[test]
    fn test_tile_out_of_bounds_rejected() {
        let mut level = strip();
        level.tiles.push(Tile::floor(3, 0));
        assert_eq!(
            level.validate(),
            Err(LevelError::TileOutOfBounds { x: 3, y: 0 })
        );
    }

    #[test]
    fn test_duplicate_tile_rejected() {
        let mut level = strip();
        level.tiles.push(Tile::wall(1, 0));
        assert_eq!(
            level.validate(),
            Err(LevelError::DuplicateTile { x: 1, y: 0 })
        );
    }

    #[test]
    fn test_start_must_be_walkable() {
        let mut level = strip();
        level.tiles[0] = Tile::wall(0, 0);
        assert_eq!(
            level.validate(),
            Err(LevelError::StartNotWalkable { x: 0, y: 0 })
        );

        let mut missing = strip();
        missing.tiles.remove(0);
        assert_eq!(
            missing.validate(),
            Err(LevelError::StartNotWalkable { x: 0, y: 0 })
        );
    }

    #[test]
    fn test_reach_out_of_bounds_rejected() {
        let mut level = strip();
        level.goal.reach = Some(Point::new(0, 5));
        assert_eq!(
            level.validate(),
            Err(LevelError::ReachOutOfBounds { x: 0, y: 5 })
        );
    }

    #[test]
    fn test_level_json_uses_camel_case() {
        let json = r#"{
            "id": "sample-1",
            "name": "Demo",
            "width": 3,
            "height": 3,
            "tiles": [
                { "x": 0, "y": 0, "walkable": true },
                { "x": 2, "y": 1, "walkable": true, "collectible": "gem" }
            ],
            "start": { "x": 0, "y": 0, "facing": "east" },
            "goal": { "reach": { "x": 2, "y": 1 }, "collectibles": 0, "stepLimit": 10 },
            "bestSteps": 5,
            "hints": ["a", "b"],
            "allowedBlocks": ["MOVE", "TURN_RIGHT"]
        }"#;
        let level: LevelDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(level.best_steps, 5);
        assert_eq!(level.goal.step_limit, Some(10));
        assert!(level.goal.requires_clearing());
        assert_eq!(level.goal.reach, Some(Point::new(2, 1)));
        assert_eq!(level.start.facing, Direction::East);
        assert_eq!(level.tiles[1].collectible_id(), Some("gem"));
        assert_eq!(
            level.allowed_blocks,
            Some(vec![BlockKind::Move, BlockKind::TurnRight])
        );
    }
}
