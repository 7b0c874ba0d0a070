//! Tree-walking simulator for block programs.

use crate::inspect::nesting_depth;
use crate::options::{SimulationOptions, MAX_NESTING_DEPTH};
use crate::scoring::{goals_met, star_rating};
use gridquest_types::{
    Condition, ErrorCode, Instruction, LevelDefinition, Point, Pose, ResultMetadata,
    SimulationResult, SimulationStep, Tile,
};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, trace};

/// Outcome of walking an instruction list. `Err` aborts the whole run.
type ExecResult = Result<(), ErrorCode>;

/// A collectible that has already been picked up during this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct CollectedKey<'a> {
    x: i32,
    y: i32,
    id: &'a str,
}

/// Mutable execution state for one run.
struct Frame<'a> {
    pose: Pose,
    steps: u32,
    step_limit: u32,
    remaining: u32,
    collected: BTreeSet<CollectedKey<'a>>,
    /// `None` when the caller did not ask for a log.
    trace: Option<Vec<SimulationStep>>,
}

impl Frame<'_> {
    /// Consume one step of budget.
    fn tick(&mut self) -> ExecResult {
        if self.steps >= self.step_limit {
            trace!(steps = self.steps, "step budget exhausted");
            return Err(ErrorCode::StepLimit);
        }
        self.steps += 1;
        Ok(())
    }

    fn record(&mut self, instruction: &Instruction) {
        if let Some(trace) = self.trace.as_mut() {
            trace.push(SimulationStep {
                index: self.steps,
                instruction: instruction.clone(),
                position: self.pose,
                collectibles: self.remaining,
            });
        }
    }
}

/// Runs programs against one level.
///
/// The tile index is built once in [`LevelSimulator::new`]; every call to
/// [`run`](Self::run) starts from a fresh frame, so a simulator can be
/// reused and shared across threads.
#[derive(Debug, Clone)]
pub struct LevelSimulator<'a> {
    level: &'a LevelDefinition,
    /// First tile defined at each coordinate.
    cells: BTreeMap<Point, &'a Tile>,
    collectible_total: u32,
}

impl<'a> LevelSimulator<'a> {
    pub fn new(level: &'a LevelDefinition) -> Self {
        let mut cells = BTreeMap::new();
        for tile in &level.tiles {
            cells.entry(Point::new(tile.x, tile.y)).or_insert(tile);
        }
        Self {
            level,
            cells,
            collectible_total: level.collectible_count(),
        }
    }

    /// Execute `program` and grade the terminal state.
    ///
    /// Execution errors are reported in the result, never returned as
    /// `Err`: the first one aborts the walk and skips the goal check. A
    /// program nested deeper than [`MAX_NESTING_DEPTH`] is rejected before
    /// any step is taken.
    pub fn run(&self, program: &[Instruction], options: &SimulationOptions) -> SimulationResult {
        let mut frame = Frame {
            pose: self.level.start,
            steps: 0,
            step_limit: options.effective_step_limit(&self.level.goal),
            remaining: self.collectible_total,
            collected: BTreeSet::new(),
            trace: options.capture_log.then(Vec::new),
        };

        let walk = match nesting_depth(program) {
            depth if depth > MAX_NESTING_DEPTH => {
                trace!(depth, "nesting depth exceeded");
                Err(ErrorCode::LoopDepth)
            }
            _ => self.execute(program, &mut frame),
        };
        let error_code = match walk {
            Err(code) => Some(code),
            Ok(()) => {
                let met = goals_met(
                    &self.level.goal,
                    frame.pose.point(),
                    frame.remaining,
                    frame.steps,
                );
                (!met).then_some(ErrorCode::GoalNotMet)
            }
        };
        let success = error_code.is_none();
        let stars = star_rating(success, frame.steps, frame.remaining, self.level.best_steps);

        debug!(
            level = %self.level.id,
            success,
            steps = frame.steps,
            stars,
            remaining = frame.remaining,
            error = ?error_code,
            "simulation finished"
        );

        SimulationResult {
            success,
            steps: frame.steps,
            stars,
            error_code,
            remaining_collectibles: frame.remaining,
            final_position: frame.pose,
            trace: frame.trace.unwrap_or_default(),
            metadata: ResultMetadata {
                best_steps: self.level.best_steps,
                goal: self.level.goal.clone(),
            },
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Instruction walk
    // ══════════════════════════════════════════════════════════════════════

    /// Walk `instructions` depth-first. Every instruction, control blocks
    /// included, costs one step before its children run.
    fn execute(&self, instructions: &[Instruction], frame: &mut Frame<'a>) -> ExecResult {
        for instruction in instructions {
            frame.tick()?;

            match instruction {
                Instruction::Move => {
                    let next = frame.pose.ahead();
                    let open = self.is_walkable(next);
                    if open {
                        frame.pose.x = next.x;
                        frame.pose.y = next.y;
                    }
                    frame.record(instruction);
                    if !open {
                        trace!(x = next.x, y = next.y, "move blocked");
                        return Err(ErrorCode::Collide);
                    }
                }
                Instruction::Turn { direction } => {
                    frame.pose.facing = frame.pose.facing.rotate(*direction);
                    frame.record(instruction);
                }
                Instruction::Collect => {
                    self.collect(frame);
                    frame.record(instruction);
                }
                Instruction::Repeat { times, body } => {
                    frame.record(instruction);
                    // An empty body costs nothing, however often it repeats.
                    if !body.is_empty() {
                        for _ in 0..*times {
                            self.execute(body, frame)?;
                        }
                    }
                }
                Instruction::Conditional {
                    condition,
                    truthy,
                    falsy,
                } => {
                    frame.record(instruction);
                    let branch = if self.holds(*condition, frame) {
                        truthy
                    } else {
                        falsy
                    };
                    self.execute(branch, frame)?;
                }
            }
        }
        Ok(())
    }

    fn collect(&self, frame: &mut Frame<'a>) {
        let here = frame.pose.point();
        let Some(id) = self.cells.get(&here).copied().and_then(Tile::collectible_id) else {
            return;
        };
        let key = CollectedKey {
            x: here.x,
            y: here.y,
            id,
        };
        if frame.collected.insert(key) {
            frame.remaining = frame.remaining.saturating_sub(1);
            trace!(x = here.x, y = here.y, id, remaining = frame.remaining, "collected");
        }
    }

    fn holds(&self, condition: Condition, frame: &Frame<'_>) -> bool {
        match condition {
            Condition::TileAheadWalkable => self.is_walkable(frame.pose.ahead()),
            Condition::CollectiblesRemaining => frame.remaining > 0,
        }
    }

    fn is_walkable(&self, point: Point) -> bool {
        self.level.contains(point.x, point.y)
            && self
                .cells
                .get(&point)
                .is_some_and(|tile| tile.walkable)
    }
}
