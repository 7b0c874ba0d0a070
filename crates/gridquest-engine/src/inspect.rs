//! Static inspection of a program, without running it.

use gridquest_types::{BlockKind, Instruction};

/// Blocks used in `program` that the level's palette does not offer.
///
/// Each block is reported once, in the order it first appears in a
/// pre-order walk. `None` means the level places no restriction.
pub fn disallowed_blocks(
    program: &[Instruction],
    allowed: Option<&[BlockKind]>,
) -> Vec<BlockKind> {
    let Some(allowed) = allowed else {
        return Vec::new();
    };
    let mut found = Vec::new();
    Instruction::walk(program, &mut |instruction| {
        let block = BlockKind::of(instruction);
        if !allowed.contains(&block) && !found.contains(&block) {
            found.push(block);
        }
    });
    found
}

/// Deepest structural nesting of control blocks.
///
/// A list of primitives has depth 0 and each `Repeat` or `Conditional`
/// adds one for its children, whether or not they would ever run. The
/// simulator rejects any program deeper than
/// [`MAX_NESTING_DEPTH`](crate::MAX_NESTING_DEPTH) before taking a step.
pub fn nesting_depth(program: &[Instruction]) -> usize {
    program
        .iter()
        .map(|instruction| match instruction {
            Instruction::Repeat { body, .. } => 1 + nesting_depth(body),
            Instruction::Conditional { truthy, falsy, .. } => {
                1 + nesting_depth(truthy).max(nesting_depth(falsy))
            }
            Instruction::Move | Instruction::Turn { .. } | Instruction::Collect => 0,
        })
        .max()
        .unwrap_or(0)
}

/// Total number of nodes in the tree.
pub fn instruction_count(program: &[Instruction]) -> usize {
    let mut count = 0;
    Instruction::walk(program, &mut |_| count += 1);
    count
}
