//! Connected-group and liberty resolution.
//!
//! A group is the maximal set of same-colored stones reachable from a start
//! stone through orthogonal steps. Its liberties are the distinct empty
//! points orthogonally adjacent to any of its stones. Both are computed on
//! demand from a grid snapshot and never cached, since the grid changes with
//! every move.

use std::collections::BTreeSet;

use crate::error::RuleError;
use crate::grid::{Color, Coord, Grid};

/// A resolved group and its liberties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub color: Color,
    pub stones: BTreeSet<Coord>,
    pub liberties: BTreeSet<Coord>,
}

impl Group {
    /// Number of distinct liberties.
    pub fn liberty_count(&self) -> usize {
        self.liberties.len()
    }

    /// A group without liberties is captured (or, for the mover, suicide).
    pub fn is_dead(&self) -> bool {
        self.liberties.is_empty()
    }
}

/// Flood-fill the group containing `start`.
///
/// Uses a seen-set so each stone is expanded exactly once, and a set for
/// liberties so an empty point shared by several stones counts once.
///
/// # Errors
/// - `OutOfBounds` if `start` is outside the grid
/// - `EmptyStart` if `start` holds no stone
pub fn resolve_group(grid: &Grid, start: Coord) -> Result<Group, RuleError> {
    let color = grid.get(start)?.ok_or(RuleError::EmptyStart(start))?;
    let mut stack = vec![start];
    let mut stones = BTreeSet::new();
    let mut liberties = BTreeSet::new();

    while let Some(pt) = stack.pop() {
        if !stones.insert(pt) {
            continue;
        }
        for n in grid.neighbors(pt) {
            match grid.get(n)? {
                None => {
                    liberties.insert(n);
                }
                Some(c) if c == color && !stones.contains(&n) => stack.push(n),
                _ => {}
            }
        }
    }

    Ok(Group {
        color,
        stones,
        liberties,
    })
}
