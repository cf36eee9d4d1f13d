//! Swap validation and mechanics
//!
//! Two cells may be swapped only when their Manhattan distance is exactly 1.
//! Selecting the same cell twice or a distant cell is a policy outcome for
//! the caller ([`SwapCheck`]), not an error.

use thiserror::Error;

use crate::grid::{Grid, GridError};
use crate::scanner::{Match, MatchScanner};
use crate::types::Coord;

/// Classification of a requested swap by distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapCheck {
    /// Same cell selected twice: clear the selection
    Deselect,
    /// Orthogonal neighbours: perform the swap
    Adjacent,
    /// Too far apart: cancel the selection and signal an error cue
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SwapError {
    #[error("cells {a} and {b} are not adjacent")]
    NotAdjacent { a: Coord, b: Coord },

    #[error("cell {0} is empty")]
    EmptyCell(Coord),

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Result of a swap that was applied to the live grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapOutcome {
    /// The swap formed matches and stays applied
    Matched(Vec<Match>),
    /// No match formed; the swap was undone
    Reverted,
}

pub struct SwapValidator;

impl SwapValidator {
    pub fn check(a: Coord, b: Coord) -> SwapCheck {
        match a.manhattan(b) {
            0 => SwapCheck::Deselect,
            1 => SwapCheck::Adjacent,
            _ => SwapCheck::Cancel,
        }
    }

    /// Exchange two cells and their tiles' coordinates.
    ///
    /// Applying the same swap twice restores the grid exactly.
    pub fn swap(grid: &mut Grid, a: Coord, b: Coord) -> Result<(), GridError> {
        grid.swap_cells(a, b)
    }

    /// A copy of `grid` with `a` and `b` swapped; `grid` is left untouched.
    pub fn trial(grid: &Grid, a: Coord, b: Coord) -> Result<Grid, SwapError> {
        Self::validate(grid, a, b)?;
        let mut scratch = grid.clone();
        scratch.swap_cells(a, b)?;
        Ok(scratch)
    }

    /// Swap on the live grid and keep it only if a match forms.
    pub fn try_swap(grid: &mut Grid, a: Coord, b: Coord) -> Result<SwapOutcome, SwapError> {
        Self::validate(grid, a, b)?;
        grid.swap_cells(a, b)?;

        let matches = MatchScanner::scan(grid);
        if matches.is_empty() {
            grid.swap_cells(b, a)?;
            return Ok(SwapOutcome::Reverted);
        }
        Ok(SwapOutcome::Matched(matches))
    }

    fn validate(grid: &Grid, a: Coord, b: Coord) -> Result<(), SwapError> {
        if Self::check(a, b) != SwapCheck::Adjacent {
            return Err(SwapError::NotAdjacent { a, b });
        }
        for c in [a, b] {
            if grid.get(c.x, c.y)?.is_none() {
                return Err(SwapError::EmptyCell(c));
            }
        }
        Ok(())
    }
}
