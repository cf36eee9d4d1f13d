//! Hint search
//!
//! Rejection sampling: pick a random interior cell and a random orthogonal
//! neighbour, try the swap on a scratch copy of the grid, and stop at the
//! first swap that produces a match. The live grid is never modified.

use serde::Serialize;
use tracing::{trace, warn};

use crate::grid::{Grid, GridError};
use crate::rng::RandomSource;
use crate::scanner::MatchScanner;
use crate::types::{Coord, Direction};

/// A swap that produces at least one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hint {
    pub a: Coord,
    pub b: Coord,
    /// Trial swaps made before this one was found
    pub attempts: u32,
}

pub struct HintFinder;

impl HintFinder {
    /// Search until a matching swap is found.
    ///
    /// This never gives up: on a board without any move involving an interior
    /// cell it does not return. Use [`HintFinder::find_hint_within`] when that
    /// matters.
    pub fn find_hint<R: RandomSource>(grid: &Grid, rng: &mut R) -> Result<Hint, GridError> {
        let mut scratch = grid.clone();
        let mut attempts = 0u32;
        loop {
            attempts = attempts.saturating_add(1);
            if let Some((a, b)) = Self::attempt(&mut scratch, rng)? {
                return Ok(Hint { a, b, attempts });
            }
        }
    }

    /// Search with at most `max_attempts` trial swaps.
    pub fn find_hint_within<R: RandomSource>(
        grid: &Grid,
        rng: &mut R,
        max_attempts: u32,
    ) -> Result<Option<Hint>, GridError> {
        let mut scratch = grid.clone();
        for attempts in 1..=max_attempts {
            if let Some((a, b)) = Self::attempt(&mut scratch, rng)? {
                return Ok(Some(Hint { a, b, attempts }));
            }
        }
        warn!(max_attempts, "no hint found");
        Ok(None)
    }

    /// Every adjacent swap on the board that produces a match.
    ///
    /// Each pair is listed once, as (cell, right neighbour) or (cell, lower
    /// neighbour).
    pub fn all_moves(grid: &Grid) -> Vec<(Coord, Coord)> {
        let mut scratch = grid.clone();
        let mut moves = Vec::new();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let a = Coord::new(x, y);
                for dir in [Direction::Right, Direction::Down] {
                    let Some(b) = a.step(dir).filter(|b| grid.contains(*b)) else {
                        continue;
                    };
                    if let Ok(true) = Self::trial(&mut scratch, a, b) {
                        moves.push((a, b));
                    }
                }
            }
        }
        moves
    }

    /// One random trial. `scratch` is restored before returning.
    fn attempt<R: RandomSource>(scratch: &mut Grid, rng: &mut R) -> Result<Option<(Coord, Coord)>, GridError> {
        let a = Coord::new(
            rng.int_inclusive(1, scratch.width() as u32 - 2) as u8,
            rng.int_inclusive(1, scratch.height() as u32 - 2) as u8,
        );
        let dir = rng.pick(&Direction::ALL).unwrap_or(Direction::Up);
        let Some(b) = a.step(dir) else {
            return Ok(None);
        };

        let found = Self::trial(scratch, a, b)?;
        trace!(?a, ?b, found, "hint trial");
        Ok(found.then_some((a, b)))
    }

    /// Swap, check for a match, swap back.
    fn trial(scratch: &mut Grid, a: Coord, b: Coord) -> Result<bool, GridError> {
        scratch.swap_cells(a, b)?;
        let found = MatchScanner::has_matches(scratch);
        scratch.swap_cells(b, a)?;
        Ok(found)
    }
}
