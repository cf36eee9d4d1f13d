//! Cascade engine - clear, fall, refill, rescan until stable
//!
//! One call to [`CascadeEngine::resolve`] runs the whole chain triggered by a
//! player swap:
//!
//! 1. scan (with star expansion); stop when nothing matches
//! 2. clear every matched cell
//! 3. compact each column downwards, recording a `Fall` movement per moved tile
//! 4. refill empty cells with fresh tiles, recording a `Spawn` movement each
//! 5. hand the step to the observer, then go back to 1
//!
//! Every iteration removes at least `MIN_MATCH_LEN` tiles. The loop has no
//! iteration cap; in practice a chain ends within a few steps.

use arrayvec::ArrayVec;
use serde::Serialize;
use tracing::{debug, warn};

use crate::generator::TileGenerator;
use crate::grid::{Grid, GridError};
use crate::rng::RandomSource;
use crate::scanner::{Match, MatchScanner};
use crate::scoring::calculate_match_score;
use crate::tile::Tile;

/// Animated property of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Axis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MovementKind {
    /// An existing tile dropped into a lower cell
    Fall,
    /// A new tile entering from above the board
    Spawn,
}

/// Where a tile travels during one cascade step, in cell units.
///
/// `params` pairs each animated axis with its target value, e.g.
/// `[(Axis::Y, 5.0)]` for a tile coming to rest on row 5.
#[derive(Debug, Clone, PartialEq)]
pub struct Movement {
    /// The tile in its final position
    pub tile: Tile,
    pub kind: MovementKind,
    /// Starting position `(x, y)`; spawned tiles start one cell above row 0
    pub origin: (f32, f32),
    pub params: ArrayVec<(Axis, f32), 2>,
}

impl Movement {
    fn vertical(tile: Tile, kind: MovementKind, from_y: f32) -> Self {
        let mut params = ArrayVec::new();
        params.push((Axis::Y, tile.y as f32));
        Self {
            tile,
            kind,
            origin: (tile.x as f32, from_y),
            params,
        }
    }

    /// Target value for `axis`, if this movement animates it.
    pub fn target(&self, axis: Axis) -> Option<f32> {
        self.params.iter().find(|(a, _)| *a == axis).map(|(_, v)| *v)
    }
}

/// Everything that happened in one clear/fall/refill iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct CascadeStep {
    /// 1-based iteration number within the chain
    pub iteration: u32,
    /// Matches as they were before clearing
    pub matches: Vec<Match>,
    /// Distinct cells emptied (overlapping matches share cells)
    pub cleared: usize,
    pub falls: Vec<Movement>,
    pub spawns: Vec<Movement>,
}

impl CascadeStep {
    /// Score of this step: every tile of every match, overlaps included.
    pub fn score(&self) -> u32 {
        calculate_match_score(&self.matches)
    }
}

/// Totals of a resolved chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CascadeSummary {
    /// Matches found across all iterations
    pub matches: usize,
    pub tiles_cleared: usize,
    pub iterations: u32,
    pub score: u32,
}

impl CascadeSummary {
    pub fn is_empty(&self) -> bool {
        self.matches == 0
    }
}

/// Receives each cascade step as it completes (animation, scoring, audio).
pub trait CascadeObserver {
    fn on_step(&mut self, step: &CascadeStep);
}

impl CascadeObserver for () {
    fn on_step(&mut self, _step: &CascadeStep) {}
}

impl CascadeObserver for Vec<CascadeStep> {
    fn on_step(&mut self, step: &CascadeStep) {
        self.push(step.clone());
    }
}

/// Resolves cascades; owns the tile generator used for refills.
#[derive(Debug, Clone)]
pub struct CascadeEngine<R> {
    generator: TileGenerator<R>,
    level: u32,
}

impl<R: RandomSource> CascadeEngine<R> {
    pub fn new(generator: TileGenerator<R>, level: u32) -> Self {
        Self { generator, level }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Level used for refill tiles from now on.
    pub fn set_level(&mut self, level: u32) {
        self.level = level;
    }

    pub fn generator_mut(&mut self) -> &mut TileGenerator<R> {
        &mut self.generator
    }

    /// Run the chain to a stable board.
    pub fn resolve<O: CascadeObserver + ?Sized>(&mut self, grid: &mut Grid, observer: &mut O) -> CascadeSummary {
        let mut summary = CascadeSummary::default();

        loop {
            let matches = MatchScanner::scan(grid);
            if matches.is_empty() {
                break;
            }

            let step = match self.step(grid, matches, summary.iterations + 1) {
                Ok(step) => step,
                Err(err) => {
                    warn!(%err, "cascade stopped on a foreign match");
                    break;
                }
            };
            summary.iterations = step.iteration;
            summary.matches += step.matches.len();
            summary.tiles_cleared += step.cleared;
            summary.score += step.score();
            observer.on_step(&step);
        }

        if !summary.is_empty() {
            debug!(
                iterations = summary.iterations,
                matches = summary.matches,
                cleared = summary.tiles_cleared,
                "cascade settled"
            );
        }
        summary
    }

    /// One clear, fall and refill pass for an already-scanned match set.
    pub fn step(
        &mut self,
        grid: &mut Grid,
        matches: Vec<Match>,
        iteration: u32,
    ) -> Result<CascadeStep, GridError> {
        let cleared = Self::clear_matches(grid, &matches)?;
        let falls = Self::apply_gravity(grid);
        let spawns = self.refill(grid);

        debug!(
            iteration,
            matches = matches.len(),
            cleared,
            falls = falls.len(),
            spawns = spawns.len(),
            "cascade step"
        );

        Ok(CascadeStep {
            iteration,
            matches,
            cleared,
            falls,
            spawns,
        })
    }

    /// Empty every cell named by `matches`; returns the number of cells emptied.
    ///
    /// Fails on a match coordinate outside the grid; nothing is cleared then.
    pub fn clear_matches(grid: &mut Grid, matches: &[Match]) -> Result<usize, GridError> {
        for c in matches.iter().flat_map(Match::coords) {
            grid.get(c.x, c.y)?;
        }

        let mut cleared = 0;
        for m in matches {
            for c in m.coords() {
                if grid.take(c.x, c.y)?.is_some() {
                    cleared += 1;
                }
            }
        }
        Ok(cleared)
    }

    /// Drop tiles into the gaps below them, column by column.
    ///
    /// Stable two-pointer compaction from the bottom row up: the relative
    /// order of a column's tiles is kept and all empty cells end up on top.
    pub fn apply_gravity(grid: &mut Grid) -> Vec<Movement> {
        let mut falls = Vec::new();

        for x in 0..grid.width() {
            let mut write_y = grid.height();
            for read_y in (0..grid.height()).rev() {
                let Some(tile) = grid.column_slot(x, read_y).take() else {
                    continue;
                };
                write_y -= 1;
                // `write_y >= read_y`, and every cell in between is empty.
                let slot = grid.column_slot(x, write_y);
                let moved = slot.insert(Tile { x, y: write_y, ..tile });
                if write_y != read_y {
                    falls.push(Movement::vertical(*moved, MovementKind::Fall, read_y as f32));
                }
            }
        }

        falls
    }

    /// Fill every empty cell with a fresh tile, column by column, top to bottom.
    pub fn refill(&mut self, grid: &mut Grid) -> Vec<Movement> {
        let mut spawns = Vec::new();

        for x in 0..grid.width() {
            for y in 0..grid.height() {
                let slot = grid.column_slot(x, y);
                if slot.is_some() {
                    continue;
                }
                let tile = *slot.insert(self.generator.generate(x, y, self.level));
                spawns.push(Movement::vertical(tile, MovementKind::Spawn, -1.0));
            }
        }

        spawns
    }
}
