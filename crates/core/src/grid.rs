//! Grid module - owns the tiles of the playfield
//!
//! The grid is a `width x height` array of optional tiles using flat storage.
//! Coordinates: (x, y) where x is the column (left to right) and y the row
//! (top to bottom), so row 0 is where refilled tiles enter.
//!
//! Empty cells only exist while a cascade is clearing and refilling; every
//! player-visible state is full.

use thiserror::Error;
use tracing::debug;

use crate::generator::TileGenerator;
use crate::rng::RandomSource;
use crate::scanner::MatchScanner;
use crate::tile::{Tile, TileId};
use crate::types::{Coord, TileColor, TilePattern, BOARD_HEIGHT, BOARD_WIDTH, MAX_BOARD_DIM, MIN_MATCH_LEN};

/// Grid access errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds { x: u8, y: u8, width: u8, height: u8 },

    #[error("board dimensions {width}x{height} are not supported")]
    InvalidDimensions { width: u8, height: u8 },
}

/// The playfield - fixed dimensions, row-major cell storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Option<Tile>>,
}

impl Grid {
    /// Create an empty grid
    ///
    /// Both dimensions must lie in `MIN_MATCH_LEN..=MAX_BOARD_DIM`.
    pub fn new(width: u8, height: u8) -> Result<Self, GridError> {
        let range = (MIN_MATCH_LEN as u8)..=MAX_BOARD_DIM;
        if !range.contains(&width) || !range.contains(&height) {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        })
    }

    /// Build a full grid from rows of colors (all `Flat`, ids in row-major order).
    ///
    /// Rows must all have the same length.
    pub fn from_colors(rows: &[Vec<TileColor>]) -> Result<Self, GridError> {
        let height = rows.len().min(u8::MAX as usize) as u8;
        let width = rows.first().map_or(0, |r| r.len().min(u8::MAX as usize)) as u8;
        if rows.iter().any(|r| r.len() != width as usize) {
            return Err(GridError::InvalidDimensions { width, height });
        }

        let mut grid = Self::new(width, height)?;
        for (y, row) in rows.iter().enumerate() {
            for (x, color) in row.iter().enumerate() {
                let id = (y * width as usize + x) as TileId;
                let tile = Tile::new(id, x as u8, y as u8, *color, TilePattern::Flat);
                grid.set(x as u8, y as u8, Some(tile))?;
            }
        }
        Ok(grid)
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: u8, y: u8) -> Result<usize, GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Get the tile at (x, y); `Ok(None)` for an empty cell
    pub fn get(&self, x: u8, y: u8) -> Result<Option<&Tile>, GridError> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx].as_ref())
    }

    /// Iteration helper for cells already known to be in range.
    ///
    /// Out-of-range cells read as empty; use [`Grid::get`] for untrusted
    /// coordinates.
    #[inline]
    pub fn tile(&self, x: u8, y: u8) -> Option<&Tile> {
        self.index(x, y).ok().and_then(|idx| self.cells[idx].as_ref())
    }

    pub fn tile_at(&self, coord: Coord) -> Option<&Tile> {
        self.tile(coord.x, coord.y)
    }

    /// Place `tile` (or empty the cell) and return the previous content.
    ///
    /// A placed tile has its coordinates rewritten to the cell's.
    pub fn set(&mut self, x: u8, y: u8, tile: Option<Tile>) -> Result<Option<Tile>, GridError> {
        let idx = self.index(x, y)?;
        let tile = tile.map(|mut t| {
            t.x = x;
            t.y = y;
            t
        });
        Ok(std::mem::replace(&mut self.cells[idx], tile))
    }

    /// Empty the cell and return what was there.
    pub fn take(&mut self, x: u8, y: u8) -> Result<Option<Tile>, GridError> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx].take())
    }

    /// Raw cell for the cascade's in-range column walks.
    ///
    /// Coordinates of a tile written through the slot are the caller's job.
    #[inline]
    pub(crate) fn column_slot(&mut self, x: u8, y: u8) -> &mut Option<Tile> {
        debug_assert!(x < self.width && y < self.height);
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        &mut self.cells[idx]
    }

    /// Exchange the contents of two cells, updating each tile's coordinates.
    pub fn swap_cells(&mut self, a: Coord, b: Coord) -> Result<(), GridError> {
        let ia = self.index(a.x, a.y)?;
        let ib = self.index(b.x, b.y)?;
        if ia == ib {
            return Ok(());
        }

        self.cells.swap(ia, ib);
        if let Some(t) = self.cells[ia].as_mut() {
            t.x = a.x;
            t.y = a.y;
        }
        if let Some(t) = self.cells[ib].as_mut() {
            t.x = b.x;
            t.y = b.y;
        }
        Ok(())
    }

    /// Every placed tile in column `x`, top to bottom.
    pub fn column_tiles(&self, x: u8) -> Vec<Tile> {
        (0..self.height).filter_map(|y| self.tile(x, y).copied()).collect()
    }

    /// Every placed tile in row `y`, left to right.
    pub fn row_tiles(&self, y: u8) -> Vec<Tile> {
        (0..self.width).filter_map(|x| self.tile(x, y).copied()).collect()
    }

    /// Iterate placed tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.cells.iter().flatten()
    }

    pub fn cells(&self) -> &[Option<Tile>] {
        &self.cells
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Fill every cell with a fresh tile, without checking for matches.
    ///
    /// Used for decorative boards where a ready-made match is harmless.
    pub fn initialize_unchecked<R: RandomSource>(
        &mut self,
        level: u32,
        generator: &mut TileGenerator<R>,
    ) {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = (y as usize) * (self.width as usize) + (x as usize);
                self.cells[idx] = Some(generator.generate(x, y, level));
            }
        }
    }

    /// Fill the grid with fresh tiles, regenerating until no match is present.
    ///
    /// Returns the number of boards generated. There is no retry bound.
    pub fn initialize<R: RandomSource>(&mut self, level: u32, generator: &mut TileGenerator<R>) -> u32 {
        let mut attempts = 0;
        loop {
            attempts += 1;
            self.initialize_unchecked(level, generator);
            if !MatchScanner::has_matches(self) {
                break;
            }
        }
        debug!(attempts, level, "initialized matchless board");
        attempts
    }
}

impl Default for Grid {
    /// An empty 8x8 grid
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            cells: vec![None; BOARD_WIDTH as usize * BOARD_HEIGHT as usize],
        }
    }
}
