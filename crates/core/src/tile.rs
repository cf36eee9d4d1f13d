//! Tile module - the atomic cell value
//!
//! A tile keeps its identity for its whole life on the board. Only its
//! position changes: swaps exchange coordinates, gravity rewrites `y`.

use serde::Serialize;

use crate::types::{Coord, TileColor, TilePattern, BASE_SCORE};

/// Monotonic tile identity assigned by the generator.
pub type TileId = u32;

/// A colored, patterned tile placed at `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Tile {
    pub id: TileId,
    pub color: TileColor,
    pub pattern: TilePattern,
    /// Column on the board (`boardX`)
    pub x: u8,
    /// Row on the board (`boardY`)
    pub y: u8,
}

impl Tile {
    pub fn new(id: TileId, x: u8, y: u8, color: TileColor, pattern: TilePattern) -> Self {
        Self {
            id,
            color,
            pattern,
            x,
            y,
        }
    }

    pub fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }

    pub fn is_star(&self) -> bool {
        self.pattern.is_star()
    }

    /// Points this tile is worth when cleared: `(tier + 1) * BASE_SCORE`.
    pub fn score_value(&self) -> u32 {
        (self.pattern.tier() + 1) * BASE_SCORE
    }
}
