//! Plain, serializable views of a session for renderers and tooling.

use serde::Serialize;

use crate::grid::Grid;
use crate::tile::{Tile, TileId};
use crate::types::{Coord, TileColor, TilePattern};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CellSnapshot {
    pub id: TileId,
    pub color: TileColor,
    pub pattern: TilePattern,
}

impl From<Tile> for CellSnapshot {
    fn from(value: Tile) -> Self {
        Self {
            id: value.id,
            color: value.color,
            pattern: value.pattern,
        }
    }
}

/// Board cells as rows, top row first.
pub fn grid_rows(grid: &Grid) -> Vec<Vec<Option<CellSnapshot>>> {
    (0..grid.height())
        .map(|y| {
            (0..grid.width())
                .map(|x| grid.tile(x, y).copied().map(CellSnapshot::from))
                .collect()
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    pub board: Vec<Vec<Option<CellSnapshot>>>,
    pub cursor: Coord,
    pub selected: Option<Coord>,
    pub hint: Option<(Coord, Coord)>,
    pub level: u32,
    pub score: u32,
    pub score_goal: u32,
    pub timer_secs: i32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn cell(&self, x: u8, y: u8) -> Option<CellSnapshot> {
        self.board
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .flatten()
    }
}
