//! Match scanner - run-length detection of same-colored lines
//!
//! Rows are scanned top to bottom, then columns left to right. Each line is
//! walked once while tracking the current run color and length; a run is
//! reported when it ends with at least `MIN_MATCH_LEN` cells. Horizontal and
//! vertical runs are reported independently, so a tile at an intersection
//! appears in two matches.
//!
//! [`MatchScanner::scan`] also applies star expansion (see [`crate::special`]).

use serde::Serialize;

use crate::grid::Grid;
use crate::special::SpecialResolver;
use crate::tile::Tile;
use crate::types::{Coord, MIN_MATCH_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    /// Tiles share a row
    Horizontal,
    /// Tiles share a column
    Vertical,
}

impl Orientation {
    /// Number of cells along one line of this orientation.
    fn line_len(&self, grid: &Grid) -> u8 {
        match self {
            Orientation::Horizontal => grid.width(),
            Orientation::Vertical => grid.height(),
        }
    }

    fn line_count(&self, grid: &Grid) -> u8 {
        match self {
            Orientation::Horizontal => grid.height(),
            Orientation::Vertical => grid.width(),
        }
    }

    /// Cell `i` of line `line`.
    fn cell<'g>(&self, grid: &'g Grid, line: u8, i: u8) -> Option<&'g Tile> {
        match self {
            Orientation::Horizontal => grid.tile(i, line),
            Orientation::Vertical => grid.tile(line, i),
        }
    }
}

/// A run of three or more same-colored tiles (or a star-expanded full line).
///
/// Tiles are copies taken at scan time, ordered left to right or top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub orientation: Orientation,
    pub tiles: Vec<Tile>,
}

impl Match {
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn contains_star(&self) -> bool {
        self.tiles.iter().any(Tile::is_star)
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.tiles.iter().map(Tile::coord)
    }

    /// Score of the match: sum of `(tier + 1) * BASE_SCORE` over its tiles.
    pub fn score(&self) -> u32 {
        self.tiles.iter().map(Tile::score_value).sum()
    }
}

/// Stateless scanner over a [`Grid`].
pub struct MatchScanner;

impl MatchScanner {
    /// Every match on the board, with star matches expanded to full lines.
    pub fn scan(grid: &Grid) -> Vec<Match> {
        SpecialResolver::resolve(grid, Self::scan_raw(grid))
    }

    /// Every match on the board, without star expansion.
    pub fn scan_raw(grid: &Grid) -> Vec<Match> {
        let mut matches = Vec::new();
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            for line in 0..orientation.line_count(grid) {
                Self::scan_line(grid, orientation, line, &mut matches);
            }
        }
        matches
    }

    /// Whether the board has at least one match.
    ///
    /// Star expansion never removes a match, so the raw scan is enough.
    pub fn has_matches(grid: &Grid) -> bool {
        !Self::scan_raw(grid).is_empty()
    }

    fn scan_line(grid: &Grid, orientation: Orientation, line: u8, out: &mut Vec<Match>) {
        let len = orientation.line_len(grid);
        let min = MIN_MATCH_LEN as u8;

        let mut run_color = orientation.cell(grid, line, 0).map(|t| t.color);
        let mut run_len: u8 = 1;

        for i in 1..len {
            let color = orientation.cell(grid, line, i).map(|t| t.color);
            if color.is_some() && color == run_color {
                run_len += 1;
                continue;
            }

            if run_color.is_some() && run_len >= min {
                Self::emit(grid, orientation, line, i - run_len, i, out);
            }
            run_color = color;
            run_len = 1;

            // A run starting here cannot reach the minimum length.
            if len - i < min {
                return;
            }
        }

        // Run reaching the end of the line.
        if run_color.is_some() && run_len >= min {
            Self::emit(grid, orientation, line, len - run_len, len, out);
        }
    }

    fn emit(grid: &Grid, orientation: Orientation, line: u8, start: u8, end: u8, out: &mut Vec<Match>) {
        let tiles = (start..end)
            .filter_map(|i| orientation.cell(grid, line, i).copied())
            .collect();
        out.push(Match { orientation, tiles });
    }
}
