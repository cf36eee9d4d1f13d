//! Star expansion
//!
//! A match holding at least one star clears its whole line. If every member
//! shares a column the match becomes the full column, otherwise the full row.
//! The member list is rebuilt from the grid; the grid itself is not touched.

use crate::grid::Grid;
use crate::scanner::{Match, Orientation};

pub struct SpecialResolver;

impl SpecialResolver {
    /// Expand every star match in `matches`.
    pub fn resolve(grid: &Grid, matches: Vec<Match>) -> Vec<Match> {
        matches.into_iter().map(|m| Self::expand(grid, m)).collect()
    }

    /// Expand a single match; matches without a star are returned unchanged.
    pub fn expand(grid: &Grid, m: Match) -> Match {
        if !m.contains_star() {
            return m;
        }
        let Some(first) = m.tiles.first().copied() else {
            return m;
        };

        let vertical = m.tiles.iter().all(|t| t.x == first.x);
        if vertical {
            Match {
                orientation: Orientation::Vertical,
                tiles: grid.column_tiles(first.x),
            }
        } else {
            Match {
                orientation: Orientation::Horizontal,
                tiles: grid.row_tiles(first.y),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::MatchScanner;
    use crate::tile::Tile;
    use crate::types::{TileColor::*, TilePattern};

    fn board() -> Grid {
        Grid::from_colors(&[
            vec![Pink, Blue, Beige, Orange, Pink],
            vec![Orange, Blue, Pink, Beige, Orange],
            vec![Pink, Blue, Beige, Orange, Pink],
            vec![Beige, Pink, Beige, Beige, Orange],
            vec![Pink, Orange, Pink, Orange, Pink],
        ])
        .unwrap()
    }

    fn make_star(grid: &mut Grid, x: u8, y: u8) {
        let t = *grid.tile(x, y).unwrap();
        grid.set(x, y, Some(Tile { pattern: TilePattern::Star, ..t })).unwrap();
    }

    #[test]
    fn test_plain_match_is_unchanged() {
        let grid = board();
        let raw = MatchScanner::scan_raw(&grid);
        assert_eq!(SpecialResolver::resolve(&grid, raw.clone()), raw);
    }

    #[test]
    fn test_vertical_star_clears_column() {
        let mut grid = board();
        make_star(&mut grid, 1, 1);

        let matches = MatchScanner::scan(&grid);
        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!(m.orientation, Orientation::Vertical);
        assert_eq!(m.len(), 5);
        assert!(m.tiles.iter().all(|t| t.x == 1));
        let rows: Vec<u8> = m.tiles.iter().map(|t| t.y).collect();
        assert_eq!(rows, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_horizontal_star_clears_row() {
        let mut grid = Grid::from_colors(&[
            vec![Pink, Blue, Beige, Orange, Pink],
            vec![Orange, Beige, Pink, Beige, Orange],
            vec![Blue, Blue, Blue, Orange, Pink],
        ])
        .unwrap();
        make_star(&mut grid, 2, 2);

        let matches = MatchScanner::scan(&grid);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].orientation, Orientation::Horizontal);
        assert_eq!(matches[0].len(), 5);
        assert!(matches[0].tiles.iter().all(|t| t.y == 2));
    }

    #[test]
    fn test_star_outside_match_does_nothing() {
        let mut grid = board();
        make_star(&mut grid, 4, 4);
        let matches = MatchScanner::scan(&grid);
        assert_eq!(matches[0].len(), 3);
    }
}
