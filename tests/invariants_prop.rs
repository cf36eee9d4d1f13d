//! Property tests for the board rules.
//!
//! Invariants covered:
//! - The scanner reports exactly the maximal same-color runs of length >= 3.
//! - Initialized boards are full and matchless.
//! - Swapping a pair twice restores the grid.
//! - Gravity keeps each column's tiles in order and packs them at the bottom.
//! - A cascade always ends on a full, stable board.
//! - A reverted swap leaves the grid untouched.

use proptest::prelude::*;
use tui_match3::core::{
    CascadeEngine, Grid, MatchScanner, Orientation, SimpleRng, SwapOutcome, SwapValidator,
    TileGenerator,
};
use tui_match3::types::{Coord, Direction, TileColor};

fn color_rows() -> impl Strategy<Value = Vec<Vec<TileColor>>> {
    (3usize..=8, 3usize..=8).prop_flat_map(|(w, h)| {
        prop::collection::vec(
            prop::collection::vec((0usize..6).prop_map(|i| TileColor::ALL[i]), w),
            h,
        )
    })
}

/// Maximal runs found by brute force: (orientation, first coord, length).
fn naive_runs(rows: &[Vec<TileColor>]) -> Vec<(Orientation, Coord, usize)> {
    let h = rows.len();
    let w = rows[0].len();
    let mut out = Vec::new();

    for (y, row) in rows.iter().enumerate() {
        let mut x = 0;
        while x < w {
            let end = (x..w).take_while(|&e| row[e] == row[x]).last().unwrap_or(x);
            if end - x + 1 >= 3 {
                out.push((Orientation::Horizontal, Coord::new(x as u8, y as u8), end - x + 1));
            }
            x = end + 1;
        }
    }
    for x in 0..w {
        let mut y = 0;
        while y < h {
            let end = (y..h).take_while(|&e| rows[e][x] == rows[y][x]).last().unwrap_or(y);
            if end - y + 1 >= 3 {
                out.push((Orientation::Vertical, Coord::new(x as u8, y as u8), end - y + 1));
            }
            y = end + 1;
        }
    }
    out
}

proptest! {
    #[test]
    fn scanner_matches_brute_force(rows in color_rows()) {
        let grid = Grid::from_colors(&rows).unwrap();
        let found: Vec<(Orientation, Coord, usize)> = MatchScanner::scan_raw(&grid)
            .iter()
            .map(|m| (m.orientation, m.tiles[0].coord(), m.len()))
            .collect();

        let mut expected = naive_runs(&rows);
        let mut actual = found.clone();
        expected.sort_by_key(|(o, c, l)| (*o as u8, c.x, c.y, *l));
        actual.sort_by_key(|(o, c, l)| (*o as u8, c.x, c.y, *l));
        prop_assert_eq!(actual, expected);

        for m in MatchScanner::scan_raw(&grid) {
            prop_assert!(m.len() >= 3);
            prop_assert!(m.tiles.iter().all(|t| t.color == m.tiles[0].color));
        }
    }

    #[test]
    fn initialize_is_full_and_matchless(seed in any::<u32>(), level in 1u32..8) {
        let mut generator = TileGenerator::new(SimpleRng::new(seed));
        let mut grid = Grid::default();
        grid.initialize(level, &mut generator);
        prop_assert!(grid.is_full());
        prop_assert!(!MatchScanner::has_matches(&grid));
    }

    #[test]
    fn swap_twice_restores_grid(rows in color_rows(), pick in any::<(u8, u8)>(), dir in 0usize..4) {
        let grid = Grid::from_colors(&rows).unwrap();
        let a = Coord::new(pick.0 % grid.width(), pick.1 % grid.height());
        let Some(b) = a.step(Direction::ALL[dir]).filter(|b| grid.contains(*b)) else {
            return Ok(());
        };

        let mut swapped = grid.clone();
        SwapValidator::swap(&mut swapped, a, b).unwrap();
        SwapValidator::swap(&mut swapped, b, a).unwrap();
        prop_assert_eq!(&swapped, &grid);

        let mut live = grid.clone();
        match SwapValidator::try_swap(&mut live, a, b).unwrap() {
            SwapOutcome::Reverted => prop_assert_eq!(&live, &grid),
            SwapOutcome::Matched(matches) => {
                prop_assert!(!matches.is_empty());
                prop_assert!(MatchScanner::has_matches(&live));
            }
        }
    }

    #[test]
    fn gravity_conserves_columns(rows in color_rows(), holes in prop::collection::vec(any::<bool>(), 64)) {
        let mut grid = Grid::from_colors(&rows).unwrap();
        let (w, h) = (grid.width(), grid.height());
        for y in 0..h {
            for x in 0..w {
                if holes[(y as usize * w as usize + x as usize) % holes.len()] {
                    grid.take(x, y).unwrap();
                }
            }
        }
        let before: Vec<Vec<u32>> = (0..w)
            .map(|x| grid.column_tiles(x).iter().map(|t| t.id).collect())
            .collect();

        CascadeEngine::<SimpleRng>::apply_gravity(&mut grid);

        for x in 0..w {
            let after: Vec<u32> = grid.column_tiles(x).iter().map(|t| t.id).collect();
            prop_assert_eq!(&after, &before[x as usize]);

            // Empty cells sit above every tile.
            let empty = h as usize - after.len();
            for y in 0..h {
                prop_assert_eq!(grid.tile(x, y).is_none(), (y as usize) < empty);
                if let Some(t) = grid.tile(x, y) {
                    prop_assert_eq!((t.x, t.y), (x, y));
                }
            }
        }
    }

    #[test]
    fn cascade_terminates_on_stable_board(seed in any::<u32>(), level in 1u32..8) {
        let mut generator = TileGenerator::new(SimpleRng::new(seed));
        let mut grid = Grid::default();
        grid.initialize_unchecked(level, &mut generator);

        let mut engine = CascadeEngine::new(generator, level);
        let summary = engine.resolve(&mut grid, &mut ());

        prop_assert!(grid.is_full());
        prop_assert!(!MatchScanner::has_matches(&grid));
        prop_assert_eq!(summary.matches == 0, summary.iterations == 0);
    }
}
