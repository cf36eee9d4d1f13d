//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the board rules of a match-three game: the grid, match
//! detection, star expansion, swap validation, the cascade loop and hint
//! search, plus the play session built on top of them. It has no terminal
//! or I/O dependencies, so the same code drives the TUI, the headless
//! simulator and the tests.
//!
//! # Module Structure
//!
//! - [`grid`]: rectangular board of optional tiles with bounds-checked access
//! - [`tile`]: tile identity, color, pattern tier and position
//! - [`generator`]: random tile creation with level-dependent patterns
//! - [`scanner`]: horizontal and vertical run detection
//! - [`special`]: star tiles that turn a match into a full row or column
//! - [`swap`]: adjacency policy and swap-then-check-then-revert
//! - [`cascade`]: clear, gravity and refill until the board is stable
//! - [`hint`]: random search for a swap that produces a match
//! - [`scoring`]: points, time bonus and level goals
//! - [`session`]: cursor, selection, countdown and level progression
//! - [`snapshot`]: serializable views for renderers and tooling
//!
//! # Randomness
//!
//! Everything random goes through [`RandomSource`]. [`SimpleRng`] is the
//! default; tests inject scripted sources to pin exact boards.
//!
//! # Example
//!
//! ```
//! use tui_match3_core::{MatchScanner, PlaySession};
//! use tui_match3_types::GameAction;
//!
//! let mut game = PlaySession::new(12345, 1);
//! assert!(!MatchScanner::has_matches(game.grid()));
//!
//! game.apply_action(GameAction::CursorRight);
//! game.apply_action(GameAction::Select);
//! assert!(game.selected().is_some());
//!
//! game.tick(1000);
//! assert_eq!(game.timer_secs(), 59);
//! ```

pub mod cascade;
pub mod generator;
pub mod grid;
pub mod hint;
pub mod rng;
pub mod scanner;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod special;
pub mod swap;
pub mod tile;

pub use tui_match3_types as types;

// Re-export commonly used types for convenience
pub use cascade::{
    Axis, CascadeEngine, CascadeObserver, CascadeStep, CascadeSummary, Movement, MovementKind,
};
pub use generator::TileGenerator;
pub use grid::{Grid, GridError};
pub use hint::{Hint, HintFinder};
pub use rng::{RandomSource, SimpleRng};
pub use scanner::{Match, MatchScanner, Orientation};
pub use scoring::{calculate_match_score, next_score_goal, score_goal_for_level, time_bonus_per_match};
pub use session::{PlaySession, SelectOutcome};
pub use snapshot::{CellSnapshot, GameSnapshot};
pub use special::SpecialResolver;
pub use swap::{SwapCheck, SwapError, SwapOutcome, SwapValidator};
pub use tile::{Tile, TileId};
