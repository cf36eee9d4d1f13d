//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no game logic, making them usable in any
//! context (core engine, terminal rendering, headless simulation).
//!
//! # Board Dimensions
//!
//! The default playfield is a square grid:
//!
//! - **Width**: 8 columns (indexed 0-7, left to right)
//! - **Height**: 8 rows (indexed 0-7, top to bottom)
//! - **Minimum match**: 3 same-colored cells in a row or column
//!
//! # Gameplay Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_SCORE` | 5 | Points per cleared tile, multiplied by `tier + 1` |
//! | `MAX_TIMER_SECS` | 60 | Countdown at the start of every level |
//! | `BASE_TIMER_ADD_SECS` | 5 | Seconds granted per match at level 1 |
//! | `SCORE_GOAL_BASE` | 250 | Score needed to clear level 1 |
//! | `STAR_ROLL_MAX` | 50 | Star roll is drawn from `0..=50` |
//! | `STAR_DRAW` | 19 | The single winning star roll (1 in 51) |
//!
//! # Examples
//!
//! ```
//! use tui_match3_types::{Coord, GameAction, TileColor, TilePattern, BOARD_WIDTH};
//!
//! // Colors parse case-insensitively
//! assert_eq!(TileColor::from_str("beige"), Some(TileColor::Beige));
//!
//! // Pattern tiers are ordinal
//! assert_eq!(TilePattern::Triangle.tier(), 4);
//! assert!(TilePattern::Star.is_star());
//!
//! // Swaps are legal between orthogonal neighbours only
//! assert_eq!(Coord::new(2, 3).manhattan(Coord::new(2, 4)), 1);
//!
//! // Parse game action
//! assert_eq!(GameAction::from_str("hint"), Some(GameAction::Hint));
//!
//! assert_eq!(BOARD_WIDTH, 8);
//! ```

use serde::{Deserialize, Serialize};

/// Default board width in cells (8 columns)
pub const BOARD_WIDTH: u8 = 8;

/// Default board height in cells (8 rows)
pub const BOARD_HEIGHT: u8 = 8;

/// Largest supported board dimension on either axis.
pub const MAX_BOARD_DIM: u8 = 32;

/// Shortest run that counts as a match.
pub const MIN_MATCH_LEN: usize = 3;

/// Upper bound (inclusive) of the star roll.
pub const STAR_ROLL_MAX: u32 = 50;

/// The star roll value that turns a fresh tile into a star.
pub const STAR_DRAW: u32 = 19;

/// Points per cleared tile before the tier multiplier.
pub const BASE_SCORE: u32 = 5;

/// Countdown length of a level in seconds.
pub const MAX_TIMER_SECS: i32 = 60;

/// Seconds added per match at level 1; shrinks by one per level.
pub const BASE_TIMER_ADD_SECS: i32 = 5;

/// The clock warning sound starts at this many remaining seconds.
pub const CLOCK_WARNING_SECS: i32 = 5;

/// Score goal of the first level.
pub const SCORE_GOAL_BASE: u32 = 250;

/// Goal scale per level, as a ratio (5/4 = 1.25).
pub const SCORE_GOAL_SCALE_NUM: u32 = 5;
pub const SCORE_GOAL_SCALE_DEN: u32 = 4;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Number of trial swaps the session makes before giving up on a hint.
pub const HINT_MAX_ATTEMPTS: u32 = 10_000;


/// The six tile colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TileColor {
    Beige,
    Pink,
    Purple,
    LightGreen,
    Blue,
    Orange,
}

impl TileColor {
    /// Every color, in generation order.
    pub const ALL: [TileColor; 6] = [
        TileColor::Beige,
        TileColor::Pink,
        TileColor::Purple,
        TileColor::LightGreen,
        TileColor::Blue,
        TileColor::Orange,
    ];

    /// Parse color from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_match3_types::TileColor;
    ///
    /// assert_eq!(TileColor::from_str("LightGreen"), Some(TileColor::LightGreen));
    /// assert_eq!(TileColor::from_str("light_green"), Some(TileColor::LightGreen));
    /// assert_eq!(TileColor::from_str("teal"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "").as_str() {
            "beige" => Some(TileColor::Beige),
            "pink" => Some(TileColor::Pink),
            "purple" => Some(TileColor::Purple),
            "lightgreen" => Some(TileColor::LightGreen),
            "blue" => Some(TileColor::Blue),
            "orange" => Some(TileColor::Orange),
            _ => None,
        }
    }

    /// Convert to camelCase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TileColor::Beige => "beige",
            TileColor::Pink => "pink",
            TileColor::Purple => "purple",
            TileColor::LightGreen => "lightGreen",
            TileColor::Blue => "blue",
            TileColor::Orange => "orange",
        }
    }
}

/// Pattern tiers.
///
/// The ordinal tier is a score multiplier (`tier + 1`). Higher tiers become
/// available as the level rises; `Star` is never rolled by tier and instead
/// comes from a separate rare draw. A star inside a match clears its whole
/// row or column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TilePattern {
    Flat,
    Circle,
    Cross,
    Square,
    Triangle,
    Star,
}

impl TilePattern {
    pub const ALL: [TilePattern; 6] = [
        TilePattern::Flat,
        TilePattern::Circle,
        TilePattern::Cross,
        TilePattern::Square,
        TilePattern::Triangle,
        TilePattern::Star,
    ];

    /// Highest tier the level roll can produce.
    pub const MAX_NON_STAR: TilePattern = TilePattern::Triangle;

    pub fn tier(&self) -> u32 {
        *self as u32
    }

    pub fn from_tier(tier: u32) -> Option<Self> {
        Self::ALL.get(tier as usize).copied()
    }

    pub fn is_star(&self) -> bool {
        matches!(self, TilePattern::Star)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TilePattern::Flat => "flat",
            TilePattern::Circle => "circle",
            TilePattern::Cross => "cross",
            TilePattern::Square => "square",
            TilePattern::Triangle => "triangle",
            TilePattern::Star => "star",
        }
    }
}

/// A cell coordinate on the board: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Manhattan distance between two cells.
    pub fn manhattan(&self, other: Coord) -> u32 {
        (self.x.abs_diff(other.x) as u32) + (self.y.abs_diff(other.y) as u32)
    }

    /// Neighbour in `dir`, or `None` when it would leave the `u8` range.
    ///
    /// Board bounds are not checked here.
    pub fn step(&self, dir: Direction) -> Option<Coord> {
        let (dx, dy) = dir.delta();
        let x = self.x as i16 + dx as i16;
        let y = self.y as i16 + dy as i16;
        if !(0..=u8::MAX as i16).contains(&x) || !(0..=u8::MAX as i16).contains(&y) {
            return None;
        }
        Some(Coord::new(x as u8, y as u8))
    }
}

/// Orthogonal directions (up is towards row 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Player actions that can be applied to a play session
///
/// These actions are produced by the key map and by scripted drivers
/// (the headless simulator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the cursor one cell up
    CursorUp,
    /// Move the cursor one cell down
    CursorDown,
    /// Move the cursor one cell left
    CursorLeft,
    /// Move the cursor one cell right
    CursorRight,
    /// Select the tile under the cursor, or swap with the selected tile
    Select,
    /// Look for a matching swap and highlight it
    Hint,
    /// Start over from level 1
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_match3_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("cursorLeft"), Some(GameAction::CursorLeft));
    /// assert_eq!(GameAction::from_str("SELECT"), Some(GameAction::Select));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cursorup" => Some(GameAction::CursorUp),
            "cursordown" => Some(GameAction::CursorDown),
            "cursorleft" => Some(GameAction::CursorLeft),
            "cursorright" => Some(GameAction::CursorRight),
            "select" => Some(GameAction::Select),
            "hint" => Some(GameAction::Hint),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::CursorUp => "cursorUp",
            GameAction::CursorDown => "cursorDown",
            GameAction::CursorLeft => "cursorLeft",
            GameAction::CursorRight => "cursorRight",
            GameAction::Select => "select",
            GameAction::Hint => "hint",
            GameAction::Restart => "restart",
        }
    }
}

/// Feedback cues emitted by the session for the audio layer.
///
/// The core never plays sounds; it queues these and the front end drains them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Feedback {
    /// Cursor moved
    Select,
    /// Swap cancelled because the cells were not adjacent
    Error,
    /// One per cleared match
    Match,
    /// Low-time tick
    Clock,
    NextLevel,
    GameOver,
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
