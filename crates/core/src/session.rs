//! Play session - the turn-based game around the cascade engine
//!
//! This module ties together the grid, the cascade engine, hint search and
//! scoring. It owns the cursor and selection policy, the level countdown and
//! the score goal, and queues feedback cues for the audio layer.
//!
//! The session holds the grid by value, so a cascade always runs to a stable
//! board inside one call before any further input is accepted.

use tracing::{debug, info, warn};

use crate::cascade::{CascadeEngine, CascadeObserver, CascadeStep, CascadeSummary};
use crate::generator::TileGenerator;
use crate::grid::{Grid, GridError};
use crate::hint::{Hint, HintFinder};
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::{next_score_goal, score_goal_for_level, time_bonus_per_match};
use crate::snapshot::{grid_rows, GameSnapshot};
use crate::swap::{SwapCheck, SwapOutcome, SwapValidator};
use crate::types::{
    Coord, Direction, Feedback, GameAction, CLOCK_WARNING_SECS, HINT_MAX_ATTEMPTS, MAX_TIMER_SECS,
};

/// What a selection (or direct swap) request led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// First tile picked
    Selected(Coord),
    /// Same tile picked again
    Deselected,
    /// Second tile too far away (error cue queued)
    Cancelled,
    /// Adjacent swap formed no match and was undone
    Reverted,
    /// Adjacent swap matched; the cascade ran to a stable board
    Resolved(CascadeSummary),
    /// Game is over
    Ignored,
}

/// Collects per-step side effects of a cascade for the session.
struct SessionObserver<'a> {
    time_bonus: i32,
    timer_secs: &'a mut i32,
    feedback: &'a mut Vec<Feedback>,
    steps: &'a mut Vec<CascadeStep>,
}

impl CascadeObserver for SessionObserver<'_> {
    fn on_step(&mut self, step: &CascadeStep) {
        for _ in &step.matches {
            self.feedback.push(Feedback::Match);
            *self.timer_secs += self.time_bonus;
        }
        self.steps.push(step.clone());
    }
}

/// Fill `grid` with a matchless board that has at least one move.
fn deal<R: RandomSource>(grid: &mut Grid, engine: &mut CascadeEngine<R>, level: u32) {
    let mut boards = 0u32;
    loop {
        boards += grid.initialize(level, engine.generator_mut());
        if !HintFinder::all_moves(grid).is_empty() {
            break;
        }
    }
    debug!(boards, level, "dealt playable board");
}

/// Complete play state
#[derive(Debug, Clone)]
pub struct PlaySession<R> {
    grid: Grid,
    engine: CascadeEngine<R>,
    cursor: Coord,
    selected: Option<Coord>,
    hint: Option<Hint>,
    level: u32,
    score: u32,
    score_goal: u32,
    timer_secs: i32,
    /// Milliseconds accumulated towards the next whole second
    timer_acc_ms: u32,
    game_over: bool,
    /// Cues not yet consumed by the front end
    feedback: Vec<Feedback>,
    /// Cascade steps not yet consumed by the animation layer
    steps: Vec<CascadeStep>,
}

impl PlaySession<SimpleRng> {
    /// Create a new game with the given RNG seed, starting at `level`
    pub fn new(seed: u32, level: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed), level)
    }
}

impl Default for PlaySession<SimpleRng> {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl<R: RandomSource> PlaySession<R> {
    /// Start on a freshly generated, matchless board.
    pub fn with_rng(rng: R, level: u32) -> Self {
        let level = level.max(1);
        let mut engine = CascadeEngine::new(TileGenerator::new(rng), level);
        let mut grid = Grid::default();
        deal(&mut grid, &mut engine, level);
        Self::assemble(grid, engine, level)
    }

    /// Start on a prepared board. New tiles are numbered after its highest id.
    pub fn with_grid(grid: Grid, rng: R, level: u32) -> Self {
        let level = level.max(1);
        let mut generator = TileGenerator::new(rng);
        if let Some(max_id) = grid.tiles().map(|t| t.id).max() {
            generator.reserve_ids_through(max_id);
        }
        Self::assemble(grid, CascadeEngine::new(generator, level), level)
    }

    fn assemble(grid: Grid, engine: CascadeEngine<R>, level: u32) -> Self {
        Self {
            grid,
            engine,
            cursor: Coord::default(),
            selected: None,
            hint: None,
            level,
            score: 0,
            score_goal: score_goal_for_level(level),
            timer_secs: MAX_TIMER_SECS,
            timer_acc_ms: 0,
            game_over: false,
            feedback: Vec::new(),
            steps: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    pub fn selected(&self) -> Option<Coord> {
        self.selected
    }

    pub fn hint(&self) -> Option<Hint> {
        self.hint
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn score_goal(&self) -> u32 {
        self.score_goal
    }

    pub fn timer_secs(&self) -> i32 {
        self.timer_secs
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Apply a player action; returns whether anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::CursorUp => self.move_cursor(Direction::Up),
            GameAction::CursorDown => self.move_cursor(Direction::Down),
            GameAction::CursorLeft => self.move_cursor(Direction::Left),
            GameAction::CursorRight => self.move_cursor(Direction::Right),
            GameAction::Select => self.select() != SelectOutcome::Ignored,
            GameAction::Hint => self.request_hint().is_some(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Move the cursor one cell, clamped to the board.
    pub fn move_cursor(&mut self, dir: Direction) -> bool {
        if self.game_over {
            return false;
        }
        self.feedback.push(Feedback::Select);
        match self.cursor.step(dir).filter(|c| self.grid.contains(*c)) {
            Some(next) => {
                self.cursor = next;
                true
            }
            None => false,
        }
    }

    /// Place the cursor directly (scripted drivers).
    pub fn set_cursor(&mut self, coord: Coord) -> Result<(), GridError> {
        self.grid.get(coord.x, coord.y)?;
        self.cursor = coord;
        Ok(())
    }

    /// Select the tile under the cursor, or swap it with the selected one.
    pub fn select(&mut self) -> SelectOutcome {
        if self.game_over {
            return SelectOutcome::Ignored;
        }

        let cursor = self.cursor;
        let Some(selected) = self.selected.take() else {
            self.selected = Some(cursor);
            return SelectOutcome::Selected(cursor);
        };

        match SwapValidator::check(selected, cursor) {
            SwapCheck::Deselect => SelectOutcome::Deselected,
            SwapCheck::Cancel => {
                self.feedback.push(Feedback::Error);
                SelectOutcome::Cancelled
            }
            SwapCheck::Adjacent => self.swap(selected, cursor),
        }
    }

    /// Swap two cells and run the cascade if a match forms.
    pub fn swap(&mut self, a: Coord, b: Coord) -> SelectOutcome {
        if self.game_over {
            return SelectOutcome::Ignored;
        }
        self.selected = None;

        match SwapValidator::try_swap(&mut self.grid, a, b) {
            Ok(SwapOutcome::Reverted) => {
                debug!(%a, %b, "swap reverted");
                SelectOutcome::Reverted
            }
            Ok(SwapOutcome::Matched(_)) => SelectOutcome::Resolved(self.resolve()),
            Err(err) => {
                warn!(%err, "swap rejected");
                self.feedback.push(Feedback::Error);
                SelectOutcome::Cancelled
            }
        }
    }

    fn resolve(&mut self) -> CascadeSummary {
        self.hint = None;

        let mut observer = SessionObserver {
            time_bonus: time_bonus_per_match(self.level),
            timer_secs: &mut self.timer_secs,
            feedback: &mut self.feedback,
            steps: &mut self.steps,
        };
        let summary = self.engine.resolve(&mut self.grid, &mut observer);
        self.score = self.score.saturating_add(summary.score);

        self.check_victory();
        if HintFinder::all_moves(&self.grid).is_empty() {
            info!(level = self.level, "no moves left, dealing a new board");
            deal(&mut self.grid, &mut self.engine, self.level);
        }
        summary
    }

    /// Look for a matching swap and remember it for highlighting.
    ///
    /// The random search only samples moves touching an interior cell, so
    /// when it comes back empty the first move of a full scan is used.
    pub fn request_hint(&mut self) -> Option<Hint> {
        if self.game_over {
            return None;
        }
        let rng = self.engine.generator_mut().rng_mut();
        let sampled = match HintFinder::find_hint_within(&self.grid, rng, HINT_MAX_ATTEMPTS) {
            Ok(hint) => hint,
            Err(err) => {
                warn!(%err, "hint search failed");
                None
            }
        };
        self.hint = sampled.or_else(|| {
            let &(a, b) = HintFinder::all_moves(&self.grid).first()?;
            debug!(%a, %b, "hint taken from full move scan");
            Some(Hint {
                a,
                b,
                attempts: HINT_MAX_ATTEMPTS,
            })
        });
        self.hint
    }

    /// Advance the level countdown. Returns whether a whole second passed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over {
            return false;
        }

        self.timer_acc_ms = self.timer_acc_ms.saturating_add(elapsed_ms);
        let mut ticked = false;
        while self.timer_acc_ms >= 1000 {
            self.timer_acc_ms -= 1000;
            self.timer_secs -= 1;
            ticked = true;
            if self.timer_secs <= CLOCK_WARNING_SECS {
                self.feedback.push(Feedback::Clock);
            }
        }

        if self.timer_secs <= 0 {
            self.game_over = true;
            self.selected = None;
            self.hint = None;
            self.feedback.push(Feedback::GameOver);
            info!(score = self.score, level = self.level, "game over");
        }
        ticked
    }

    fn check_victory(&mut self) {
        if self.score < self.score_goal {
            return;
        }

        self.level += 1;
        self.score_goal = next_score_goal(self.score_goal, self.level);
        self.timer_secs = MAX_TIMER_SECS;
        self.timer_acc_ms = 0;
        self.selected = None;
        self.hint = None;
        self.engine.set_level(self.level);
        deal(&mut self.grid, &mut self.engine, self.level);
        self.feedback.push(Feedback::NextLevel);
        info!(level = self.level, goal = self.score_goal, score = self.score, "level up");
    }

    /// Start over at level 1 with a new board; the RNG keeps its sequence.
    pub fn restart(&mut self) {
        self.level = 1;
        self.score = 0;
        self.score_goal = score_goal_for_level(1);
        self.timer_secs = MAX_TIMER_SECS;
        self.timer_acc_ms = 0;
        self.game_over = false;
        self.cursor = Coord::default();
        self.selected = None;
        self.hint = None;
        self.feedback.clear();
        self.steps.clear();
        self.engine.set_level(1);
        deal(&mut self.grid, &mut self.engine, 1);
    }

    /// Take the queued feedback cues.
    pub fn drain_feedback(&mut self) -> Vec<Feedback> {
        std::mem::take(&mut self.feedback)
    }

    /// Take the cascade steps produced since the last call.
    pub fn take_steps(&mut self) -> Vec<CascadeStep> {
        std::mem::take(&mut self.steps)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            width: self.grid.width(),
            height: self.grid.height(),
            board: grid_rows(&self.grid),
            cursor: self.cursor,
            selected: self.selected,
            hint: self.hint.map(|h| (h.a, h.b)),
            level: self.level,
            score: self.score,
            score_goal: self.score_goal,
            timer_secs: self.timer_secs,
            game_over: self.game_over,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::MatchScanner;
    use crate::types::TileColor::*;

    fn session() -> PlaySession<SimpleRng> {
        // (2,1) <-> (2,0) completes the Blue run in row 0.
        let grid = Grid::from_colors(&[
            vec![Blue, Blue, Pink, Orange, Beige],
            vec![Pink, Orange, Blue, Beige, Purple],
            vec![Beige, Pink, Orange, Purple, Pink],
            vec![Orange, Beige, Pink, Orange, Beige],
            vec![Purple, Orange, Beige, Pink, Orange],
        ])
        .unwrap();
        PlaySession::with_grid(grid, SimpleRng::new(5), 1)
    }

    #[test]
    fn test_new_session_has_matchless_board() {
        let s = PlaySession::new(12345, 1);
        assert!(s.grid().is_full());
        assert!(!MatchScanner::has_matches(s.grid()));
        assert_eq!(s.level(), 1);
        assert_eq!(s.score_goal(), 250);
        assert_eq!(s.timer_secs(), MAX_TIMER_SECS);
    }

    #[test]
    fn test_select_same_tile_twice_deselects() {
        let mut s = session();
        assert_eq!(s.select(), SelectOutcome::Selected(Coord::new(0, 0)));
        assert_eq!(s.select(), SelectOutcome::Deselected);
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn test_distant_selection_cancels_with_error_cue() {
        let mut s = session();
        s.select();
        s.set_cursor(Coord::new(2, 2)).unwrap();
        assert_eq!(s.select(), SelectOutcome::Cancelled);
        assert_eq!(s.selected(), None);
        assert!(s.drain_feedback().contains(&Feedback::Error));
    }

    #[test]
    fn test_non_matching_swap_is_reverted() {
        let mut s = session();
        let before = s.grid().clone();
        s.set_cursor(Coord::new(3, 3)).unwrap();
        s.select();
        s.set_cursor(Coord::new(4, 3)).unwrap();
        assert_eq!(s.select(), SelectOutcome::Reverted);
        assert_eq!(s.grid(), &before);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn test_matching_swap_scores_and_adds_time() {
        let mut s = session();
        s.set_cursor(Coord::new(2, 1)).unwrap();
        s.select();
        s.set_cursor(Coord::new(2, 0)).unwrap();

        let SelectOutcome::Resolved(summary) = s.select() else {
            panic!("expected a resolved cascade");
        };
        assert!(summary.matches >= 1);
        assert_eq!(s.score(), summary.score);
        assert!(s.score() >= 15);
        assert_eq!(
            s.timer_secs(),
            MAX_TIMER_SECS + 5 * summary.matches as i32
        );

        let steps = s.take_steps();
        assert_eq!(steps.len() as u32, summary.iterations);
        let cues = s.drain_feedback();
        assert_eq!(
            cues.iter().filter(|c| **c == Feedback::Match).count(),
            summary.matches
        );
        assert!(!MatchScanner::has_matches(s.grid()));
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut s = session();
        assert!(!s.apply_action(GameAction::CursorUp));
        assert!(!s.apply_action(GameAction::CursorLeft));
        assert!(s.apply_action(GameAction::CursorRight));
        assert_eq!(s.cursor(), Coord::new(1, 0));
        assert!(s.set_cursor(Coord::new(9, 0)).is_err());
    }

    #[test]
    fn test_timer_runs_out() {
        let mut s = PlaySession::new(3, 1);
        for _ in 0..59 {
            s.tick(1000);
        }
        assert!(!s.game_over());
        assert_eq!(s.timer_secs(), 1);
        assert!(s.drain_feedback().contains(&Feedback::Clock));

        s.tick(1000);
        assert!(s.game_over());
        assert_eq!(s.select(), SelectOutcome::Ignored);
        assert!(!s.tick(1000));
        assert_eq!(s.drain_feedback().last(), Some(&Feedback::GameOver));
    }

    #[test]
    fn test_partial_seconds_accumulate() {
        let mut s = PlaySession::new(3, 1);
        assert!(!s.tick(600));
        assert!(s.tick(600));
        assert_eq!(s.timer_secs(), MAX_TIMER_SECS - 1);
    }

    #[test]
    fn test_restart_resets_progress() {
        let mut s = PlaySession::new(9, 4);
        s.tick(5000);
        s.restart();
        assert_eq!(s.level(), 1);
        assert_eq!(s.score(), 0);
        assert_eq!(s.timer_secs(), MAX_TIMER_SECS);
        assert!(!MatchScanner::has_matches(s.grid()));
    }

    #[test]
    fn test_hint_is_a_matching_swap() {
        let mut s = PlaySession::new(77, 1);
        if let Some(hint) = s.request_hint() {
            let scratch = SwapValidator::trial(s.grid(), hint.a, hint.b).unwrap();
            assert!(MatchScanner::has_matches(&scratch));
            assert_eq!(s.snapshot().hint, Some((hint.a, hint.b)));
        }
    }
}
