//! Scoring module - points, time bonus and level goals
//!
//! - Every cleared tile is worth `(tier + 1) * BASE_SCORE`. Tiles shared by a
//!   horizontal and a vertical match are counted once per match.
//! - Every match adds `max(0, BASE_TIMER_ADD_SECS - (level - 1))` seconds.
//! - The score goal compounds: entering level `n` multiplies the previous
//!   goal by `floor(n * 1.25)`.

use crate::scanner::Match;
use crate::types::{BASE_TIMER_ADD_SECS, SCORE_GOAL_BASE, SCORE_GOAL_SCALE_DEN, SCORE_GOAL_SCALE_NUM};

/// Points for a set of matches.
pub fn calculate_match_score(matches: &[Match]) -> u32 {
    matches.iter().map(Match::score).sum()
}

/// Seconds added to the level timer per match.
pub fn time_bonus_per_match(level: u32) -> i32 {
    let penalty = level.saturating_sub(1).min(i32::MAX as u32) as i32;
    (BASE_TIMER_ADD_SECS - penalty).max(0)
}

/// Goal for `level`, given the goal of the level before it.
pub fn next_score_goal(previous_goal: u32, level: u32) -> u32 {
    let scale = level.saturating_mul(SCORE_GOAL_SCALE_NUM) / SCORE_GOAL_SCALE_DEN;
    previous_goal.saturating_mul(scale.max(1))
}

/// Goal of `level` when starting from level 1.
pub fn score_goal_for_level(level: u32) -> u32 {
    (1..=level.max(1)).fold(SCORE_GOAL_BASE, |goal, l| next_score_goal(goal, l))
}
