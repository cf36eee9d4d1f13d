//! Headless simulator: plays hint-driven turns and prints a JSON report.
//!
//! Useful for checking determinism (same seed, same report) and for
//! watching cascade statistics across many turns.

use anyhow::{bail, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};

use tui_match3::core::{PlaySession, SelectOutcome};
use tui_match3::{logging, Config};

/// Play a match-three game without a terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// RNG seed (overrides MATCH3_SEED)
    #[arg(long)]
    seed: Option<u32>,

    /// Number of swaps to play
    #[arg(long, default_value_t = 100)]
    turns: u32,

    /// Starting level (overrides MATCH3_LEVEL)
    #[arg(long)]
    level: Option<u32>,

    /// Milliseconds of countdown to run after each swap
    #[arg(long, default_value_t = 0)]
    turn_ms: u32,

    /// Include the final board in the report
    #[arg(long)]
    board: bool,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    seed: u32,
    start_level: u32,
    turns_played: u32,
    level: u32,
    score: u32,
    score_goal: u32,
    timer_secs: i32,
    game_over: bool,
    matches: usize,
    tiles_cleared: usize,
    longest_chain: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    board: Option<Vec<Vec<Option<tui_match3::core::CellSnapshot>>>>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env();
    logging::init_stderr(&config.log_filter)?;

    let seed = args.seed.unwrap_or_else(|| config.seed_or_clock());
    let level = args.level.unwrap_or(config.level);
    if level == 0 {
        bail!("level must be at least 1");
    }

    let report = simulate(seed, level, &args);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn simulate(seed: u32, level: u32, args: &Args) -> Report {
    let mut session = PlaySession::new(seed, level);
    let mut report = Report {
        seed,
        start_level: level,
        ..Report::default()
    };
    info!(seed, level, turns = args.turns, "simulation started");

    for turn in 0..args.turns {
        if session.game_over() {
            break;
        }

        let Some(hint) = session.request_hint() else {
            break;
        };
        let (a, b) = (hint.a, hint.b);

        if let SelectOutcome::Resolved(summary) = session.swap(a, b) {
            debug!(turn, %a, %b, score = summary.score, iterations = summary.iterations, "turn");
            report.matches += summary.matches;
            report.tiles_cleared += summary.tiles_cleared;
            report.longest_chain = report.longest_chain.max(summary.iterations);
        }
        report.turns_played += 1;

        session.take_steps();
        session.drain_feedback();
        if args.turn_ms > 0 {
            session.tick(args.turn_ms);
        }
    }

    let snap = session.snapshot();
    report.level = snap.level;
    report.score = snap.score;
    report.score_goal = snap.score_goal;
    report.timer_secs = snap.timer_secs;
    report.game_over = snap.game_over;
    if args.board {
        report.board = Some(snap.board);
    }
    info!(score = report.score, level = report.level, "simulation finished");
    report
}
