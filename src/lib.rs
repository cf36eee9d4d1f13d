//! TUI match-three (workspace facade crate).
//!
//! The game logic, input mapping and terminal rendering live in dedicated
//! crates under `crates/`; this package re-exports them under one name and
//! adds the runtime configuration and logging setup shared by the binaries.

pub mod config;
pub mod logging;

pub use tui_match3_core as core;
pub use tui_match3_input as input;
pub use tui_match3_term as term;
pub use tui_match3_types as types;

pub use config::Config;
