//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The board
//! is turn based, so there is no key-repeat handling beyond what the
//! terminal already does.

pub mod map;

pub use tui_match3_types as types;

pub use map::{handle_key_event, should_quit};
