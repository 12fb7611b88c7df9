//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Key repeat is
//! left to the terminal: a held arrow produces repeat events, each one a move.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, map_key_event, should_quit};
