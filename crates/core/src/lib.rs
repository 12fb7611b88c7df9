//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on rendering, input devices, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is reachable from plain method calls
//! - **Portable**: Can run behind a terminal, a canvas, or headless
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 game board with collision detection and line clearing
//! - [`piece`]: Tetromino shape matrices and clockwise rotation
//! - [`game_state`]: Phase machine, gravity clock, locking and spawning
//! - [`scoring`]: Points per line, level and gravity progression
//! - [`rng`]: Uniform random piece selection
//! - [`profile`]: Player entry gating the start of a game
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every spawn picks one of the 7 kinds with equal odds
//! - **Plain rotation**: clockwise only, no wall kicks; a blocked rotation is dropped
//! - **Immediate lock**: a piece locks as soon as a gravity step cannot move it
//! - **Scoring**: 100 points per cleared line, no multi-line bonus
//! - **Levels**: one level per 10 lines; gravity speeds up by 70ms per level down to 100ms
//!
//! # Example
//!
//! ```
//! use blockfall_core::{DropOutcome, GameState};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.move_right();
//! game.rotate();
//! while game.soft_drop() == DropOutcome::Moved {}
//!
//! assert_eq!(game.score(), 0);
//! assert!(!game.board().is_empty());
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed time. Gravity fires once the accumulated time reaches the drop
//! interval of the current level.

pub mod board;
pub mod game_state;
pub mod piece;
pub mod profile;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Row};
pub use game_state::{DropOutcome, GameState};
pub use piece::{Piece, Shape};
pub use profile::{PlayerProfile, ProfileError};
pub use rng::{PieceSource, Randomizer, ScriptedSource, SimpleRng};
pub use scoring::{drop_interval_ms, level_for_lines, line_clear_score};
pub use snapshot::GameSnapshot;
