//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids widget
//! libraries and renders into a plain framebuffer that is flushed to the
//! terminal backend.
//!
//! - `core` stays deterministic and testable; this crate only reads snapshots
//! - 2 characters per board cell keep the board roughly square
//! - praise and game-over effects are view state, not engine state

pub mod effects;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use effects::{GameOverFade, PraiseBanner, PRAISES};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Hud, Viewport};
pub use renderer::{encode_changed_rows_into, encode_full_into, TerminalRenderer};
