//! Short-lived visual effects layered over the board.
//!
//! Both effects live in the view layer: the engine only reports lock events
//! and the game-over phase, the runner decides how long things stay on screen.

use crate::core::SimpleRng;
use crate::types::{LockEvent, GAME_OVER_FADE_STEP, PRAISE_MS};

/// Messages shown after a line clear
pub const PRAISES: [&str; 5] = ["Good Job", "Well done", "Great", "Brilliant", "Wonderful"];

/// Encouragement shown for a moment after each line clear
#[derive(Debug, Clone)]
pub struct PraiseBanner {
    message: Option<&'static str>,
    remaining_ms: u32,
    rng: SimpleRng,
}

impl PraiseBanner {
    pub fn new(seed: u32) -> Self {
        Self {
            message: None,
            remaining_ms: 0,
            rng: SimpleRng::new(seed),
        }
    }

    /// Pick a fresh message if the lock cleared anything
    pub fn on_lock(&mut self, event: &LockEvent) {
        if event.lines_cleared == 0 {
            return;
        }
        self.message = self.rng.choose(&PRAISES).copied();
        self.remaining_ms = PRAISE_MS;
    }

    pub fn update(&mut self, elapsed_ms: u32) {
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
        if self.remaining_ms == 0 {
            self.message = None;
        }
    }

    pub fn clear(&mut self) {
        self.message = None;
        self.remaining_ms = 0;
    }

    /// Message to draw this frame, if any
    pub fn message(&self) -> Option<&'static str> {
        self.message
    }
}

/// Opacity ramp of the game-over overlay, advanced once per rendered frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GameOverFade {
    alpha: f32,
}

impl GameOverFade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) {
        if self.alpha < 1.0 {
            self.alpha += GAME_OVER_FADE_STEP;
        }
    }

    pub fn reset(&mut self) {
        self.alpha = 0.0;
    }

    /// Opacity clamped to `[0, 1]`
    pub fn alpha(&self) -> f32 {
        self.alpha.min(1.0)
    }

    /// The restart hint only appears once the overlay is fully drawn
    pub fn complete(&self) -> bool {
        self.alpha >= 1.0
    }
}
