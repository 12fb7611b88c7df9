use crate::piece::Piece;
use crate::types::{GamePhase, BOARD_HEIGHT, BOARD_WIDTH};

/// Read-only copy of everything a renderer needs for one frame.
///
/// Board cells are encoded as `u8`: 0 = empty, 1..=7 = I, O, T, S, Z, J, L.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<Piece>,
    pub phase: GamePhase,
    pub episode_id: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        self.phase == GamePhase::Active
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            phase: GamePhase::NotStarted,
            episode_id: 0,
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_ms: crate::types::BASE_DROP_MS,
        }
    }
}
