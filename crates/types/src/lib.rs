//! Plain data shared by every blockfall crate: piece kinds, game phases,
//! player commands and the tuning constants of the game.
//!
//! Nothing here depends on the engine or on a terminal, so the input mapping
//! and the view can name these types without pulling either in.
//!
//! The playfield is 10 columns by 20 rows, row 0 at the top. Gravity starts at
//! one row per 800 ms and speeds up by 70 ms per level down to a floor of
//! 100 ms, which is reached at level 11.
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(PieceKind::T.color_hex(), "#a000f0");
//! assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
//! assert_eq!(BOARD_WIDTH, 10);
//! ```

/// Columns on the board
pub const BOARD_WIDTH: u8 = 10;

/// Rows on the board
pub const BOARD_HEIGHT: u8 = 20;

/// Frame period of the terminal runner, in ms
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1
pub const BASE_DROP_MS: u32 = 800;

/// Gravity speed-up per level
pub const DROP_STEP_MS: u32 = 70;

/// Gravity never gets faster than this
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points awarded per cleared line. Simultaneous clears score linearly.
pub const POINTS_PER_LINE: u32 = 100;

/// Visibility of the praise banner after a line clear
pub const PRAISE_MS: u32 = 1200;

/// Game-over overlay opacity gained per rendered frame
pub const GAME_OVER_FADE_STEP: f32 = 0.03;

/// Age assumed when the player leaves it blank
pub const DEFAULT_PLAYER_AGE: u8 = 18;

/// The seven tetromino piece kinds
///
/// Each kind carries a fixed color, which doubles as the identity tag
/// written into board cells:
/// - **I**: Cyan bar
/// - **O**: Yellow 2x2 square
/// - **T**: Purple T
/// - **S**: Green S
/// - **Z**: Red Z
/// - **J**: Blue J
/// - **L**: Orange L
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in canonical order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Look a kind up by its letter, ignoring case.
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
    }

    /// Convert to uppercase letter
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }

    /// Fill color as a CSS-style hex string
    pub fn color_hex(&self) -> &'static str {
        match self {
            PieceKind::I => "#00f0f0",
            PieceKind::O => "#f0f000",
            PieceKind::T => "#a000f0",
            PieceKind::S => "#00f000",
            PieceKind::Z => "#f00000",
            PieceKind::J => "#0000f0",
            PieceKind::L => "#f0a000",
        }
    }

    /// Fill color as an `(r, g, b)` triple
    pub fn color_rgb(&self) -> (u8, u8, u8) {
        match self {
            PieceKind::I => (0x00, 0xf0, 0xf0),
            PieceKind::O => (0xf0, 0xf0, 0x00),
            PieceKind::T => (0xa0, 0x00, 0xf0),
            PieceKind::S => (0x00, 0xf0, 0x00),
            PieceKind::Z => (0xf0, 0x00, 0x00),
            PieceKind::J => (0x00, 0x00, 0xf0),
            PieceKind::L => (0xf0, 0xa0, 0x00),
        }
    }
}

/// Lifecycle of a single game
///
/// `NotStarted -> Active -> GameOver`. Restart is allowed from any phase and
/// never goes back to `NotStarted` once the game has been started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    /// Waiting for the player entry to complete
    #[default]
    NotStarted,
    /// A piece is falling and commands are accepted
    Active,
    /// The spawn position was blocked; only restart is accepted
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::NotStarted => "notStarted",
            GamePhase::Active => "active",
            GamePhase::GameOver => "gameOver",
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// These are the discrete commands the input adapter produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down, locking it if it cannot descend
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Leave the NotStarted phase
    Start,
    /// Reset the game (allowed at any time)
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("softDrop"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "start" => Some(GameAction::Start),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::Start => "start",
            GameAction::Restart => "restart",
        }
    }
}

/// Event emitted after a piece locks.
///
/// Consumed by the view layer (praise banner) via `take_last_event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub points: u32,
    /// Level after the lock was scored
    pub level: u32,
    pub leveled_up: bool,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(BASE_DROP_MS, 800);
        assert_eq!(DROP_STEP_MS, 70);
        assert_eq!(DROP_INTERVAL_MIN_MS, 100);
        assert_eq!(LINES_PER_LEVEL, 10);
        assert_eq!(POINTS_PER_LINE, 100);
        assert_eq!(PRAISE_MS, 1200);
    }

    #[test]
    fn piece_kind_round_trips_through_letters() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn color_hex_matches_rgb() {
        for kind in PieceKind::ALL {
            let (r, g, b) = kind.color_rgb();
            assert_eq!(kind.color_hex(), format!("#{:02x}{:02x}{:02x}", r, g, b));
        }
    }

    #[test]
    fn game_action_strings() {
        let all = [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::Rotate,
            GameAction::Start,
            GameAction::Restart,
        ];
        for action in all {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn phase_defaults_to_not_started() {
        assert_eq!(GamePhase::default(), GamePhase::NotStarted);
    }
}
