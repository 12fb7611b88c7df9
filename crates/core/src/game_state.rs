//! Game state module - manages the complete game state
//!
//! This module ties together the board, the falling piece, the piece source and
//! scoring. It owns the whole mutable state of one game; callers drive it with
//! discrete commands and a periodic `tick`, then read it back for rendering.
//!
//! Every command is all-or-nothing: a rejected move or rotation leaves the
//! state exactly as it was.

use log::{debug, info};

use crate::piece::Piece;
use crate::profile::PlayerProfile;
use crate::rng::{PieceSource, Randomizer};
use crate::scoring::{drop_interval_ms, level_for_lines, line_clear_score};
use crate::snapshot::GameSnapshot;
use crate::types::*;
use crate::Board;

/// Result of a one-row gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row
    Moved,
    /// The piece could not descend and was locked into the board
    Locked,
    /// The game is not active
    Ignored,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = Randomizer> {
    board: Board,
    /// Exactly one piece exists at a time. It is only exposed while Active.
    current: Piece,
    source: S,
    phase: GamePhase,
    player: Option<PlayerProfile>,
    /// Last lock event (consumed by the view).
    last_event: Option<LockEvent>,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    score: u32,
    lines: u32,
    /// Time accumulated since the last gravity step.
    drop_timer_ms: u32,
}

impl GameState<Randomizer> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_source(Randomizer::new(seed))
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create a new game drawing pieces from `source`
    pub fn with_source(mut source: S) -> Self {
        let current = Piece::new(source.next_kind());
        Self {
            board: Board::new(),
            current,
            source,
            phase: GamePhase::NotStarted,
            player: None,
            last_event: None,
            episode_id: 0,
            score: 0,
            lines: 0,
            drop_timer_ms: 0,
        }
    }

    /// Leave the NotStarted phase. Returns false if the game already started.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::NotStarted {
            return false;
        }
        self.phase = GamePhase::Active;
        self.drop_timer_ms = 0;
        match &self.player {
            Some(p) => info!("game started for {} (age {})", p.name(), p.age()),
            None => info!("game started"),
        }
        true
    }

    /// Record the player entry, then start
    pub fn start_with(&mut self, player: PlayerProfile) -> bool {
        if self.phase != GamePhase::NotStarted {
            return false;
        }
        self.player = Some(player);
        self.start()
    }

    /// Reset board, piece, score and lines. Allowed in every phase.
    ///
    /// A game that was already started comes back Active; an unstarted one
    /// stays NotStarted. The player entry is kept.
    pub fn restart(&mut self) {
        let final_score = self.score;
        self.board = Board::new();
        self.current = Piece::new(self.source.next_kind());
        self.score = 0;
        self.lines = 0;
        self.drop_timer_ms = 0;
        self.last_event = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        if self.phase != GamePhase::NotStarted {
            self.phase = GamePhase::Active;
        }
        info!(
            "game restarted (episode {}, previous score {})",
            self.episode_id, final_score
        );
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn started(&self) -> bool {
        self.phase != GamePhase::NotStarted
    }

    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Active
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current level, always `lines / 10 + 1`
    pub fn level(&self) -> u32 {
        level_for_lines(self.lines)
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Current gravity interval, derived from the level
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level())
    }

    /// Time accumulated toward the next gravity step
    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    pub fn player(&self) -> Option<&PlayerProfile> {
        self.player.as_ref()
    }

    /// The falling piece, only while Active
    pub fn active(&self) -> Option<&Piece> {
        match self.phase {
            GamePhase::Active => Some(&self.current),
            _ => None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active().copied();
        out.phase = self.phase;
        out.episode_id = self.episode_id;
        out.score = self.score;
        out.level = self.level();
        out.lines = self.lines;
        out.drop_interval_ms = self.drop_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Try to shift the active piece by `(dx, dy)`
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.is_active() || !self.board.is_valid(&self.current, dx, dy, None) {
            return false;
        }
        self.current = self.current.offset(dx, dy);
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Rotate clockwise if the rotated shape fits where the piece is.
    /// No wall kicks.
    pub fn rotate(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        let candidate = self.current.rotated();
        if !self.board.is_valid(&self.current, 0, 0, Some(&candidate)) {
            return false;
        }
        self.current.shape = candidate;
        true
    }

    /// One-row gravity step; locks the piece when it cannot descend
    pub fn soft_drop(&mut self) -> DropOutcome {
        if !self.is_active() {
            return DropOutcome::Ignored;
        }
        if self.try_move(0, 1) {
            return DropOutcome::Moved;
        }
        self.lock_piece();
        DropOutcome::Locked
    }

    /// Lock the current piece, clear lines, score them and spawn the next piece
    fn lock_piece(&mut self) {
        self.board.place(&self.current);
        let cleared = self.board.clear_lines();

        let level_before = self.level();
        let points = line_clear_score(cleared);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(cleared);
        let level = self.level();

        debug!(
            "locked {} at ({}, {}), cleared {} line(s), score {}",
            self.current.kind.as_str(),
            self.current.x,
            self.current.y,
            cleared,
            self.score
        );
        if level > level_before {
            info!(
                "level {} reached, drop interval {}ms",
                level,
                self.drop_interval_ms()
            );
        }

        self.last_event = Some(LockEvent {
            lines_cleared: cleared,
            points,
            level,
            leveled_up: level > level_before,
        });

        self.spawn_piece();
    }

    /// Replace the current piece; a blocked spawn ends the game
    fn spawn_piece(&mut self) -> bool {
        self.current = Piece::new(self.source.next_kind());
        if !self.board.is_valid(&self.current, 0, 0, None) {
            self.phase = GamePhase::GameOver;
            info!(
                "game over: score {}, lines {}, level {}",
                self.score,
                self.lines,
                self.level()
            );
            return false;
        }
        true
    }

    /// Advance the gravity clock by `elapsed_ms`.
    ///
    /// Once the accumulated time reaches the current drop interval the piece
    /// takes one gravity step and the clock restarts from zero. Returns whether
    /// a step happened.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.is_active() {
            return false;
        }
        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms < self.drop_interval_ms() {
            return false;
        }
        self.drop_timer_ms = 0;
        self.soft_drop();
        true
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop() != DropOutcome::Ignored,
            GameAction::Rotate => self.rotate(),
            GameAction::Start => self.start(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }
}

impl Default for GameState<Randomizer> {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedSource;

    fn o_game() -> GameState<ScriptedSource> {
        let mut state = GameState::with_source(ScriptedSource::repeat(PieceKind::O));
        state.start();
        state
    }

    fn drop_to_floor<S: PieceSource>(state: &mut GameState<S>) {
        while state.soft_drop() == DropOutcome::Moved {}
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert_eq!(state.phase(), GamePhase::NotStarted);
        assert_eq!(state.score(), 0);
        assert_eq!(state.level(), 1);
        assert_eq!(state.lines(), 0);
        assert_eq!(state.drop_interval_ms(), 800);
        assert!(state.active().is_none());
        assert!(state.board().is_empty());
    }

    #[test]
    fn test_commands_ignored_before_start() {
        let mut state = GameState::new(12345);
        assert!(!state.move_left());
        assert!(!state.rotate());
        assert_eq!(state.soft_drop(), DropOutcome::Ignored);
        assert!(!state.tick(10_000));
    }

    #[test]
    fn test_start_only_once() {
        let mut state = GameState::new(12345);
        assert!(state.start());
        assert!(!state.start());
        assert!(state.active().is_some());
    }

    #[test]
    fn test_start_with_player() {
        let mut state = GameState::new(1);
        let player = PlayerProfile::new("Kim", Some(21)).unwrap();
        assert!(state.start_with(player));
        assert_eq!(state.player().map(|p| p.name()), Some("Kim"));
    }

    #[test]
    fn test_tick_accumulates_until_interval() {
        let mut state = o_game();
        assert!(!state.tick(400));
        assert!(!state.tick(399));
        assert_eq!(state.active().unwrap().y, 0);
        assert!(state.tick(1));
        assert_eq!(state.active().unwrap().y, 1);
        assert_eq!(state.drop_timer_ms(), 0);
    }

    #[test]
    fn test_rejected_rotation_keeps_shape() {
        // I piece lying flat on the floor: rotating upright would poke below row 19.
        let mut state = GameState::with_source(ScriptedSource::repeat(PieceKind::I));
        state.start();
        for _ in 0..19 {
            assert_eq!(state.soft_drop(), DropOutcome::Moved);
        }
        let before = *state.active().unwrap();
        assert!(!state.rotate());
        assert_eq!(*state.active().unwrap(), before);
    }

    #[test]
    fn test_lock_event_reports_clear() {
        let mut state = o_game();
        drop_to_floor(&mut state);
        let ev = state.take_last_event().unwrap();
        assert_eq!(ev.lines_cleared, 0);
        assert_eq!(ev.points, 0);
        assert!(!ev.leveled_up);
        assert!(state.take_last_event().is_none());
    }

    #[test]
    fn test_restart_increments_episode_id() {
        let mut state = o_game();
        assert_eq!(state.episode_id(), 0);
        assert!(state.apply_action(GameAction::Restart));
        assert_eq!(state.episode_id(), 1);
        assert!(state.is_active());
    }

    #[test]
    fn test_restart_before_start_stays_not_started() {
        let mut state = GameState::new(5);
        state.restart();
        assert_eq!(state.phase(), GamePhase::NotStarted);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = o_game();
        state.soft_drop();
        let snap = state.snapshot();
        assert_eq!(snap.phase, GamePhase::Active);
        assert_eq!(snap.active.unwrap().y, 1);
        assert_eq!(snap.level, 1);
        assert_eq!(snap.drop_interval_ms, 800);
        assert!(snap.playable());
    }
}
