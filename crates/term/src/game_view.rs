//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Largest terminal cell count per board cell, on either axis
pub const MAX_CELL_SIZE: u16 = 8;

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const OVER_RED: Rgb = Rgb::new(255, 0, 51);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// View-only state that does not live in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hud<'a> {
    pub player: Option<&'a str>,
    pub praise: Option<&'a str>,
    /// Game-over overlay opacity in `[0, 1]`
    pub fade: f32,
    /// Show the "press R" hint under the overlay
    pub restart_hint: bool,
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Terminal glyphs are about twice as tall as wide.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_SIZE),
            cell_h: cell_h.clamp(1, MAX_CELL_SIZE),
        }
    }

    /// Top-left corner of the board frame inside `viewport`
    fn origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        (
            viewport.width.saturating_sub(frame_w) / 2,
            viewport.height.saturating_sub(frame_h) / 2,
        )
    }

    fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_WIDTH as u16).saturating_mul(self.cell_w).saturating_add(2),
            (BOARD_HEIGHT as u16).saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &Hud<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (start_x, start_y) = self.origin(viewport);
        let (frame_w, frame_h) = self.frame_size();

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &code) in row.iter().enumerate() {
                match piece_from_cell(code) {
                    Some(kind) => self.draw_block(fb, start_x, start_y, x as u16, y as u16, kind),
                    None => self.draw_empty_cell(fb, start_x, start_y, x as u16, y as u16),
                }
            }
        }

        // Cells still above the top edge are not drawn.
        if let Some(active) = snap.active {
            for (x, y) in active.cells() {
                if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                    self.draw_block(fb, start_x, start_y, x as u16, y as u16, active.kind);
                }
            }
        }

        self.draw_side_panel(fb, snap, hud, viewport, start_x + frame_w + 2, start_y);

        if let Some(msg) = hud.praise {
            let style = CellStyle::new(Rgb::new(255, 215, 0), Rgb::new(0, 0, 0)).bold();
            let y = start_y.saturating_add(frame_h / 3);
            self.put_centered(fb, start_x, frame_w, y, msg, style);
        }

        if snap.game_over() {
            self.draw_game_over(fb, start_x, start_y, frame_w, frame_h, hud);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: &Hud<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(68, 68, 68), PLAY_BG).dim();
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let style = CellStyle::new(Rgb::of_kind(kind), PLAY_BG).bold();
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x.saturating_add(1 + cell_x * self.cell_w);
        let py = start_y.saturating_add(1 + cell_y * self.cell_h);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: &Hud<'_>,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x.saturating_add(8) > viewport.width {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        if let Some(name) = hud.player {
            fb.put_str(panel_x, y, "PLAYER", label);
            fb.put_str(panel_x, y + 1, name, value);
            y = y.saturating_add(3);
        }

        let stats = [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ];
        for (title, v) in stats {
            fb.put_str(panel_x, y, title, label);
            fb.put_u32(panel_x, y + 1, v, value);
            y = y.saturating_add(3);
        }
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        hud: &Hud<'_>,
    ) {
        let red = PLAY_BG.mix(OVER_RED, hud.fade);
        let cross = CellStyle::new(red, PLAY_BG).bold();

        // Two diagonals across the play area.
        let inner_w = frame_w - 2;
        let inner_h = frame_h - 2;
        for row in 0..inner_h {
            let t = row as u32 * inner_w.saturating_sub(1) as u32 / (inner_h.max(2) - 1) as u32;
            let y = start_y + 1 + row;
            fb.put_char(start_x + 1 + t as u16, y, '╲', cross);
            fb.put_char(start_x + inner_w - t as u16, y, '╱', cross);
        }

        let text = CellStyle::new(red, Rgb::new(0, 0, 0)).bold();
        let mid_y = start_y + frame_h / 2;
        self.put_centered(fb, start_x, frame_w, mid_y, "GAME OVER", text);

        if hud.restart_hint {
            let hint = CellStyle::default();
            self.put_centered(fb, start_x, frame_w, mid_y + 2, "press R", hint);
        }
    }

    fn put_centered(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        frame_w: u16,
        y: u16,
        text: &str,
        style: CellStyle,
    ) {
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, style);
    }
}

fn piece_from_cell(v: u8) -> Option<PieceKind> {
    match v {
        1 => Some(PieceKind::I),
        2 => Some(PieceKind::O),
        3 => Some(PieceKind::T),
        4 => Some(PieceKind::S),
        5 => Some(PieceKind::Z),
        6 => Some(PieceKind::J),
        7 => Some(PieceKind::L),
        _ => None,
    }
}
