//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of the
//! piece that filled it. Rows are stored top to bottom in a fixed array, so the
//! board never allocates.
//!
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom). Pieces may hang above the top edge (y < 0) while spawning or
//! rotating; those cells are only checked against the side walls.

use arrayvec::ArrayVec;

use crate::piece::{Piece, Shape};
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// One board row, left to right
pub type Row = [Cell; WIDTH];

const EMPTY_ROW: Row = [None; WIDTH];

/// The game board - 20 rows of 10 cells
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: [Row; HEIGHT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            rows: [EMPTY_ROW; HEIGHT],
        }
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    #[inline(always)]
    fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && (x as usize) < WIDTH && y >= 0 && (y as usize) < HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        if Self::in_bounds(x, y) {
            Some(self.rows[y as usize][x as usize])
        } else {
            None
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check whether `piece`, shifted by `(dx, dy)` and optionally wearing
    /// `candidate` instead of its own shape, fits on the board.
    ///
    /// A placement is rejected when any occupied cell is left of column 0,
    /// right of the last column, below the last row, or on a filled cell.
    /// Cells above the top edge are accepted.
    pub fn is_valid(&self, piece: &Piece, dx: i8, dy: i8, candidate: Option<&Shape>) -> bool {
        let shape = candidate.unwrap_or(&piece.shape);
        let base_x = piece.x + dx;
        let base_y = piece.y + dy;

        shape.offsets().all(|(cx, cy)| {
            let x = base_x + cx;
            let y = base_y + cy;
            if x < 0 || x as usize >= WIDTH || y >= HEIGHT as i8 {
                return false;
            }
            y < 0 || self.rows[y as usize][x as usize].is_none()
        })
    }

    /// Write the piece's kind into every cell it covers on the visible board.
    ///
    /// No validation: the caller has already checked the resting position.
    /// Cells above the top edge are dropped.
    pub fn place(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            if Self::in_bounds(x, y) {
                self.rows[y as usize][x as usize] = Some(piece.kind);
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        y < HEIGHT && self.rows[y].iter().all(|cell| cell.is_some())
    }

    /// Remove every full row and return how many were removed.
    pub fn clear_lines(&mut self) -> u32 {
        self.clear_full_rows().len() as u32
    }

    /// Remove every full row and return the original row indices that were
    /// cleared (sorted bottom to top).
    ///
    /// Non-full rows keep their relative order and settle at the bottom; the
    /// freed rows at the top become empty. Single bottom-up pass, no allocation.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, HEIGHT> {
        let mut cleared_rows = ArrayVec::new();
        let mut write_y = HEIGHT;

        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    self.rows[write_y] = self.rows[read_y];
                }
            }
        }

        for row in &mut self.rows[..write_y] {
            *row = EMPTY_ROW;
        }

        cleared_rows
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> &[Row; HEIGHT] {
        &self.rows
    }

    /// A single row; `None` past the bottom
    pub fn row(&self, y: usize) -> Option<&Row> {
        self.rows.get(y)
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.rows.iter().flatten().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.filled_count() == 0
    }

    /// Export as a `u8` grid (0 = empty, 1..=7 = I, O, T, S, Z, J, L)
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (dst, src) in out.iter_mut().zip(self.rows.iter()) {
            for (d, s) in dst.iter_mut().zip(src.iter()) {
                *d = cell_code(*s);
            }
        }
    }

    /// Build a board from rows (top to bottom)
    #[cfg(test)]
    pub fn from_rows(rows: [Row; HEIGHT]) -> Self {
        Self { rows }
    }
}

fn cell_code(cell: Cell) -> u8 {
    match cell {
        None => 0,
        Some(PieceKind::I) => 1,
        Some(PieceKind::O) => 2,
        Some(PieceKind::T) => 3,
        Some(PieceKind::S) => 4,
        Some(PieceKind::Z) => 5,
        Some(PieceKind::J) => 6,
        Some(PieceKind::L) => 7,
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
