//! Piece module - tetromino shapes and clockwise rotation
//!
//! A shape is a small boolean matrix (at most 4x4) stored inline so that
//! pieces stay `Copy` and rotation never allocates. Rotation is a pure matrix
//! transform: the current orientation is not tracked as an angle, it is simply
//! whatever the matrix looks like after N clockwise turns.

use crate::types::{PieceKind, BOARD_WIDTH};

/// Largest side of any tetromino matrix
pub const MAX_SHAPE_DIM: usize = 4;

/// Boolean occupancy matrix of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from row slices. Panics if the matrix is ragged or larger than 4x4.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(!rows.is_empty() && rows.len() <= MAX_SHAPE_DIM);
        let cols = rows[0].len();
        assert!(cols > 0 && cols <= MAX_SHAPE_DIM);

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), cols, "ragged shape row {}", r);
            for (c, &v) in row.iter().enumerate() {
                cells[r][c] = v != 0;
            }
        }
        Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            cells,
        }
    }

    /// Canonical spawn shape for a piece kind
    pub fn base(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_rows(&[&[1, 1, 1, 1]]),
            PieceKind::O => Self::from_rows(&[&[1, 1], &[1, 1]]),
            PieceKind::T => Self::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
            PieceKind::S => Self::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
            PieceKind::Z => Self::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
            PieceKind::J => Self::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
            PieceKind::L => Self::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Occupancy at (row, col); out-of-range reads are empty
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.cells[row][col]
    }

    /// Width of the first row (spawn centering uses this)
    pub fn first_row_width(&self) -> usize {
        self.cols()
    }

    /// Clockwise rotation: an R x C matrix becomes C x R with
    /// `new[i][j] = old[R - 1 - j][i]` (transpose, then reverse each row).
    pub fn rotated_cw(&self) -> Self {
        let r = self.rows();
        let c = self.cols();
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, out_row) in cells.iter_mut().enumerate().take(c) {
            for (j, out) in out_row.iter_mut().enumerate().take(r) {
                *out = self.cells[r - 1 - j][i];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Occupied `(col, row)` offsets in row-major order
    pub fn offsets(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows()).flat_map(move |row| {
            (0..self.cols())
                .filter(move |&col| self.cells[row][col])
                .map(move |col| (col as i8, row as i8))
        })
    }
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at its spawn position: horizontally centered, y = 0
    pub fn new(kind: PieceKind) -> Self {
        let shape = Shape::base(kind);
        let half_width = shape.first_row_width().div_ceil(2) as i8;
        Self {
            kind,
            shape,
            x: (BOARD_WIDTH / 2) as i8 - half_width,
            y: 0,
        }
    }

    /// Create a piece from its letter.
    ///
    /// An unknown name is a caller bug, so this panics instead of picking a default.
    pub fn named(name: &str) -> Self {
        match PieceKind::from_str(name) {
            Some(kind) => Self::new(kind),
            None => panic!("unknown piece type: {:?}", name),
        }
    }

    /// Candidate shape after one clockwise turn. The piece itself is untouched.
    pub fn rotated(&self) -> Shape {
        self.shape.rotated_cw()
    }

    /// Commit one clockwise turn without consulting any board
    pub fn rotate(&mut self) {
        self.shape = self.rotated();
    }

    /// Same piece shifted by `(dx, dy)`
    pub fn offset(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Absolute board coordinates of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .offsets()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}
