//! Piece catalog - the seven tetromino shapes and their rotations
//!
//! Shapes are square boolean matrices indexed `[col][row]` to match the
//! board's `[x][y]` addressing. All four rotations are derived by quarter-turn
//! matrix rotation when the catalog is built, and never mutated afterwards.

use crate::types::PieceKind;

/// Largest shape side (the I piece uses a 4x4 matrix).
pub const MAX_SIDE: usize = 4;

/// One occupancy matrix. Cells outside `side` are always false.
pub type ShapeMatrix = [[bool; MAX_SIDE]; MAX_SIDE];

/// An immutable tetromino shape: occupancy matrices for all four rotation
/// states, plus the color identity written into board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceShape {
    kind: PieceKind,
    side: usize,
    rotations: [ShapeMatrix; 4],
}

impl PieceShape {
    fn new(kind: PieceKind, side: usize, base: ShapeMatrix) -> Self {
        let mut rotations = [base; 4];
        for r in 1..4 {
            rotations[r] = rotate_quarter(&rotations[r - 1], side);
        }
        Self {
            kind,
            side,
            rotations,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Side length of the (square) occupancy matrix.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Color identity (1..=7) written into board cells.
    pub fn color(&self) -> u8 {
        self.kind.color()
    }

    /// Raw occupancy matrix for a rotation state. Rotation indices wrap, so
    /// callers may pass `rotation + 1` when probing the next state.
    pub fn matrix(&self, rotation: usize) -> &ShapeMatrix {
        &self.rotations[rotation % 4]
    }

    /// Iterate the occupied `(col, row)` offsets of a rotation state.
    pub fn cells(&self, rotation: usize) -> impl Iterator<Item = (i8, i8)> + '_ {
        let m = self.matrix(rotation);
        let side = self.side;
        (0..side).flat_map(move |i| {
            (0..side).filter_map(move |j| m[i][j].then_some((i as i8, j as i8)))
        })
    }
}

/// Quarter-turn rotation of the top-left `side`-square of a matrix:
/// `out[i][j] = in[j][side-1-i]`.
fn rotate_quarter(m: &ShapeMatrix, side: usize) -> ShapeMatrix {
    let mut out = [[false; MAX_SIDE]; MAX_SIDE];
    for i in 0..side {
        for j in 0..side {
            out[i][j] = m[j][side - 1 - i];
        }
    }
    out
}

/// Build a `ShapeMatrix` from row-major literal rows (transposed into the
/// `[col][row]` convention).
fn matrix_from_rows(rows: &[&[u8]]) -> (usize, ShapeMatrix) {
    let side = rows.len();
    let mut m = [[false; MAX_SIDE]; MAX_SIDE];
    for (i, row) in rows.iter().enumerate() {
        for (j, &cell) in row.iter().enumerate() {
            m[i][j] = cell != 0;
        }
    }
    (side, m)
}

/// Immutable registry of the seven canonical shapes.
///
/// Built once at startup and passed by shared reference into the board and
/// active piece; there is no post-construction mutation.
#[derive(Debug, Clone)]
pub struct PieceCatalog {
    shapes: [PieceShape; 7],
}

impl PieceCatalog {
    pub fn new() -> Self {
        let shapes = [
            shape(PieceKind::I, &[&[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]]),
            shape(PieceKind::O, &[&[1, 1], &[1, 1]]),
            shape(PieceKind::T, &[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]]),
            shape(PieceKind::S, &[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]]),
            shape(PieceKind::Z, &[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]]),
            shape(PieceKind::J, &[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]]),
            shape(PieceKind::L, &[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]]),
        ];
        Self { shapes }
    }

    pub fn get(&self, kind: PieceKind) -> &PieceShape {
        &self.shapes[kind as usize]
    }
}

impl Default for PieceCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn shape(kind: PieceKind, rows: &[&[u8]]) -> PieceShape {
    let (side, m) = matrix_from_rows(rows);
    PieceShape::new(kind, side, m)
}
