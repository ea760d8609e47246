//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity accumulator threshold: the piece descends one row each time the
/// accumulator passes this many ticks.
pub const GRAVITY_RATE: u8 = 30;

/// Extra accumulator ticks added per tick while soft drop is held.
pub const SOFT_DROP_BOOST: u8 = 3;

/// Spawn column for a fresh piece.
pub const SPAWN_X: i8 = 5;

/// Simulation rate. One logical tick per rendered frame.
pub const TICKS_PER_SECOND: u64 = 60;

/// The bag is topped up with a fresh shuffled permutation once it runs this low.
pub const BAG_REFILL_THRESHOLD: usize = 3;

/// Preview entries shown after the distinguished "next" piece.
pub const PREVIEW_COUNT: usize = 2;

/// Line-clear base scores, indexed by lines cleared (1..=4).
pub const LINE_SCORES: [u32; 5] = [0, 200, 400, 800, 1200];

/// Hard-drop scoring: points per reported cell, and the reported distance cap.
pub const HARD_DROP_CELL_SCORE: i32 = 5;
pub const HARD_DROP_DISTANCE_CAP: i32 = 12;

/// Tetromino piece kinds
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
    /// All seven kinds, in canonical order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Color identity stored in board cells (1..=7; 0 means empty).
    pub fn color(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

}

/// Discrete commands consumed by the simulation, at most one per tick.
///
/// Soft drop is level-triggered (a held state sampled every tick) and quit is
/// a frontend concern, so neither appears here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    RotateCw,
    HardDrop,
    Hold,
}
