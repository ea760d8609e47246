//! GameView: maps a `GameSnapshot` into a character frame.
//!
//! This module is pure (no I/O). It can be unit-tested. The frame is a grid
//! of glyphs tagged with color identities; the renderer translates those to
//! terminal colors when flushing.

use crate::core::catalog::{PieceCatalog, PieceShape};
use crate::core::snapshot::GameSnapshot;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, PieceKind};

/// Color identity used by the frame: 0 = default, 1..=7 = piece colors,
/// [`GHOST_COLOR`] = dimmed landing preview.
pub const GHOST_COLOR: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub color: u8,
}

impl Default for Glyph {
    fn default() -> Self {
        Self { ch: ' ', color: 0 }
    }
}

/// A rendered character frame, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    rows: Vec<Vec<Glyph>>,
}

impl Frame {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            rows: vec![vec![Glyph::default(); width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn rows(&self) -> &[Vec<Glyph>] {
        &self.rows
    }

    fn put(&mut self, x: usize, y: usize, ch: char, color: u8) {
        if y < self.rows.len() && x < self.width {
            self.rows[y][x] = Glyph { ch, color };
        }
    }

    fn put_str(&mut self, x: usize, y: usize, s: &str) {
        for (i, ch) in s.chars().enumerate() {
            self.put(x + i, y, ch, 0);
        }
    }

    /// One board cell is two terminal columns wide.
    fn put_cell(&mut self, x: usize, y: usize, ch: char, color: u8) {
        self.put(x, y, ch, color);
        self.put(x + 1, y, ch, color);
    }
}

/// Frame layout: hold panel on the left, board in the middle, next/queue
/// panels on the right, like the original arrangement.
const HOLD_X: usize = 0;
const BOARD_X: usize = 13;
const PANEL_X: usize = 38;
const FRAME_W: usize = 50;
const FRAME_H: usize = 23;

pub struct GameView {
    catalog: PieceCatalog,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            catalog: PieceCatalog::new(),
        }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a snapshot into a fresh frame.
    pub fn render(&self, snap: &GameSnapshot) -> Frame {
        let mut frame = Frame::new(FRAME_W, FRAME_H);

        self.draw_board_frame(&mut frame);
        self.draw_stack(&mut frame, snap);
        self.draw_ghost(&mut frame, snap);
        self.draw_active(&mut frame, snap);
        self.draw_panels(&mut frame, snap);

        if snap.game_over {
            frame.put_str(BOARD_X + 6, FRAME_H - 1, "GAME OVER");
        }

        frame
    }

    fn draw_board_frame(&self, frame: &mut Frame) {
        let w = BOARD_WIDTH as usize * 2;
        frame.put(BOARD_X - 1, 0, '+', 0);
        frame.put(BOARD_X + w, 0, '+', 0);
        frame.put(BOARD_X - 1, BOARD_HEIGHT as usize + 1, '+', 0);
        frame.put(BOARD_X + w, BOARD_HEIGHT as usize + 1, '+', 0);
        for x in 0..w {
            frame.put(BOARD_X + x, 0, '-', 0);
            frame.put(BOARD_X + x, BOARD_HEIGHT as usize + 1, '-', 0);
        }
        for y in 0..BOARD_HEIGHT as usize {
            frame.put(BOARD_X - 1, y + 1, '|', 0);
            frame.put(BOARD_X + w, y + 1, '|', 0);
        }
    }

    fn draw_stack(&self, frame: &mut Frame, snap: &GameSnapshot) {
        for (y, row) in snap.board.iter().enumerate() {
            for (x, &color) in row.iter().enumerate() {
                if color != 0 {
                    self.draw_board_cell(frame, x as i8, y as i8, '#', color);
                }
            }
        }
    }

    fn draw_ghost(&self, frame: &mut Frame, snap: &GameSnapshot) {
        let (Some(active), Some(ghost_y)) = (snap.active, snap.ghost_y) else {
            return;
        };
        let shape = self.catalog.get(active.kind);
        for (i, j) in shape.cells(active.rotation) {
            self.draw_board_cell(frame, active.x + i, ghost_y + j, '.', GHOST_COLOR);
        }
    }

    fn draw_active(&self, frame: &mut Frame, snap: &GameSnapshot) {
        let Some(active) = snap.active else {
            return;
        };
        let shape = self.catalog.get(active.kind);
        for (i, j) in shape.cells(active.rotation) {
            // Cells above the top edge are clipped, not drawn.
            self.draw_board_cell(frame, active.x + i, active.y + j, '#', shape.color());
        }
    }

    fn draw_board_cell(&self, frame: &mut Frame, x: i8, y: i8, ch: char, color: u8) {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        frame.put_cell(BOARD_X + x as usize * 2, y as usize + 1, ch, color);
    }

    fn draw_panels(&self, frame: &mut Frame, snap: &GameSnapshot) {
        frame.put_str(HOLD_X, 0, "HOLD");
        if let Some(kind) = snap.hold {
            self.draw_mini(frame, HOLD_X, 2, kind);
        }

        frame.put_str(HOLD_X, 8, "SCORE");
        frame.put_str(HOLD_X, 9, &format!("{:012}", snap.score));

        frame.put_str(PANEL_X, 0, "NEXT");
        self.draw_mini(frame, PANEL_X, 2, snap.next);

        frame.put_str(PANEL_X, 8, "QUEUE");
        for (slot, &kind) in snap.preview.iter().enumerate() {
            self.draw_mini(frame, PANEL_X, 10 + slot * 5, kind);
        }
    }

    /// Draw a cropped shape matrix (all-empty border rows/columns trimmed).
    fn draw_mini(&self, frame: &mut Frame, x: usize, y: usize, kind: PieceKind) {
        let shape = self.catalog.get(kind);
        let (min_i, min_j) = crop_origin(shape);
        for (i, j) in shape.cells(0) {
            frame.put_cell(
                x + (i - min_i) as usize * 2,
                y + (j - min_j) as usize,
                '#',
                shape.color(),
            );
        }
    }
}

/// Top-left corner of the occupied bounding box of a shape's spawn rotation.
fn crop_origin(shape: &PieceShape) -> (i8, i8) {
    let mut min_i = i8::MAX;
    let mut min_j = i8::MAX;
    for (i, j) in shape.cells(0) {
        min_i = min_i.min(i);
        min_j = min_j.min(j);
    }
    (min_i, min_j)
}
