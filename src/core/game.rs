//! Game module - the per-tick orchestrator
//!
//! Ties the board, active piece, bag, hold slot, and score tracker together
//! under the fixed-tick contract: each tick spawns a piece if none is active,
//! applies at most one discrete command, samples the level-triggered soft
//! drop, advances gravity, and resolves a landing by placing the piece and
//! reporting cleared lines to scoring. Everything is synchronous and
//! single-owner; commands and gravity never interleave within a tick.

use crate::core::bag::Bag;
use crate::core::board::Board;
use crate::core::catalog::PieceCatalog;
use crate::core::hold::HoldSlot;
use crate::core::piece::ActivePiece;
use crate::core::scoring::ScoreTracker;
use crate::core::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Command, PieceKind, PREVIEW_COUNT};

/// Complete simulation state.
#[derive(Debug, Clone)]
pub struct Game {
    catalog: PieceCatalog,
    board: Board,
    active: Option<ActivePiece>,
    bag: Bag,
    hold: HoldSlot,
    score: ScoreTracker,
    game_over: bool,
}

impl Game {
    /// Create a new game with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        Self {
            catalog: PieceCatalog::new(),
            board: Board::new(),
            active: None,
            bag: Bag::new(seed),
            hold: HoldSlot::new(),
            score: ScoreTracker::new(),
            game_over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn catalog(&self) -> &PieceCatalog {
        &self.catalog
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold.peek()
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Advance the simulation by one tick.
    ///
    /// `command` carries this tick's discrete input (if any); `soft_drop` is
    /// the held state sampled every tick. A hold command that leaves no
    /// active piece ends the tick early; the next tick draws from the bag.
    pub fn tick(&mut self, command: Option<Command>, soft_drop: bool) {
        if self.game_over {
            return;
        }

        if self.active.is_none() {
            let shape = self.catalog.get(self.bag.pop());
            self.active = Some(ActivePiece::spawn(shape));
        }

        if let Some(cmd) = command {
            self.apply_command(cmd);
            if self.active.is_none() {
                return;
            }
        }

        let Some(mut piece) = self.active else {
            return;
        };
        let shape = self.catalog.get(piece.kind());

        if soft_drop {
            piece.soft_drop();
        }

        if piece.falling() {
            piece.fall(shape, &self.board);
            self.active = Some(piece);
        } else {
            // Landed on a previous tick: commit to the grid and resolve.
            let overflowed = self.board.place(&piece, shape);
            let cleared = self.board.clear_lines();
            self.score.on_lines_cleared(cleared.len());
            self.active = None;
            if overflowed {
                // Stack reached above the top edge.
                self.game_over = true;
            }
        }
    }

    fn apply_command(&mut self, command: Command) {
        let Some(mut piece) = self.active else {
            return;
        };
        let shape = self.catalog.get(piece.kind());

        match command {
            Command::MoveLeft => piece.try_move_left(shape, &self.board),
            Command::MoveRight => piece.try_move_right(shape, &self.board),
            Command::RotateCw => piece.try_rotate(shape, &self.board),
            Command::HardDrop => {
                let distance = piece.hard_drop(shape, &self.board);
                self.score.on_hard_drop(distance);
            }
            Command::Hold => {
                match self.hold.swap(piece.kind()) {
                    Some(previous) => {
                        self.active = Some(ActivePiece::spawn(self.catalog.get(previous)));
                    }
                    None => {
                        self.active = None;
                    }
                }
                return;
            }
        }

        self.active = Some(piece);
    }

    /// Row where the active piece would land if hard-dropped now.
    pub fn ghost_y(&self) -> Option<i8> {
        let piece = self.active?;
        let shape = self.catalog.get(piece.kind());
        Some(piece.y() + piece.ghost_distance(shape, &self.board))
    }

    /// Fill a snapshot in place (callers keep one and reuse it every tick).
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.hold = self.hold.peek();

        let upcoming = self.bag.peek_n(1 + PREVIEW_COUNT);
        out.next = upcoming[0];
        out.preview.copy_from_slice(&upcoming[1..]);

        out.score = self.score.score();
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}
