//! Hold slot - sets one piece aside for later
//!
//! Holds at most one piece kind. A swap stores the incoming kind and hands
//! back the previous occupant; when the slot was empty the caller gets
//! nothing and must draw from the bag instead. There is no once-per-placement
//! lock: holding repeatedly in one placement cycle is allowed.

use crate::types::PieceKind;

#[derive(Debug, Clone, Copy, Default)]
pub struct HoldSlot {
    held: Option<PieceKind>,
}

impl HoldSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `kind` and return the previous occupant, if any.
    pub fn swap(&mut self, kind: PieceKind) -> Option<PieceKind> {
        self.held.replace(kind)
    }

    /// Current occupant without swapping.
    pub fn peek(&self) -> Option<PieceKind> {
        self.held
    }
}
