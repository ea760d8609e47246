//! Key mapping for terminal play.
//!
//! Translates crossterm key events into simulation commands. At most one
//! discrete command reaches the core per tick; soft drop is a held state,
//! approximated here with a short grace window because most terminals never
//! emit key release events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Command;

/// Ticks a soft-drop press stays "held" without a repeat event (~150ms).
const SOFT_DROP_GRACE_TICKS: u8 = 9;

/// Map a key press to a discrete command.
pub fn map_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(Command::RotateCw),
        KeyCode::Up => Some(Command::HardDrop),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(Command::Hold),
        _ => None,
    }
}

/// Down arrow accelerates gravity while held.
pub fn is_soft_drop(code: KeyCode) -> bool {
    code == KeyCode::Down
}

/// Esc, q, or Ctrl-C terminates immediately.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Level-triggered soft-drop state for terminals without key releases: each
/// press (or auto-repeat) renews a grace window, and the state reads as held
/// until the window runs out.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoftDropState {
    ticks_left: u8,
}

impl SoftDropState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self) {
        self.ticks_left = SOFT_DROP_GRACE_TICKS;
    }

    pub fn held(&self) -> bool {
        self.ticks_left > 0
    }

    /// Call once per tick.
    pub fn advance(&mut self) {
        self.ticks_left = self.ticks_left.saturating_sub(1);
    }
}
