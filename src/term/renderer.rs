//! TerminalRenderer: flushes a character frame to a real terminal.
//!
//! This module intentionally keeps the drawing API small: full redraw every
//! frame, with color changes batched into runs. The frame is small enough
//! that diffing buys nothing here.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::view::{Frame, GHOST_COLOR};

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        let mut current: Option<u8> = None;
        for (y, row) in frame.rows().iter().enumerate() {
            self.stdout.queue(cursor::MoveTo(0, y as u16))?;
            for glyph in row {
                if current != Some(glyph.color) {
                    self.stdout.queue(SetForegroundColor(color_for(glyph.color)))?;
                    current = Some(glyph.color);
                }
                self.stdout.queue(Print(glyph.ch))?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Piece color identities to terminal colors, following the original
/// palette: cyan, yellow, purple, green, red, blue, orange.
fn color_for(id: u8) -> Color {
    match id {
        1 => Color::Cyan,
        2 => Color::Yellow,
        3 => Color::Magenta,
        4 => Color::Green,
        5 => Color::Red,
        6 => Color::Blue,
        7 => Color::DarkYellow,
        GHOST_COLOR => Color::DarkGrey,
        _ => Color::Reset,
    }
}
