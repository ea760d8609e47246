//! Terminal runner (default binary).
//!
//! Drives the simulation at a fixed 60 ticks per second: render a snapshot,
//! gather input until the tick boundary, then advance the core with at most
//! one discrete command plus the sampled soft-drop state.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::Game;
use blockfall::input::{is_soft_drop, map_key, should_quit, SoftDropState};
use blockfall::term::{GameView, TerminalRenderer};
use blockfall::types::{Command, TICKS_PER_SECOND};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos().wrapping_add(d.as_secs() as u32))
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = Game::new(seed_from_clock());
    let view = GameView::new();

    let tick_duration = Duration::from_millis(1000 / TICKS_PER_SECOND);
    let mut last_tick = Instant::now();
    let mut pending: Option<Command> = None;
    let mut soft_drop = SoftDropState::new();

    loop {
        term.draw(&view.render(&game.snapshot()))?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if is_soft_drop(key.code) {
                        soft_drop.press();
                    } else if pending.is_none() {
                        pending = map_key(key.code);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(pending.take(), soft_drop.held());
            soft_drop.advance();
        }
    }
}
