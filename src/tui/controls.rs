//! Keyboard input handling for the TUI.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::runtime::{App, SCRUB_STEP_MINUTES};

/// Maps a key event to an application action.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some terminals.
pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit = true,
        KeyCode::Tab => app.switch_view(),
        KeyCode::Char(' ') => app.clock.toggle_playing(now),
        KeyCode::Left => app.scrub_by(-SCRUB_STEP_MINUTES),
        KeyCode::Right => app.scrub_by(SCRUB_STEP_MINUTES),
        KeyCode::Char(c @ '1'..='4') => app.select_preset(usize::from(c as u8 - b'1')),
        KeyCode::Char('e') => app.scenario.toggle_ev(),
        KeyCode::Char('b') => app.scenario.toggle_battery(),
        _ => {}
    }
}
