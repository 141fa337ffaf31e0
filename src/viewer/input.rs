//! Keyboard input handling for the interactive viewer.
//!
//! The menu accepts the digit keys of the original menu layout as well as
//! mnemonic letters for each transform.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Action selected by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    RotateCw,
    RotateCcw,
    MirrorHorizontal,
    MirrorVertical,
    Quit,
}

/// Maps a key event to a viewer action.
///
/// Returns `None` for keys outside the menu; the loop redraws with a
/// notice instead of acting.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('1') | KeyCode::Char('r') => Some(Action::RotateCw),
        KeyCode::Char('2') | KeyCode::Char('l') => Some(Action::RotateCcw),
        KeyCode::Char('3') | KeyCode::Char('h') => Some(Action::MirrorHorizontal),
        KeyCode::Char('4') | KeyCode::Char('v') => Some(Action::MirrorVertical),
        KeyCode::Char('5') | KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}
