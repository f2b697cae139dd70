//! Key mapping from terminal events to user actions.
//!
//! | Key | Action |
//! |-----|--------|
//! | `u` `l` `f` `r` `b` `d` | clockwise move of that face |
//! | `U` `L` `F` `R` `B` `D` | prime (counter-clockwise) move |
//! | `Space` | random scramble |
//! | `Enter` | solve |
//! | `Backspace` / `c` | reset |
//! | `q` / `Ctrl-C` | quit |

use crate::types::{Face, Move, UserAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to user actions.
pub fn handle_key_event(key: KeyEvent) -> Option<UserAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }

    match key.code {
        KeyCode::Char(' ') => Some(UserAction::Scramble),
        KeyCode::Enter => Some(UserAction::Solve),
        KeyCode::Backspace | KeyCode::Char('c') | KeyCode::Char('C') => Some(UserAction::Reset),
        KeyCode::Char(ch) => move_for_char(ch).map(UserAction::AddMove),
        _ => None,
    }
}

/// Lower-case face letter is a clockwise turn, upper-case is prime.
fn move_for_char(ch: char) -> Option<Move> {
    let face = Face::from_str(ch.encode_utf8(&mut [0u8; 4]))?;
    if ch.is_ascii_uppercase() {
        Some(Move::ccw(face))
    } else {
        Some(Move::cw(face))
    }
}

/// Check if key should quit the app.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
