//! Keyboard routing for the arcade screen.
//!
//! Maps raw crossterm key codes to UI-agnostic [`GameInput`] actions; the
//! host loop decides what each action means in the current game status.

use crate::game::Direction;
use crossterm::event::KeyCode;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Move(Direction),
    /// Space: cosmetic hop.
    Jump,
    /// `p`: playing <-> paused.
    TogglePause,
    /// Enter/`r`: restart from game over, resume from pause.
    Confirm,
    /// `q`/Esc: leave the game.
    Quit,
}

/// Map a key press to a game action. Unbound keys return `None`.
pub fn map_key(code: KeyCode) -> Option<GameInput> {
    match code {
        KeyCode::Left => Some(GameInput::Move(Direction::Left)),
        KeyCode::Right => Some(GameInput::Move(Direction::Right)),
        KeyCode::Up => Some(GameInput::Move(Direction::Up)),
        KeyCode::Down => Some(GameInput::Move(Direction::Down)),
        KeyCode::Char(' ') => Some(GameInput::Jump),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameInput::TogglePause),
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => Some(GameInput::Confirm),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}
