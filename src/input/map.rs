//! Key mapping from terminal events to input commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{Direction, InputCommand, Speed};

/// Map keyboard input to the command surface.
pub fn map_key_event(key: KeyEvent) -> Option<InputCommand> {
    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(InputCommand::Turn(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(InputCommand::Turn(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(InputCommand::Turn(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(InputCommand::Turn(Direction::Right))
        }

        // Pause toggle (also starts from idle, restarts from game over)
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(InputCommand::TogglePause)
        }

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputCommand::Restart),

        // Speed presets
        KeyCode::Char('1') => Some(InputCommand::SetSpeed(Speed::Slow)),
        KeyCode::Char('2') => Some(InputCommand::SetSpeed(Speed::Normal)),
        KeyCode::Char('3') => Some(InputCommand::SetSpeed(Speed::Fast)),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
