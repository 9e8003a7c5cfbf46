//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::AppState;

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Esc => {
            if state.show_help {
                state.show_help = false;
                KeyAction::None
            } else {
                KeyAction::Quit
            }
        }

        // Table navigation
        KeyCode::Tab | KeyCode::Right => {
            state.next_table();
            KeyAction::None
        }
        KeyCode::BackTab | KeyCode::Left => {
            state.prev_table();
            KeyAction::None
        }

        // Page navigation
        KeyCode::Home => {
            state.current_state_mut().page_first();
            KeyAction::None
        }
        KeyCode::End => {
            let total = state.current_diff().row_count();
            let page_size = state.config.page_size;
            state.current_state_mut().page_last(page_size, total);
            KeyAction::None
        }
        KeyCode::PageUp | KeyCode::Char('b') => {
            let page_size = state.config.page_size;
            state.current_state_mut().page_back(page_size);
            KeyAction::None
        }
        KeyCode::PageDown | KeyCode::Char(' ') | KeyCode::Char('f') => {
            let total = state.current_diff().row_count();
            let page_size = state.config.page_size;
            state.current_state_mut().page_forward(page_size, total);
            KeyAction::None
        }

        // Display toggles
        KeyCode::Char('e') | KeyCode::Char('E') => {
            state.current_state_mut().toggle_expanded();
            KeyAction::None
        }
        KeyCode::Char('h') | KeyCode::Char('H') => {
            state.current_state_mut().toggle_no_diff_cols();
            KeyAction::None
        }
        KeyCode::Char('0') => {
            state.current_state_mut().clear_width_overrides();
            KeyAction::None
        }

        // Help popup
        KeyCode::Char('?') => {
            state.show_help = !state.show_help;
            KeyAction::None
        }

        _ => KeyAction::None,
    }
}
