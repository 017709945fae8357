//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::table::Column;

use super::state::{AppState, InputMode};

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Reload the roster from its source.
    Reload,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match state.input_mode {
        InputMode::Normal => handle_normal_mode(state, key),
        InputMode::Filter => handle_filter_mode(state, key),
    }
}

/// Handles keys in normal mode.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        // Help popup
        KeyCode::Char('?') => {
            state.show_help = !state.show_help;
            KeyAction::None
        }
        KeyCode::Esc => {
            state.status_message = None;
            state.show_help = false;
            KeyAction::None
        }

        // Filter mode; editing resumes from the active query
        KeyCode::Char('/') => {
            state.input_mode = InputMode::Filter;
            state.filter_input = state.table.query().to_string();
            KeyAction::None
        }

        // Sorting: header-click equivalent per column
        KeyCode::Char('1') => sort_by(state, Column::FullName),
        KeyCode::Char('2') => sort_by(state, Column::Status),
        KeyCode::Char('3') => sort_by(state, Column::Attendance),
        KeyCode::Char('4') => sort_by(state, Column::LastUpdated),

        // Page navigation
        KeyCode::Left | KeyCode::Char('h') => {
            let index = state.table.page().index;
            if index > 0 {
                state.table.set_page(index - 1);
                state.cursor = 0;
            }
            KeyAction::None
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if state.has_next_page() {
                let index = state.table.page().index;
                state.table.set_page(index + 1);
                state.cursor = 0;
            }
            KeyAction::None
        }

        // Page size cycling
        KeyCode::Char('[') => {
            let size = state.table.page().prev_size();
            state.table.set_page_size(size);
            state.cursor = 0;
            KeyAction::None
        }
        KeyCode::Char(']') => {
            let size = state.table.page().next_size();
            state.table.set_page_size(size);
            state.cursor = 0;
            KeyAction::None
        }

        // Row cursor
        KeyCode::Up | KeyCode::Char('k') => {
            state.cursor = state.cursor.saturating_sub(1);
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.cursor = state.cursor.saturating_add(1);
            state.clamp_cursor();
            KeyAction::None
        }

        // Selection
        KeyCode::Char(' ') => {
            if let Some(id) = state.cursor_id() {
                state.table.toggle_select(id);
            }
            KeyAction::None
        }
        KeyCode::Char('a') => {
            state.table.select_all(true);
            KeyAction::None
        }
        KeyCode::Char('x') => {
            state.table.select_all(false);
            KeyAction::None
        }

        // Manual reload
        KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Reload,

        _ => KeyAction::None,
    }
}

fn sort_by(state: &mut AppState, column: Column) -> KeyAction {
    state.table.set_sort(column);
    state.cursor = 0;
    KeyAction::None
}

/// Handles keys in filter mode. The query applies in real time; Esc cancels
/// back to an empty filter, Enter keeps the typed one.
fn handle_filter_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => {
            state.input_mode = InputMode::Normal;
            state.filter_input.clear();
            state.table.set_filter("");
            state.cursor = 0;
            KeyAction::None
        }
        KeyCode::Enter => {
            state.input_mode = InputMode::Normal;
            KeyAction::None
        }
        KeyCode::Backspace => {
            state.filter_input.pop();
            apply_current_filter(state);
            KeyAction::None
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(KeyModifiers::ALT)
            {
                return KeyAction::None;
            }
            state.filter_input.push(c);
            apply_current_filter(state);
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn apply_current_filter(state: &mut AppState) {
    state.table.set_filter(state.filter_input.clone());
    state.cursor = 0;
}
