//! TUI application state.

use crate::model::{Roster, RosterContext};
use crate::table::RosterTable;

/// Input mode for keyboard handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the filter line; characters apply in real time.
    Filter,
}

/// All mutable TUI state.
pub struct AppState {
    pub table: RosterTable,
    /// True until the first roster has been applied, and during reloads.
    pub loading: bool,
    pub input_mode: InputMode,
    /// Filter line being edited (mirrors the controller's query).
    pub filter_input: String,
    /// Row cursor within the visible page.
    pub cursor: usize,
    pub show_help: bool,
    pub status_message: Option<String>,
    /// Source description for the header line.
    pub source: String,
}

impl AppState {
    pub fn new(source: String) -> Self {
        Self {
            table: RosterTable::new(RosterContext::default()),
            loading: true,
            input_mode: InputMode::Normal,
            filter_input: String::new(),
            cursor: 0,
            show_help: false,
            status_message: None,
            source,
        }
    }

    /// Applies a freshly loaded roster: context and raw set are swapped
    /// wholesale, the selection is kept as-is.
    pub fn apply_roster(&mut self, roster: Roster, semester: Option<&str>) {
        let context = RosterContext::from_roster(&roster, semester);
        self.table.set_context(context);
        self.table.replace_raw_set(roster.members);
        self.loading = false;
        self.clamp_cursor();
    }

    /// Keeps the cursor inside the visible page after any projection change.
    pub fn clamp_cursor(&mut self) {
        let len = self.table.projection().visible.len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Member id under the cursor, if any row is visible.
    pub fn cursor_id(&mut self) -> Option<u64> {
        let cursor = self.cursor;
        self.table
            .projection()
            .visible
            .get(cursor)
            .map(|r| r.member_id)
    }

    /// Whether a page exists after the current one.
    pub fn has_next_page(&mut self) -> bool {
        let page = self.table.page();
        (page.index + 1) * page.size < self.table.projection().total_filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MemberRecord;

    fn roster(n: u64) -> Roster {
        Roster {
            org_id: "org".to_string(),
            members: (1..=n)
                .map(|i| MemberRecord {
                    member_id: i,
                    full_name: format!("Member {i}"),
                    status: "General".to_string(),
                    attendance_record: 0.5,
                    last_updated: "2024-01-01".to_string(),
                })
                .collect(),
            ..Roster::default()
        }
    }

    #[test]
    fn test_apply_roster_clears_loading_and_keeps_selection() {
        let mut state = AppState::new("test".to_string());
        assert!(state.loading);

        state.apply_roster(roster(3), None);
        assert!(!state.loading);

        state.table.toggle_select(1);
        state.apply_roster(roster(2), None);
        assert!(state.table.selection().is_selected(1));
    }

    #[test]
    fn test_cursor_clamps_to_visible_page() {
        let mut state = AppState::new("test".to_string());
        state.apply_roster(roster(7), None);

        state.cursor = 10;
        state.clamp_cursor();
        assert_eq!(state.cursor, 4); // page size 5

        // Second page holds two rows.
        state.table.set_page(1);
        state.clamp_cursor();
        assert_eq!(state.cursor, 1);
        assert!(state.cursor_id().is_some());
    }

    #[test]
    fn test_has_next_page_tracks_filtered_count() {
        let mut state = AppState::new("test".to_string());
        state.apply_roster(roster(7), None);
        assert!(state.has_next_page());

        state.table.set_page(1);
        assert!(!state.has_next_page());

        state.table.set_filter("member 1");
        assert!(!state.has_next_page());
    }
}
