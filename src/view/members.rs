//! Member table view model.

use crate::model::MemberRecord;
use crate::table::{Column, Direction, RosterTable};
use crate::util::display_timestamp;

use super::common::{RowStyleClass, TableViewModel, ViewCell, ViewRow};

/// Number of placeholder rows shown while a load is in flight.
pub const LOADING_ROWS: usize = 5;

const WIDTHS: [u16; 5] = [3, 24, 16, 12, 18];

/// Checkbox column first, then one column per sortable [`Column`].
fn headers() -> Vec<String> {
    std::iter::once(String::new())
        .chain(Column::all().iter().map(|c| c.title().to_string()))
        .collect()
}

fn status_style(status: &str) -> RowStyleClass {
    match status {
        "Active" => RowStyleClass::Active,
        "CarryoverActive" => RowStyleClass::Accent,
        "Exempt" => RowStyleClass::Warning,
        "Alumni" => RowStyleClass::Dimmed,
        _ => RowStyleClass::Normal,
    }
}

/// Table column index of a sort column. Offset by one for the checkbox
/// column, which is not sortable.
fn sort_column_index(column: Column) -> usize {
    match column {
        Column::FullName => 1,
        Column::Status => 2,
        Column::Attendance => 3,
        Column::LastUpdated => 4,
    }
}

fn record_row(record: &MemberRecord, selected: bool) -> ViewRow<u64> {
    let checkbox = if selected { "[x]" } else { "[ ]" };
    ViewRow {
        id: Some(record.member_id),
        cells: vec![
            ViewCell::plain(checkbox.to_string()),
            ViewCell::plain(record.full_name.clone()),
            ViewCell::styled(record.status.clone(), status_style(&record.status)),
            ViewCell::plain(format!("{:.0}%", record.attendance_record * 100.0)),
            ViewCell::plain(display_timestamp(&record.last_updated)),
        ],
        style: RowStyleClass::Normal,
    }
}

fn placeholder_row() -> ViewRow<u64> {
    ViewRow {
        id: None,
        cells: WIDTHS
            .iter()
            .map(|w| ViewCell::plain("\u{2592}".repeat(w.saturating_sub(1) as usize)))
            .collect(),
        style: RowStyleClass::Dimmed,
    }
}

/// Builds the member table view model from the controller's current state.
///
/// While `loading` is set, the rows are replaced by [`LOADING_ROWS`]
/// dimmed placeholders; the headers and sort indicator stay live.
pub fn build_members_view(table: &mut RosterTable, loading: bool) -> TableViewModel<u64> {
    let sort = table.sort();
    let sort_column = sort_column_index(sort.column);
    let sort_ascending = sort.direction == Direction::Ascending;

    let headers = headers();
    let rows = if loading {
        (0..LOADING_ROWS).map(|_| placeholder_row()).collect()
    } else {
        let selection = table.selection().clone();
        table
            .projection()
            .visible
            .iter()
            .map(|r| record_row(r, selection.is_selected(r.member_id)))
            .collect()
    };

    TableViewModel {
        headers,
        widths: WIDTHS.to_vec(),
        rows,
        sort_column,
        sort_ascending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RosterContext;

    fn member(id: u64, name: &str, status: &str, updated: &str) -> MemberRecord {
        MemberRecord {
            member_id: id,
            full_name: name.to_string(),
            status: status.to_string(),
            attendance_record: 0.5,
            last_updated: updated.to_string(),
        }
    }

    fn table() -> RosterTable {
        let mut table = RosterTable::new(RosterContext::default());
        table.replace_raw_set(vec![
            member(1, "Alice", "Active", "2024-06-01"),
            member(2, "Bob", "Alumni", "2024-01-01"),
        ]);
        table
    }

    #[test]
    fn test_loading_shows_fixed_placeholder_rows() {
        let mut t = table();
        let view = build_members_view(&mut t, true);
        assert_eq!(view.rows.len(), LOADING_ROWS);
        assert!(view.rows.iter().all(|r| r.id.is_none()));
        assert!(view.rows.iter().all(|r| r.style == RowStyleClass::Dimmed));
    }

    #[test]
    fn test_checkbox_reflects_selection() {
        let mut t = table();
        t.toggle_select(1);

        let view = build_members_view(&mut t, false);
        // Default sort: LastUpdated descending - Alice first.
        assert_eq!(view.rows[0].id, Some(1));
        assert_eq!(view.rows[0].cells[0].text, "[x]");
        assert_eq!(view.rows[1].cells[0].text, "[ ]");
    }

    #[test]
    fn test_sort_indicator_targets_display_column() {
        let mut t = table();
        let view = build_members_view(&mut t, false);
        assert_eq!(view.sort_column, 4);
        assert!(!view.sort_ascending);

        t.set_sort(Column::FullName);
        let view = build_members_view(&mut t, false);
        assert_eq!(view.sort_column, 1);
        assert!(view.sort_ascending);
    }

    #[test]
    fn test_status_cell_carries_style_class() {
        let mut t = table();
        t.replace_raw_set(vec![
            member(1, "A", "Active", "2024-01-04"),
            member(2, "B", "CarryoverActive", "2024-01-03"),
            member(3, "C", "Exempt", "2024-01-02"),
            member(4, "D", "Probation", "2024-01-01"),
        ]);

        let view = build_members_view(&mut t, false);
        let styles: Vec<_> = view.rows.iter().map(|r| r.cells[2].style).collect();
        assert_eq!(
            styles,
            vec![
                Some(RowStyleClass::Active),
                Some(RowStyleClass::Accent),
                Some(RowStyleClass::Warning),
                Some(RowStyleClass::Normal),
            ]
        );
    }
}
