//! Comparator resolution for table columns.

use std::cmp::Ordering;

use crate::model::MemberRecord;
use crate::util::parse_timestamp;

/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    FullName,
    Status,
    Attendance,
    LastUpdated,
}

impl Column {
    pub fn all() -> &'static [Column] {
        &[
            Column::FullName,
            Column::Status,
            Column::Attendance,
            Column::LastUpdated,
        ]
    }

    /// Returns the display title of the column.
    pub fn title(&self) -> &'static str {
        match self {
            Column::FullName => "Name",
            Column::Status => "Status",
            Column::Attendance => "Attendance",
            Column::LastUpdated => "Last Updated",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn flip(&self) -> Direction {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

/// Fixed priority order for the Status column. Values outside this list rank
/// after all listed values; ties among them keep input order because the
/// projection sort is stable.
const STATUS_ORDER: [&str; 5] = ["Active", "CarryoverActive", "Exempt", "General", "Alumni"];

fn status_rank(status: &str) -> usize {
    STATUS_ORDER
        .iter()
        .position(|s| *s == status)
        .unwrap_or(STATUS_ORDER.len())
}

/// Sort rank for a `LastUpdated` value. Unparseable timestamps rank after
/// every parseable one in ascending order; descending is the exact inverse,
/// so they surface first there.
fn timestamp_rank(raw: &str) -> i64 {
    parse_timestamp(raw).unwrap_or(i64::MAX)
}

/// Compares two records on `column` in ascending order.
///
/// Strings compare case-sensitively as raw values, attendance numerically
/// (`f64::total_cmp`), `LastUpdated` as parsed instants, and `Status` by the
/// fixed priority order.
pub fn compare(a: &MemberRecord, b: &MemberRecord, column: Column) -> Ordering {
    match column {
        Column::FullName => a.full_name.cmp(&b.full_name),
        Column::Status => status_rank(&a.status).cmp(&status_rank(&b.status)),
        Column::Attendance => a.attendance_record.total_cmp(&b.attendance_record),
        Column::LastUpdated => {
            timestamp_rank(&a.last_updated).cmp(&timestamp_rank(&b.last_updated))
        }
    }
}

/// Current sort order: column plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: Column,
    pub direction: Direction,
}

impl Default for SortState {
    /// Most-recently-updated first.
    fn default() -> Self {
        Self {
            column: Column::LastUpdated,
            direction: Direction::Descending,
        }
    }
}

impl SortState {
    /// Compares two records under the current column and direction.
    /// Descending reverses the ascending result rather than using a second
    /// comparator, so the two directions are always exact inverses.
    pub fn compare(&self, a: &MemberRecord, b: &MemberRecord) -> Ordering {
        let cmp = compare(a, b, self.column);
        match self.direction {
            Direction::Ascending => cmp,
            Direction::Descending => cmp.reverse(),
        }
    }

    /// Applies a header click: the same column toggles direction, a new
    /// column starts ascending.
    pub fn select(&mut self, column: Column) {
        if self.column == column {
            self.direction = self.direction.flip();
        } else {
            self.column = column;
            self.direction = Direction::Ascending;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: u64, name: &str, status: &str, attendance: f64, updated: &str) -> MemberRecord {
        MemberRecord {
            member_id: id,
            full_name: name.to_string(),
            status: status.to_string(),
            attendance_record: attendance,
            last_updated: updated.to_string(),
        }
    }

    fn sorted(records: &[MemberRecord], column: Column, direction: Direction) -> Vec<u64> {
        let state = SortState { column, direction };
        let mut out = records.to_vec();
        out.sort_by(|a, b| state.compare(a, b));
        out.iter().map(|r| r.member_id).collect()
    }

    #[test]
    fn test_status_fixed_priority_order() {
        // Shuffled input; ascending must yield the fixed priority order.
        let records = vec![
            member(1, "a", "Alumni", 0.0, "2024-01-01"),
            member(2, "b", "General", 0.0, "2024-01-01"),
            member(3, "c", "Active", 0.0, "2024-01-01"),
            member(4, "d", "Exempt", 0.0, "2024-01-01"),
            member(5, "e", "CarryoverActive", 0.0, "2024-01-01"),
        ];
        assert_eq!(
            sorted(&records, Column::Status, Direction::Ascending),
            vec![3, 5, 4, 2, 1]
        );
    }

    #[test]
    fn test_unknown_status_sorts_after_known() {
        let records = vec![
            member(1, "a", "Suspended", 0.0, ""),
            member(2, "b", "Alumni", 0.0, ""),
            member(3, "c", "OnLeave", 0.0, ""),
            member(4, "d", "Active", 0.0, ""),
        ];
        let ids = sorted(&records, Column::Status, Direction::Ascending);
        assert_eq!(&ids[..2], &[4, 2]);
        // Unlisted values tie; the stable sort keeps their input order.
        assert_eq!(&ids[2..], &[1, 3]);
    }

    #[test]
    fn test_descending_is_exact_inverse_of_ascending() {
        let records = vec![
            member(1, "Dana", "General", 0.4, "2024-03-01"),
            member(2, "Bea", "Active", 0.9, "2024-06-01T08:00:00Z"),
            member(3, "Carl", "Alumni", 0.1, "2023-11-20"),
            member(4, "Abe", "Exempt", 0.7, "2024-05-05"),
        ];
        for &column in Column::all() {
            let mut asc = sorted(&records, column, Direction::Ascending);
            let desc = sorted(&records, column, Direction::Descending);
            asc.reverse();
            assert_eq!(asc, desc, "column {:?}", column);
        }
    }

    #[test]
    fn test_last_updated_compares_as_instant_not_string() {
        // Lexically "2024-06-01T09:00:00+02:00" > "2024-06-01T08:00:00Z",
        // but as instants the first is 07:00 UTC.
        let a = member(1, "a", "Active", 0.0, "2024-06-01T09:00:00+02:00");
        let b = member(2, "b", "Active", 0.0, "2024-06-01T08:00:00Z");
        assert_eq!(compare(&a, &b, Column::LastUpdated), Ordering::Less);
    }

    #[test]
    fn test_unparseable_timestamp_sorts_last_ascending() {
        let records = vec![
            member(1, "a", "Active", 0.0, "garbage"),
            member(2, "b", "Active", 0.0, "2024-06-01"),
            member(3, "c", "Active", 0.0, "2023-01-01"),
        ];
        assert_eq!(
            sorted(&records, Column::LastUpdated, Direction::Ascending),
            vec![3, 2, 1]
        );
    }

    #[test]
    fn test_scenario_status_and_default_sort() {
        let records = vec![
            member(1, "Alice", "Alumni", 0.0, "2024-01-01"),
            member(2, "Bob", "Active", 0.0, "2024-06-01"),
        ];
        // Sort by Status ascending: Bob (Active) before Alice (Alumni).
        assert_eq!(
            sorted(&records, Column::Status, Direction::Ascending),
            vec![2, 1]
        );
        // Default sort (LastUpdated descending): Bob first.
        let default = SortState::default();
        let mut out = records.clone();
        out.sort_by(|a, b| default.compare(a, b));
        assert_eq!(out[0].member_id, 2);
        assert_eq!(out[1].member_id, 1);
    }

    #[test]
    fn test_select_toggles_same_column_and_resets_new_column() {
        let mut state = SortState::default();
        assert_eq!(state.column, Column::LastUpdated);
        assert_eq!(state.direction, Direction::Descending);

        // New column starts ascending.
        state.select(Column::Status);
        assert_eq!(state.column, Column::Status);
        assert_eq!(state.direction, Direction::Ascending);

        // Same column toggles: ascending -> descending -> ascending.
        state.select(Column::Status);
        assert_eq!(state.direction, Direction::Descending);
        state.select(Column::Status);
        assert_eq!(state.direction, Direction::Ascending);
    }
}
