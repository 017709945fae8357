//! Projection pipeline: filter, stable sort, page slice - in that order.

use crate::model::MemberRecord;

use super::filter;
use super::page::PageState;
use super::sort::SortState;

/// Result of projecting the raw set through the current view state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projection {
    /// Rows of the current page, in final display order.
    pub visible: Vec<MemberRecord>,
    /// Total number of records passing the filter, before slicing.
    /// Needed for pagination display and trailing blank-row padding.
    pub total_filtered: usize,
}

/// Derives the visible rows from the four view-state inputs.
///
/// Pure function: the same inputs always produce the same output, so the
/// controller is free to cache the result. Filtering preserves the raw set's
/// relative order, `sort_by` is stable (ties keep that order), and a page
/// window starting at or past the end of the filtered set yields an empty
/// slice rather than an error.
pub fn project(
    raw: &[MemberRecord],
    query: &str,
    sort: &SortState,
    page: &PageState,
) -> Projection {
    let mut filtered: Vec<MemberRecord> = raw
        .iter()
        .filter(|r| filter::matches(r, query))
        .cloned()
        .collect();
    filtered.sort_by(|a, b| sort.compare(a, b));

    let total_filtered = filtered.len();
    let visible = filtered
        .into_iter()
        .skip(page.start())
        .take(page.size)
        .collect();

    Projection {
        visible,
        total_filtered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::sort::{Column, Direction};

    fn member(id: u64, name: &str, status: &str, updated: &str) -> MemberRecord {
        MemberRecord {
            member_id: id,
            full_name: name.to_string(),
            status: status.to_string(),
            attendance_record: 0.0,
            last_updated: updated.to_string(),
        }
    }

    fn roster() -> Vec<MemberRecord> {
        vec![
            member(1, "Alice", "Alumni", "2024-01-01"),
            member(2, "Bob", "Active", "2024-06-01"),
            member(3, "Carol", "General", "2024-03-15"),
            member(4, "Dave", "Active", "2024-02-10"),
            member(5, "Erin", "Exempt", "2024-05-20"),
            member(6, "Frank", "Alumni", "2023-12-31"),
            member(7, "Grace", "CarryoverActive", "2024-04-04"),
        ]
    }

    fn name_asc() -> SortState {
        SortState {
            column: Column::FullName,
            direction: Direction::Ascending,
        }
    }

    #[test]
    fn test_pages_concatenate_to_full_filtered_sequence() {
        let raw = roster();
        let sort = name_asc();

        // Full sequence with an oversized window.
        let full = project(
            &raw,
            "",
            &sort,
            &PageState {
                index: 0,
                size: 25,
            },
        );
        assert_eq!(full.total_filtered, 7);

        // Concatenating size-5 pages reproduces it exactly once per element.
        let mut pages = Vec::new();
        for index in 0..2 {
            let page = project(&raw, "", &sort, &PageState { index, size: 5 });
            pages.extend(page.visible);
        }
        assert_eq!(pages, full.visible);
    }

    #[test]
    fn test_single_row_window_walks_sort_order() {
        // The projection itself accepts any window; the {5,10,25} restriction
        // is enforced by PageState::set_size at the action boundary.
        let raw = vec![
            member(1, "Alice", "Alumni", "2024-01-01"),
            member(2, "Bob", "Active", "2024-06-01"),
        ];
        let sort = name_asc();

        let p0 = project(&raw, "", &sort, &PageState { index: 0, size: 1 });
        assert_eq!(p0.total_filtered, 2);
        assert_eq!(p0.visible[0].member_id, 1);

        // index=1: the second record in sort order.
        let p1 = project(&raw, "", &sort, &PageState { index: 1, size: 1 });
        assert_eq!(p1.visible.len(), 1);
        assert_eq!(p1.visible[0].member_id, 2);

        // index=2: start is past the filtered set - empty, no error.
        let p2 = project(&raw, "", &sort, &PageState { index: 2, size: 1 });
        assert!(p2.visible.is_empty());
        assert_eq!(p2.total_filtered, 2);
    }

    #[test]
    fn test_filter_applies_before_sort_and_slice() {
        let raw = roster();
        let sort = SortState {
            column: Column::Status,
            direction: Direction::Ascending,
        };
        let page = PageState { index: 0, size: 10 };

        let projection = project(&raw, "active", &sort, &page);
        // "active" matches Active (Bob, Dave) and CarryoverActive (Grace).
        assert_eq!(projection.total_filtered, 3);
        let ids: Vec<u64> = projection.visible.iter().map(|r| r.member_id).collect();
        // Status priority: Active before CarryoverActive; Bob/Dave tie on
        // status and keep raw order under the stable sort.
        assert_eq!(ids, vec![2, 4, 7]);
    }

    #[test]
    fn test_projection_is_pure() {
        let raw = roster();
        let sort = SortState::default();
        let page = PageState::default();

        let a = project(&raw, "a", &sort, &page);
        let b = project(&raw, "a", &sort, &page);
        assert_eq!(a, b);
        // Inputs are untouched.
        assert_eq!(raw.len(), 7);
    }
}
