//! Tabular view controller.
//!
//! Owns the raw record set and all view state, and exposes the derived
//! projection to the rendering layer. All transitions happen through the
//! action methods below; each one marks the cached projection dirty so the
//! next read observes the latest combination of all four inputs.

use crate::model::{MemberRecord, RosterContext};

use super::page::PageState;
use super::project::{Projection, project};
use super::selection::SelectionSet;
use super::sort::{Column, SortState};

/// View-state controller for the member table.
#[derive(Debug, Clone, Default)]
pub struct RosterTable {
    raw: Vec<MemberRecord>,
    context: RosterContext,
    sort: SortState,
    query: String,
    page: PageState,
    selection: SelectionSet,
    /// Derived-value cache for the projection. `dirty` is set by every
    /// action that touches one of the projection's four inputs; selection
    /// changes do not invalidate it.
    cache: Projection,
    dirty: bool,
}

impl RosterTable {
    /// Creates an empty controller with default view state
    /// (LastUpdated descending, no filter, page 0, nothing selected).
    pub fn new(context: RosterContext) -> Self {
        Self {
            raw: Vec::new(),
            context,
            sort: SortState::default(),
            query: String::new(),
            page: PageState::default(),
            selection: SelectionSet::new(),
            cache: Projection::default(),
            dirty: true,
        }
    }

    pub fn context(&self) -> &RosterContext {
        &self.context
    }

    /// Replaces the forwarded context (e.g. after a reload changed the
    /// active semester). Does not affect the projection.
    pub fn set_context(&mut self, context: RosterContext) {
        self.context = context;
    }

    /// The full, unfiltered, unsorted record set.
    pub fn raw(&self) -> &[MemberRecord] {
        &self.raw
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Returns the projection, recomputing it only if an input changed since
    /// the last read. Reading a clean cache has no side effects.
    pub fn projection(&mut self) -> &Projection {
        if self.dirty {
            self.cache = project(&self.raw, &self.query, &self.sort, &self.page);
            self.dirty = false;
        }
        &self.cache
    }

    /// Trailing blank rows that keep the table height stable on a short
    /// last page. Derived from the filtered count, so the padding stays
    /// correct after the result set narrows.
    pub fn empty_rows(&mut self) -> usize {
        let page = self.page;
        if page.index == 0 {
            return 0;
        }
        let total = self.projection().total_filtered;
        ((page.index + 1) * page.size).saturating_sub(total)
    }

    /// Applies a header click: the same column toggles direction, a new
    /// column starts ascending.
    pub fn set_sort(&mut self, column: Column) {
        self.sort.select(column);
        self.dirty = true;
    }

    /// Replaces the search query. Resets to page 0 so a narrowed result set
    /// can never leave the view on a permanently-empty page.
    pub fn set_filter(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page.index = 0;
        self.dirty = true;
    }

    /// Jumps to the given zero-based page. Windows past the end of the
    /// filtered set simply project to an empty slice.
    pub fn set_page(&mut self, index: usize) {
        self.page.index = index;
        self.dirty = true;
    }

    /// Changes the rows-per-page size. Sizes outside {5, 10, 25} are
    /// ignored; an accepted change resets to page 0.
    pub fn set_page_size(&mut self, size: usize) {
        if self.page.set_size(size) {
            self.dirty = true;
        }
    }

    /// Flips selection of a single record id.
    pub fn toggle_select(&mut self, id: u64) {
        self.selection.toggle(id);
    }

    /// Selects every record in the raw set - not just the filtered or
    /// visible page - or clears the selection entirely.
    pub fn select_all(&mut self, on: bool) {
        if on {
            let ids: Vec<u64> = self.raw.iter().map(|r| r.member_id).collect();
            self.selection.select_all(ids);
        } else {
            self.selection.clear();
        }
    }

    /// Wholesale swap of the raw set, as delivered by the external loader.
    /// The selection set is deliberately left untouched: the source keeps
    /// stale ids around after an upstream edit, and so do we.
    pub fn replace_raw_set(&mut self, records: Vec<MemberRecord>) {
        self.raw = records;
        self.dirty = true;
    }
}
