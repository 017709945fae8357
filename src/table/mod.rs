//! Reactive tabular view-state engine.
//!
//! The controller derives a visible row slice from four inputs (raw set,
//! filter query, sort state, page window) and tracks selection independently
//! of all four. Sub-modules are pure and individually testable; the
//! controller wires them together behind a derived-value cache.

mod controller;
mod filter;
mod page;
mod project;
mod selection;
mod sort;

pub use controller::RosterTable;
pub use filter::matches;
pub use page::{PAGE_SIZES, PageState};
pub use project::{Projection, project};
pub use selection::SelectionSet;
pub use sort::{Column, Direction, SortState};
