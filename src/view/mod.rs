//! UI-agnostic presentation layer.
//!
//! Builds a renderer-independent table model from the controller's
//! projection. The TUI maps these types to ratatui styles; any other
//! frontend could map them to its own styling vocabulary.

mod common;
mod members;

pub use common::{RowStyleClass, TableViewModel, ViewCell, ViewRow};
pub use members::{LOADING_ROWS, build_members_view};
