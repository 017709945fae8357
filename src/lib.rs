//! rostertop - Club membership roster viewer library.
//!
//! This library provides the core functionality shared between the
//! `rostertop` TUI binary and any other frontend:
//! - `model` - roster data types as delivered by the external source
//! - `table` - the tabular view-state engine (filter, sort, paging, selection)
//! - `view` - UI-agnostic view models built from the engine's output
//! - `provider` - data source abstraction (JSON export or built-in sample)

pub mod model;
pub mod provider;
pub mod table;
pub mod tui;
pub mod util;
pub mod view;
