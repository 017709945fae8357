//! Terminal user interface for the roster viewer.
//!
//! Interactive table over the member roster: filter, sort, page and select
//! from the keyboard. The TUI owns no table logic; every keystroke maps to
//! a controller action and the screen is redrawn from the projection.

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;

pub use app::App;
pub use state::{AppState, InputMode};
