//! Renderer-independent view model types.

/// Row-level style classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowStyleClass {
    #[default]
    Normal,
    /// Positive/active (TUI: green).
    Active,
    /// Accent (TUI: cyan). E.g. carried-over active members.
    Accent,
    /// Warning level (TUI: yellow). E.g. exempt members.
    Warning,
    /// Dimmed (TUI: dark gray). E.g. alumni, placeholder rows.
    Dimmed,
}

/// A single table cell with optional per-cell style override.
#[derive(Debug, Clone, Default)]
pub struct ViewCell {
    pub text: String,
    /// `None` = inherit row style.
    pub style: Option<RowStyleClass>,
}

impl ViewCell {
    pub fn plain(text: String) -> Self {
        Self { text, style: None }
    }

    pub fn styled(text: String, style: RowStyleClass) -> Self {
        Self {
            text,
            style: Some(style),
        }
    }
}

/// One table row, parameterized by entity ID type. `id` is `None` for
/// placeholder rows that represent no record.
pub struct ViewRow<Id> {
    pub id: Option<Id>,
    pub cells: Vec<ViewCell>,
    pub style: RowStyleClass,
}

/// Complete table ready to be rendered by any frontend.
pub struct TableViewModel<Id> {
    pub headers: Vec<String>,
    pub widths: Vec<u16>,
    pub rows: Vec<ViewRow<Id>>,
    pub sort_column: usize,
    pub sort_ascending: bool,
}
