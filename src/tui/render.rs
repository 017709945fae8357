//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};

use crate::view::{TableViewModel, build_members_view};

use super::state::{AppState, InputMode};
use super::style::Styles;

/// Main render function.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Main layout: header, table, input/status, footer
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_header(frame, chunks[0], state);
    render_table(frame, chunks[1], state);
    render_input_line(frame, chunks[2], state);
    render_footer(frame, chunks[3], state);

    // Help popup (rendered last to overlay everything)
    if state.show_help {
        render_help(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let context = state.table.context().clone();
    let semester = context
        .selected_semester
        .as_ref()
        .map(|s| s.name.as_str())
        .unwrap_or("-");
    let selected = state.table.selection().len();

    let mut text = format!(
        " rostertop | {} | org {} | semester {}",
        state.source, context.org_id, semester
    );
    if selected > 0 {
        text.push_str(&format!(" | {selected} selected"));
    }
    frame.render_widget(Paragraph::new(text).style(Styles::header()), area);
}

fn render_table(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let loading = state.loading;
    let cursor = state.cursor;
    let view = build_members_view(&mut state.table, loading);

    if !loading && view.rows.is_empty() {
        let empty = Paragraph::new("No records found")
            .style(Styles::dim())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }

    let header = header_row(&view);
    let widths: Vec<Constraint> = view.widths.iter().map(|w| Constraint::Length(*w)).collect();

    let mut rows: Vec<Row> = view
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let cells: Vec<Cell> = row
                .cells
                .iter()
                .map(|cell| {
                    let style = cell
                        .style
                        .map(Styles::from_class)
                        .unwrap_or_else(|| Styles::from_class(row.style));
                    Cell::from(cell.text.clone()).style(style)
                })
                .collect();
            let r = Row::new(cells);
            if !loading && i == cursor {
                r.style(Styles::selected())
            } else {
                r
            }
        })
        .collect();

    // Trailing blanks keep the table height stable on a short last page.
    if !loading {
        let column_count = view.headers.len();
        for _ in 0..state.table.empty_rows() {
            rows.push(Row::new(vec![Cell::from(""); column_count]));
        }
    }

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(table, area);
}

fn header_row<'a>(view: &TableViewModel<u64>) -> Row<'a> {
    let cells: Vec<Cell> = view
        .headers
        .iter()
        .enumerate()
        .map(|(i, title)| {
            let text = if i == view.sort_column {
                let arrow = if view.sort_ascending { '\u{25b2}' } else { '\u{25bc}' };
                format!("{title} {arrow}")
            } else {
                title.clone()
            };
            Cell::from(text)
        })
        .collect();
    Row::new(cells).style(Styles::table_header())
}

fn render_input_line(frame: &mut Frame, area: Rect, state: &mut AppState) {
    if state.input_mode == InputMode::Filter {
        let line = Line::from(vec![
            Span::styled("Filter: ", Styles::help_key()),
            Span::styled(format!("{}_", state.filter_input), Styles::filter_input()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    } else if let Some(message) = &state.status_message {
        frame.render_widget(
            Paragraph::new(message.clone()).style(Styles::dim()),
            area,
        );
    } else if !state.table.query().is_empty() {
        frame.render_widget(
            Paragraph::new(format!("Filter: {}", state.table.query())).style(Styles::dim()),
            area,
        );
    }
}

fn render_footer(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let page = state.table.page();
    let projection = state.table.projection();
    let total = projection.total_filtered;
    let shown = projection.visible.len();
    let page_count = total.div_ceil(page.size).max(1);

    let range = if shown == 0 {
        "0-0".to_string()
    } else {
        format!("{}-{}", page.start() + 1, page.start() + shown)
    };

    let line = Line::from(vec![
        Span::raw(format!(
            " {range} of {total} | page {}/{page_count} | rows {} ",
            page.index + 1,
            page.size
        )),
        Span::styled("?", Styles::help_key()),
        Span::styled(" help ", Styles::help()),
        Span::styled("q", Styles::help_key()),
        Span::styled(" quit", Styles::help()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

const HELP_TEXT: &[&str] = &[
    "  /        filter (type to apply, Enter keeps, Esc clears)",
    "  1-4      sort by Name / Status / Attendance / Last Updated",
    "  \u{2190} \u{2192}      previous / next page",
    "  [ ]      smaller / larger page size (5, 10, 25)",
    "  \u{2191} \u{2193}      move row cursor",
    "  Space    toggle selection of row under cursor",
    "  a / x    select all / clear selection",
    "  r        reload roster from source",
    "  q        quit",
];

fn render_help(frame: &mut Frame, area: Rect) {
    let width = 62.min(area.width);
    let height = (HELP_TEXT.len() as u16 + 2).min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let lines: Vec<Line> = HELP_TEXT.iter().map(|l| Line::from(*l)).collect();
    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Keys ")
            .style(Styles::default()),
    );
    frame.render_widget(Clear, popup);
    frame.render_widget(help, popup);
}
