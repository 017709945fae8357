//! Main TUI application.

use std::io;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::warn;

use crate::provider::RosterProvider;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::AppState;

/// Main TUI application.
pub struct App {
    provider: Box<dyn RosterProvider>,
    state: AppState,
    semester: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new App with the given provider. `semester` selects a
    /// semester by name; the roster's active semester is used otherwise.
    pub fn new(provider: Box<dyn RosterProvider>, semester: Option<String>) -> Self {
        let state = AppState::new(provider.describe());
        Self {
            provider,
            state,
            semester,
            should_quit: false,
        }
    }

    /// Runs the TUI application.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new(tick_rate);

        // First frame shows the loading placeholders, then the initial load
        // replaces them.
        terminal.draw(|frame| render(frame, &mut self.state))?;
        self.reload();

        loop {
            terminal.draw(|frame| render(frame, &mut self.state))?;

            match events.next() {
                Ok(Event::Tick) => {}
                Ok(Event::Key(key)) => match handle_key(&mut self.state, key) {
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::Reload => self.reload(),
                    KeyAction::None => {}
                },
                Err(_) => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Loads a roster from the provider and swaps it in. A failed load keeps
    /// the previous record set on screen and reports via the status line.
    fn reload(&mut self) {
        match self.provider.load() {
            Ok(roster) => {
                self.state.apply_roster(roster, self.semester.as_deref());
                self.state.status_message = None;
            }
            Err(e) => {
                warn!(error = %e, source = %self.provider.describe(), "roster load failed");
                self.state.loading = false;
                self.state.status_message = Some(format!("Load failed: {e}"));
            }
        }
    }
}
