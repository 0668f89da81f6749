//! Terminal user interface for the request portal.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and the per-step wizard screens using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]

pub mod browse;
pub mod confirm;
pub mod schedule;
pub mod status_bar;
pub mod theme;
pub mod wizard;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::api::{ApiClient, CatalogFetchState, CatalogMessage, SubmitMessage, SubmitState};
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::{CatalogItem, Category};
use crate::services::{group_by_category, SelectionStore};

pub use status_bar::StatusBar;
pub use theme::Theme;
pub use wizard::WizardStep;

/// Application state - single source of truth.
///
/// All UI components read from this state immutably. Only event handlers
/// and the message polls in the main loop mutate it.
pub struct AppState {
    /// Current wizard step
    pub step: WizardStep,
    /// Loaded inventory grouped by category (first-appearance order)
    pub catalog: Vec<(Category, Vec<CatalogItem>)>,
    /// Items chosen on the browse screen
    pub selection: SelectionStore,
    /// Scheduling form state
    pub schedule: schedule::ScheduleForm,
    /// Browse screen cursor and quantity input
    pub browse: browse::BrowseState,
    /// Confirmation number from the last successful submission
    pub confirmation: Option<String>,

    /// REST client for the backend
    pub client: ApiClient,
    /// Background inventory fetch
    pub catalog_fetch: CatalogFetchState,
    /// Background request submission
    pub submit: SubmitState,

    /// Current UI theme
    pub theme: Theme,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any), cleared on the next key press
    pub error_message: Option<String>,
    /// Application configuration
    pub config: Config,
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates a new `AppState` and starts the initial catalog fetch.
    #[must_use]
    pub fn new(config: Config, client: ApiClient) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);

        let mut catalog_fetch = CatalogFetchState::new();
        catalog_fetch.start(client.clone());

        Self {
            step: WizardStep::Browse,
            catalog: Vec::new(),
            selection: SelectionStore::new(),
            schedule: schedule::ScheduleForm::new(),
            browse: browse::BrowseState::new(),
            confirmation: None,
            client,
            catalog_fetch,
            submit: SubmitState::new(),
            theme,
            status_message: "Loading available items...".to_string(),
            error_message: None,
            config,
            should_quit: false,
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message (transient notification)
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// All catalog items in display order (flattened groups).
    #[must_use]
    pub fn visible_items(&self) -> Vec<&CatalogItem> {
        self.catalog
            .iter()
            .flat_map(|(_, items)| items.iter())
            .collect()
    }

    /// Applies a completed catalog fetch.
    ///
    /// Failure is log-only: the catalog stays empty and a muted status line
    /// is shown, matching the fail-soft contract of the loader.
    pub fn apply_catalog_message(&mut self, message: CatalogMessage) {
        match message {
            CatalogMessage::Loaded(items) => {
                tracing::info!(count = items.len(), "catalog loaded");
                self.catalog = group_by_category(&items);
                self.browse.clamp_cursor(items.len());
                if items.is_empty() {
                    self.set_status("No items are currently available.");
                } else {
                    self.set_status(format!("{} items available. Space selects.", items.len()));
                }
            }
            CatalogMessage::Failed(error) => {
                tracing::warn!(%error, "catalog load failed");
                self.catalog.clear();
                self.browse.clamp_cursor(0);
                self.set_status("Inventory is currently unavailable. Press r to retry.");
            }
        }
    }

    /// Applies a completed submission.
    pub fn apply_submit_message(&mut self, message: SubmitMessage) {
        match message {
            SubmitMessage::Succeeded(request) => {
                tracing::info!(
                    confirmation = %request.confirmation_number,
                    "request submitted"
                );
                self.complete_submission(&request);
            }
            SubmitMessage::Failed(error) => {
                tracing::warn!(%error, "request submission failed");
                // Wizard stays on the schedule step; nothing is lost
                self.set_error("Failed to submit request. Please try again.");
            }
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(state, key)? {
                    break; // User quit
                }
            }
        }

        // Poll background network tasks for results
        if let Some(message) = state.catalog_fetch.poll() {
            state.apply_catalog_message(message);
        }
        if let Some(message) = state.submit.poll() {
            state.apply_submit_message(message);
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Dispatches a key event to the current wizard step.
///
/// Returns true when the application should exit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Ctrl+C quits from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Ok(true);
    }

    // Error notifications are transient: any key press dismisses them
    state.clear_error();

    match state.step {
        WizardStep::Browse => browse::handle_input(state, key),
        WizardStep::Schedule => schedule::handle_input(state, key),
        WizardStep::Confirmed => confirm::handle_input(state, key),
    }
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Step content
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);

    match state.step {
        WizardStep::Browse => browse::render(f, chunks[1], state),
        WizardStep::Schedule => schedule::render(f, chunks[1], state),
        WizardStep::Confirmed => confirm::render(f, chunks[1], state),
    }

    StatusBar::render(f, chunks[2], state, &state.theme);
}

/// Render title bar with app name and wizard progress
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let title = format!(
        " {} - Step {} of 3: {}",
        APP_NAME,
        state.step.number(),
        state.step.title()
    );

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}
