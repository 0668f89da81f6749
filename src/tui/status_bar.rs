//! Status bar showing messages and per-step key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme, WizardStep};

/// Two-line status bar at the bottom of the screen.
pub struct StatusBar;

impl StatusBar {
    /// Render status message (or error) plus key hints for the current step.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let message_line = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled(
                    "ERROR: ",
                    Style::default()
                        .fg(theme.error)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(error.clone(), Style::default().fg(theme.error)),
            ])
        } else {
            Line::from(Span::styled(
                state.status_message.clone(),
                Style::default().fg(theme.text),
            ))
        };

        let hints = match state.step {
            WizardStep::Browse => {
                "Up/Down move | Space select | 0-9 +/- quantity | r reload | Enter continue | Esc quit"
            }
            WizardStep::Schedule => {
                "Tab/Down next field | Space/Left/Right choose | Enter submit | Esc back"
            }
            WizardStep::Confirmed => "Enter new request | Esc quit",
        };
        let hints_line = Line::from(Span::styled(
            hints,
            Style::default().fg(theme.text_muted),
        ));

        let widget = Paragraph::new(vec![message_line, hints_line]).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Status ")
                .style(Style::default().bg(theme.background)),
        );

        f.render_widget(widget, area);
    }
}
