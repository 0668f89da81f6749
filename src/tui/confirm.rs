//! Confirmation step: show the confirmation number and pickup summary.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::location_name;

use super::AppState;

/// Handle input on the confirmation step. Returns true to quit.
pub fn handle_input(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => return Ok(true),
        KeyCode::Enter => state.start_over(),
        _ => {}
    }
    Ok(false)
}

/// Render the confirmation step.
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let confirmation = state.confirmation.as_deref().unwrap_or("(unknown)");
    let location = location_name(&state.schedule.info.location_id)
        .unwrap_or(state.schedule.info.location_id.as_str());

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Your request has been received!",
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Confirmation number: ", Style::default().fg(theme.text)),
            Span::styled(
                confirmation,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Pickup: {} at {}",
                state.schedule.info.pickup_date, state.schedule.info.pickup_time
            ),
            Style::default().fg(theme.text),
        )),
        Line::from(Span::styled(
            format!("Location: {location}"),
            Style::default().fg(theme.text),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Keep the confirmation number for pickup.",
            Style::default().fg(theme.text_muted),
        )),
    ];

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Confirmed ")
            .style(Style::default().bg(theme.background)),
    );

    f.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::config::Config;
    use crate::tui::WizardStep;
    use crossterm::event::KeyModifiers;

    #[test]
    fn enter_starts_a_new_request() {
        let mut state = AppState::new(Config::default(), ApiClient::new("http://127.0.0.1:9").unwrap());
        state.step = WizardStep::Confirmed;
        state.confirmation = Some("EL-1234".to_string());

        let quit = handle_input(
            &mut state,
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
        )
        .unwrap();

        assert!(!quit);
        assert_eq!(state.step, WizardStep::Browse);
        assert!(state.confirmation.is_none());
    }

    #[test]
    fn escape_quits() {
        let mut state = AppState::new(Config::default(), ApiClient::new("http://127.0.0.1:9").unwrap());
        state.step = WizardStep::Confirmed;

        let quit =
            handle_input(&mut state, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)).unwrap();
        assert!(quit);
    }
}
