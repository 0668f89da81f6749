//! Schedule step: pickup details form.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::{location_name, PICKUP_LOCATIONS, PICKUP_TIME_SLOTS};
use crate::models::ScheduleInfo;

use super::AppState;

/// Fields of the scheduling form, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Household size (typed, positive integer)
    HouseholdSize,
    /// Pickup location (cycled through the fixed set)
    Location,
    /// Pickup date (typed, YYYY-MM-DD)
    Date,
    /// Pickup time slot (cycled through the fixed set)
    TimeSlot,
}

impl FormField {
    /// Next field, wrapping from the last back to the first.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::HouseholdSize => Self::Location,
            Self::Location => Self::Date,
            Self::Date => Self::TimeSlot,
            Self::TimeSlot => Self::HouseholdSize,
        }
    }

    /// Previous field, wrapping from the first back to the last.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::HouseholdSize => Self::TimeSlot,
            Self::Location => Self::HouseholdSize,
            Self::Date => Self::Location,
            Self::TimeSlot => Self::Date,
        }
    }

    /// Field label shown in the form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HouseholdSize => "Household size",
            Self::Location => "Pickup location",
            Self::Date => "Pickup date",
            Self::TimeSlot => "Time slot",
        }
    }
}

/// Scheduling form state: the collected values plus the focused field.
#[derive(Debug)]
pub struct ScheduleForm {
    /// Collected scheduling values
    pub info: ScheduleInfo,
    /// Currently focused field
    pub field: FormField,
}

impl Default for ScheduleForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleForm {
    /// Creates an empty form focused on the first field.
    #[must_use]
    pub fn new() -> Self {
        Self {
            info: ScheduleInfo::default(),
            field: FormField::HouseholdSize,
        }
    }

    /// Clears all values and returns focus to the first field.
    pub fn reset(&mut self) {
        self.info.reset();
        self.field = FormField::HouseholdSize;
    }

    /// Cycles the pickup location forward or backward through the fixed set.
    pub fn cycle_location(&mut self, forward: bool) {
        let current = PICKUP_LOCATIONS
            .iter()
            .position(|loc| loc.id == self.info.location_id);
        let next = cycle_index(current, PICKUP_LOCATIONS.len(), forward);
        self.info.location_id = PICKUP_LOCATIONS[next].id.to_string();
    }

    /// Cycles the time slot forward or backward through the fixed set.
    pub fn cycle_time_slot(&mut self, forward: bool) {
        let current = PICKUP_TIME_SLOTS
            .iter()
            .position(|slot| *slot == self.info.pickup_time);
        let next = cycle_index(current, PICKUP_TIME_SLOTS.len(), forward);
        self.info.pickup_time = PICKUP_TIME_SLOTS[next].to_string();
    }
}

/// Next index in a fixed-size cycle. An unset value starts at the first
/// entry regardless of direction.
fn cycle_index(current: Option<usize>, len: usize, forward: bool) -> usize {
    match current {
        None => 0,
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
    }
}

/// Handle input on the schedule step. Returns true to quit.
pub fn handle_input(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => state.back_to_browse(),
        KeyCode::Tab | KeyCode::Down => state.schedule.field = state.schedule.field.next(),
        KeyCode::BackTab | KeyCode::Up => state.schedule.field = state.schedule.field.previous(),
        KeyCode::Enter => state.submit_request(),
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
            let forward = key.code != KeyCode::Left;
            match state.schedule.field {
                FormField::Location => state.schedule.cycle_location(forward),
                FormField::TimeSlot => state.schedule.cycle_time_slot(forward),
                _ => {}
            }
        }
        KeyCode::Char(c) => match state.schedule.field {
            FormField::HouseholdSize if c.is_ascii_digit() => {
                state.schedule.info.household_size.push(c);
            }
            FormField::Date if c.is_ascii_digit() || c == '-' => {
                state.schedule.info.pickup_date.push(c);
            }
            _ => {}
        },
        KeyCode::Backspace => match state.schedule.field {
            FormField::HouseholdSize => {
                state.schedule.info.household_size.pop();
            }
            FormField::Date => {
                state.schedule.info.pickup_date.pop();
            }
            _ => {}
        },
        _ => {}
    }

    Ok(false)
}

/// Render the schedule step.
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let form = &state.schedule;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Pickup Details ")
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Household size
            Constraint::Length(2), // Location
            Constraint::Length(2), // Date
            Constraint::Length(2), // Time slot
            Constraint::Length(1), // spacer
            Constraint::Length(2), // hint
            Constraint::Min(0),
        ])
        .split(inner);

    let rows = [
        (FormField::HouseholdSize, form.info.household_size.clone()),
        (
            FormField::Location,
            location_name(&form.info.location_id)
                .map_or_else(String::new, std::string::ToString::to_string),
        ),
        (FormField::Date, form.info.pickup_date.clone()),
        (FormField::TimeSlot, form.info.pickup_time.clone()),
    ];

    for (i, (field, value)) in rows.iter().enumerate() {
        let focused = *field == form.field;
        let marker = if focused { "> " } else { "  " };
        let display = if value.is_empty() {
            match field {
                FormField::HouseholdSize => "(type a number)".to_string(),
                FormField::Date => "(YYYY-MM-DD)".to_string(),
                _ => "(Space to choose)".to_string(),
            }
        } else {
            value.clone()
        };
        let value_style = if value.is_empty() {
            Style::default().fg(theme.text_muted)
        } else {
            Style::default().fg(theme.text)
        };

        let mut line = Line::from(vec![
            Span::styled(
                format!("{marker}{:<18}", field.label()),
                if focused {
                    Style::default()
                        .fg(theme.primary)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text)
                },
            ),
            Span::styled(display, value_style),
        ]);
        if focused {
            line = line.style(Style::default().bg(theme.highlight_bg));
        }
        f.render_widget(Paragraph::new(line), chunks[i]);
    }

    let hint = if state.is_submitting() {
        Span::styled("Submitting request...", Style::default().fg(theme.warning))
    } else if form.info.is_complete() {
        Span::styled(
            "Enter submits the request.",
            Style::default().fg(theme.success),
        )
    } else {
        Span::styled(
            "Fill in every field to submit.",
            Style::default().fg(theme.text_muted),
        )
    };
    f.render_widget(Paragraph::new(Line::from(hint)), chunks[5]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_navigation_wraps() {
        assert_eq!(FormField::TimeSlot.next(), FormField::HouseholdSize);
        assert_eq!(FormField::HouseholdSize.previous(), FormField::TimeSlot);

        let mut field = FormField::HouseholdSize;
        for _ in 0..4 {
            field = field.next();
        }
        assert_eq!(field, FormField::HouseholdSize);
    }

    #[test]
    fn cycle_location_wraps_through_fixed_set() {
        let mut form = ScheduleForm::new();
        form.cycle_location(true);
        assert_eq!(form.info.location_id, "LOC-001");

        form.cycle_location(true);
        form.cycle_location(true);
        assert_eq!(form.info.location_id, "LOC-003");

        form.cycle_location(true);
        assert_eq!(form.info.location_id, "LOC-001");

        form.cycle_location(false);
        assert_eq!(form.info.location_id, "LOC-003");
    }

    #[test]
    fn cycle_time_slot_starts_at_first() {
        let mut form = ScheduleForm::new();
        form.cycle_time_slot(false);
        assert_eq!(form.info.pickup_time, PICKUP_TIME_SLOTS[0]);
    }

    #[test]
    fn reset_returns_focus_to_first_field() {
        let mut form = ScheduleForm::new();
        form.field = FormField::Date;
        form.info.pickup_date = "2024-05-01".to_string();
        form.reset();
        assert_eq!(form.field, FormField::HouseholdSize);
        assert!(form.info.pickup_date.is_empty());
    }
}
