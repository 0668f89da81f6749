//! Browse step: category-grouped inventory list with item selection.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use super::AppState;

/// Cursor and quantity-entry state for the browse screen.
#[derive(Debug, Default)]
pub struct BrowseState {
    /// Index into the flattened item list (category headings excluded)
    pub cursor: usize,
    /// Digits typed since the cursor last moved, applied as the quantity
    /// of the item under the cursor
    pub quantity_input: String,
}

impl BrowseState {
    /// Creates an empty browse state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the cursor inside the item list after a reload.
    pub fn clamp_cursor(&mut self, item_count: usize) {
        if item_count == 0 {
            self.cursor = 0;
        } else if self.cursor >= item_count {
            self.cursor = item_count - 1;
        }
        self.quantity_input.clear();
    }
}

/// Handle input on the browse step. Returns true to quit.
pub fn handle_input(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    let item_count = state.visible_items().len();

    match key.code {
        KeyCode::Esc => return Ok(true),
        KeyCode::Up => {
            if state.browse.cursor > 0 {
                state.browse.cursor -= 1;
            }
            state.browse.quantity_input.clear();
        }
        KeyCode::Down => {
            if item_count > 0 && state.browse.cursor < item_count - 1 {
                state.browse.cursor += 1;
            }
            state.browse.quantity_input.clear();
        }
        KeyCode::Char(' ') => {
            let item = state
                .visible_items()
                .get(state.browse.cursor)
                .copied()
                .cloned();
            if let Some(item) = item {
                state.selection.toggle(&item);
                state.browse.quantity_input.clear();
            }
        }
        KeyCode::Char(c @ '0'..='9') => {
            if let Some(id) = selected_item_id(state) {
                state.browse.quantity_input.push(c);
                let raw = state.browse.quantity_input.clone();
                state.selection.set_quantity(&id, &raw);
            }
        }
        KeyCode::Backspace => {
            if let Some(id) = selected_item_id(state) {
                state.browse.quantity_input.pop();
                let raw = state.browse.quantity_input.clone();
                state.selection.set_quantity(&id, &raw);
            }
        }
        KeyCode::Char('+') => adjust_quantity(state, 1),
        KeyCode::Char('-') => adjust_quantity(state, -1),
        KeyCode::Char('r') => {
            state.catalog_fetch.start(state.client.clone());
            state.set_status("Reloading available items...");
        }
        KeyCode::Enter => {
            if !state.advance_to_schedule() {
                state.set_error("Select at least one item first (Space).");
            }
        }
        _ => {}
    }

    Ok(false)
}

/// Id of the item under the cursor, if it is currently selected.
fn selected_item_id(state: &AppState) -> Option<String> {
    let item = state.visible_items().get(state.browse.cursor).copied()?;
    state.selection.contains(&item.id).then(|| item.id.clone())
}

fn adjust_quantity(state: &mut AppState, delta: i64) {
    let Some(id) = selected_item_id(state) else {
        return;
    };
    let current = state
        .selection
        .get(&id)
        .map_or(1, |s| i64::from(s.requested_quantity));
    let next = (current + delta).max(1);
    state.selection.set_quantity(&id, &next.to_string());
    state.browse.quantity_input.clear();
}

/// Render the browse step.
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let mut rows: Vec<ListItem> = Vec::new();
    let mut selected_row = None;
    let mut item_index = 0;

    for (category, items) in &state.catalog {
        rows.push(ListItem::new(Line::from(Span::styled(
            format!(" {category} "),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))));

        for item in items {
            let is_cursor = item_index == state.browse.cursor;
            if is_cursor {
                selected_row = Some(rows.len());
            }

            let selected = state.selection.get(&item.id);
            let marker = if selected.is_some() { "[x]" } else { "[ ]" };
            let quantity = selected.map_or(String::new(), |s| {
                format!("  requesting {}", s.requested_quantity)
            });

            let style = if selected.is_some() {
                Style::default().fg(theme.success)
            } else {
                Style::default().fg(theme.text)
            };

            rows.push(ListItem::new(Line::from(vec![
                Span::styled(format!("   {marker} {:<24}", item.item_name), style),
                Span::styled(
                    format!("Available: {} {}", item.quantity, item.unit),
                    Style::default().fg(theme.text_muted),
                ),
                Span::styled(quantity, Style::default().fg(theme.primary)),
            ])));

            item_index += 1;
        }
    }

    if rows.is_empty() {
        rows.push(ListItem::new(Line::from(Span::styled(
            " No items to show.",
            Style::default().fg(theme.text_muted),
        ))));
    }

    let list = List::new(rows)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Available Items ")
                .style(Style::default().bg(theme.background)),
        )
        .highlight_style(
            Style::default()
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    list_state.select(selected_row);
    f.render_stateful_widget(list, area, &mut list_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::config::Config;
    use crate::models::CatalogItem;
    use crate::services::group_by_category;

    fn catalog() -> Vec<CatalogItem> {
        serde_json::from_value(serde_json::json!([
            {"id": "a", "item_name": "Apples", "category": "Fresh", "quantity": 10, "unit": "lbs"},
            {"id": "b", "item_name": "Rice", "category": "Dry", "quantity": 30, "unit": "lbs"},
            {"id": "c", "item_name": "Milk", "category": "Dairy", "quantity": 12, "unit": "gal"}
        ]))
        .unwrap()
    }

    fn test_state() -> AppState {
        let mut state = AppState::new(Config::default(), ApiClient::new("http://127.0.0.1:9").unwrap());
        state.catalog = group_by_category(&catalog());
        state
    }

    fn press(state: &mut AppState, code: KeyCode) {
        let event = KeyEvent::new(code, crossterm::event::KeyModifiers::NONE);
        handle_input(state, event).unwrap();
    }

    #[test]
    fn space_toggles_item_under_cursor() {
        let mut state = test_state();
        press(&mut state, KeyCode::Char(' '));
        assert!(state.selection.contains("a"));
        press(&mut state, KeyCode::Char(' '));
        assert!(state.selection.is_empty());
    }

    #[test]
    fn digits_set_quantity_of_selected_item() {
        let mut state = test_state();
        press(&mut state, KeyCode::Char(' '));
        press(&mut state, KeyCode::Char('1'));
        press(&mut state, KeyCode::Char('2'));
        assert_eq!(state.selection.get("a").unwrap().requested_quantity, 12);
    }

    #[test]
    fn digits_ignored_without_selection() {
        let mut state = test_state();
        press(&mut state, KeyCode::Char('3'));
        assert!(state.selection.is_empty());
        assert!(state.browse.quantity_input.is_empty());
    }

    #[test]
    fn plus_and_minus_adjust_quantity() {
        let mut state = test_state();
        press(&mut state, KeyCode::Char(' '));
        press(&mut state, KeyCode::Char('+'));
        press(&mut state, KeyCode::Char('+'));
        assert_eq!(state.selection.get("a").unwrap().requested_quantity, 3);

        press(&mut state, KeyCode::Char('-'));
        press(&mut state, KeyCode::Char('-'));
        press(&mut state, KeyCode::Char('-'));
        // Quantity never drops below 1
        assert_eq!(state.selection.get("a").unwrap().requested_quantity, 1);
    }

    #[test]
    fn cursor_movement_stays_in_bounds() {
        let mut state = test_state();
        press(&mut state, KeyCode::Up);
        assert_eq!(state.browse.cursor, 0);

        for _ in 0..10 {
            press(&mut state, KeyCode::Down);
        }
        assert_eq!(state.browse.cursor, 2);
    }

    #[test]
    fn enter_without_selection_shows_error() {
        let mut state = test_state();
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.step, crate::tui::WizardStep::Browse);
        assert!(state.error_message.is_some());
    }

    #[test]
    fn clamp_cursor_after_shrinking_catalog() {
        let mut browse = BrowseState::new();
        browse.cursor = 5;
        browse.clamp_cursor(3);
        assert_eq!(browse.cursor, 2);
        browse.clamp_cursor(0);
        assert_eq!(browse.cursor, 0);
    }
}
