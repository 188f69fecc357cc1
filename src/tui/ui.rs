use crate::tui::state::{Focus, ViewState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};

const CURSOR: &str = "▏";

pub fn draw(frame: &mut Frame, state: &ViewState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(3), Min(1), Length(1), Length(1)]);
    let [input_area, list_area, status_area, hint_area] = layout.areas(frame.area());

    draw_input(frame, input_area, state);
    draw_items(frame, list_area, state);
    draw_status(frame, status_area, state);
    frame.render_widget(Span::styled(hints(state), Style::new().fg(Color::DarkGray)), hint_area);
}

fn draw_input(frame: &mut Frame, area: ratatui::layout::Rect, state: &ViewState) {
    let focused = state.focus == Focus::Input && !state.editing();

    let text = if focused {
        format!("{}{}", state.input, CURSOR)
    } else if state.input.is_empty() {
        "Enter item name".to_string()
    } else {
        state.input.clone()
    };

    let style = if focused {
        Style::new()
    } else {
        Style::new().add_modifier(Modifier::DIM)
    };

    let input = Paragraph::new(text)
        .style(style)
        .block(Block::bordered().title("New item"));
    frame.render_widget(input, area);
}

fn draw_items(frame: &mut Frame, area: ratatui::layout::Rect, state: &ViewState) {
    let rows: Vec<ListItem> = state
        .items
        .iter()
        .map(|item| {
            let editing_this = state
                .edit
                .as_ref()
                .is_some_and(|sess| sess.id == item.id);

            if editing_this {
                let draft = state.edit.as_ref().map(|s| s.draft.as_str()).unwrap_or("");
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{:>4}  ", item.id)),
                    Span::styled(
                        format!("{}{}", draft, CURSOR),
                        Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    ),
                ]))
            } else {
                ListItem::new(format!("{:>4}  {}", item.id, item.name))
            }
        })
        .collect();

    let title = match &state.edit {
        Some(sess) => format!("Items — editing #{}", sess.id),
        None => "Items".to_string(),
    };

    let highlight = if state.focus == Focus::List && !state.editing() {
        Style::new().bg(Color::DarkGray)
    } else {
        Style::new()
    };

    let list = List::new(rows)
        .block(Block::bordered().title(title))
        .highlight_style(highlight);

    let mut list_state = ListState::default();
    if !state.items.is_empty() {
        list_state.select(Some(state.selected));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_status(frame: &mut Frame, area: ratatui::layout::Rect, state: &ViewState) {
    let line = match &state.warning {
        Some(msg) => Span::styled(
            format!("⚠ {}", msg),
            Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        None => Span::raw(format!("{} item(s)", state.items.len())),
    };
    frame.render_widget(line, area);
}

fn hints(state: &ViewState) -> &'static str {
    if state.editing() {
        "Enter save · Esc cancel"
    } else {
        match state.focus {
            Focus::Input => "Enter add · Tab list · Esc quit",
            Focus::List => "↑/↓ select · e/Enter edit · d delete · Tab input · q quit",
        }
    }
}
