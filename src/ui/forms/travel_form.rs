//! Travel history step: staging inputs, add button, and added entries

use super::draw_wizard_button;
use super::field_renderer::{draw_input, field_height};
use crate::app::App;
use crate::state::{FieldId, Step, WizardButton};
use crate::ui::components::BUTTON_HEIGHT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(field_height(app, FieldId::NewPlace)),
            Constraint::Length(field_height(app, FieldId::NewCity)),
            Constraint::Length(BUTTON_HEIGHT), // Add
            Constraint::Length(1),             // Heading
            Constraint::Min(0),                // Entries
        ])
        .split(area);

    draw_input(frame, chunks[0], app, FieldId::NewPlace);
    draw_input(frame, chunks[1], app, FieldId::NewCity);

    let add_area = Rect {
        width: chunks[2].width.min(24),
        ..chunks[2]
    };
    draw_wizard_button(
        frame,
        add_area,
        app,
        WizardButton::AddTravel,
        Step::Travel,
        Some(Color::Green),
    );

    frame.render_widget(
        Line::from(Span::styled(
            "Added Places and Cities:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        chunks[3],
    );

    let entries = app.state.form.travel();
    let items: Vec<ListItem> = if entries.is_empty() {
        vec![ListItem::new(Span::styled(
            "  (none yet)",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        entries
            .iter()
            .map(|e| ListItem::new(format!("  Place: {}, City: {}", e.place, e.city)))
            .collect()
    };
    frame.render_widget(List::new(items), chunks[4]);
}
