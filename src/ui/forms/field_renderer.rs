//! Field rendering utilities for forms

use crate::app::App;
use crate::state::{field_status, FieldId, FieldKind, FieldStatus, Focus, Gender};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a bordered input
const INPUT_HEIGHT: u16 = 3;

/// Everything needed to draw one input
struct FieldView<'a> {
    label: String,
    value: &'a str,
    placeholder: Option<&'a str>,
    is_active: bool,
    is_enabled: bool,
    status: FieldStatus,
}

fn status_of(app: &App, field: FieldId) -> FieldStatus {
    if field.is_staging() {
        FieldStatus::default()
    } else {
        field_status(field, &app.state.form)
    }
}

/// Rows needed for `field`: the input, plus one when it has helper text
pub fn field_height(app: &App, field: FieldId) -> u16 {
    if status_of(app, field).helper.is_some() {
        INPUT_HEIGHT + 1
    } else {
        INPUT_HEIGHT
    }
}

/// Draw any wizard input at `area`, choosing the widget by field kind
pub fn draw_input(frame: &mut Frame, area: Rect, app: &App, field: FieldId) {
    let state = &app.state;
    let label = if field.is_required() && state.is_field_enabled(field) {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    };
    let view = FieldView {
        label,
        value: state.field_text(field),
        placeholder: field.placeholder(),
        is_active: state.focus == Focus::Field(field),
        is_enabled: state.is_field_enabled(field),
        status: status_of(app, field),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(INPUT_HEIGHT), Constraint::Min(0)])
        .split(area);

    match field.kind() {
        FieldKind::Text => draw_text_box(frame, chunks[0], &view),
        FieldKind::Radio => draw_radio_group(frame, chunks[0], &view, state.form.gender()),
        FieldKind::Checkbox => draw_checkbox(
            frame,
            chunks[0],
            &view,
            state.form.currently_pursuing(),
        ),
    }
    draw_helper(frame, chunks[1], &view.status);
}

fn border_style(view: &FieldView) -> Style {
    if view.status.is_error {
        Style::default().fg(Color::Red)
    } else if view.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn titled_block<'a>(view: &FieldView) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", view.label))
        .borders(Borders::ALL)
        .border_style(border_style(view))
}

fn draw_text_box(frame: &mut Frame, area: Rect, view: &FieldView) {
    let cursor = if view.is_active { "▌" } else { "" };

    let line = if !view.is_enabled {
        Line::from(Span::styled(
            view.value,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    } else if view.value.is_empty() {
        let shown = view
            .placeholder
            .unwrap_or(if view.is_active { "" } else { "(empty)" });
        Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            Span::styled(shown, Style::default().fg(Color::DarkGray)),
        ])
    } else {
        let text_style = if view.is_active {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        Line::from(vec![
            Span::styled(view.value, text_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    frame.render_widget(Paragraph::new(line).block(titled_block(view)), area);
}

fn draw_radio_group(frame: &mut Frame, area: Rect, view: &FieldView, selected: Option<Gender>) {
    let mut spans = Vec::new();
    for gender in Gender::ALL {
        let marker = if selected == Some(gender) { "(•)" } else { "( )" };
        let style = if selected == Some(gender) {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!("{marker} {}", gender.label()), style));
        spans.push(Span::raw("   "));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(titled_block(view)),
        area,
    );
}

fn draw_checkbox(frame: &mut Frame, area: Rect, view: &FieldView, checked: bool) {
    let checkbox = if checked { "[x]" } else { "[ ]" };
    let style = if view.is_active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(view));
    let paragraph = Paragraph::new(format!("{checkbox} {}", view.label))
        .style(style)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn draw_helper(frame: &mut Frame, area: Rect, status: &FieldStatus) {
    let Some(text) = status.helper else {
        return;
    };
    let color = if status.is_error {
        Color::Red
    } else {
        Color::DarkGray
    };
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {text}"), Style::default().fg(color))),
        area,
    );
}
