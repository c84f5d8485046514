//! Layout components (stepper header, status bar)

use crate::app::App;
use crate::platform::{BACK_SHORTCUT, COPY_SHORTCUT, NEXT_SHORTCUT};
use crate::state::{Step, STEP_COUNT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of the stepper header (with borders)
pub const STEPPER_HEIGHT: u16 = 3;

/// Split the screen into stepper, content, and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(STEPPER_HEIGHT), // Stepper
            Constraint::Min(0),                 // Content
            Constraint::Length(1),              // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the step indicator: done steps ticked, active step highlighted
pub fn draw_stepper(frame: &mut Frame, area: Rect, app: &App) {
    let active = app.state.nav.active_step();
    let mut spans = Vec::new();

    for (idx, step) in Step::ALL.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" ── ", Style::default().fg(Color::DarkGray)));
        }
        let (marker, style) = if idx < active {
            ("✓".to_string(), Style::default().fg(Color::Green))
        } else if idx == active {
            (
                (idx + 1).to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ((idx + 1).to_string(), Style::default().fg(Color::DarkGray))
        };
        spans.push(Span::styled(format!("{marker} {}", step.label()), style));
    }

    let title = if active == STEP_COUNT {
        " Submitted "
    } else {
        " Form Wizard "
    };
    let stepper = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(stepper, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let quit_hint = " ^C^C:quit ";
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(quit_hint.len() as u16),
        ])
        .split(area);

    // Gate warning first so a narrow terminal truncates the key hints instead
    let mut spans = Vec::new();
    if !app.state.nav.is_complete() && !app.state.can_go_next() {
        spans.push(Span::styled(
            " Required fields missing ",
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw("|"));
    }
    spans.push(Span::styled(
        format!(" {} ", status_hints(app)),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, chunks[0]);

    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, chunks[1]);
}

/// Get keyboard hints for the current screen
fn status_hints(app: &App) -> String {
    if app.state.nav.is_complete() {
        format!("y/{COPY_SHORTCUT}:copy  e:export  r:restart  q:quit")
    } else {
        format!("Tab:field  {NEXT_SHORTCUT}:next  {BACK_SHORTCUT}/Esc:back")
    }
}
