//! Form rendering module
//!
//! - `field_renderer`: text inputs, radio group, checkbox, helper lines
//! - `travel_form`: the place/city editor and its entry list

mod field_renderer;
mod travel_form;

use crate::app::App;
use crate::state::{Focus, Step, WizardButton};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use field_renderer::{draw_input, field_height};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::ops::Range;

/// Draw the editable step inside `area`
pub fn draw_step(frame: &mut Frame, area: Rect, app: &App, step: Step) {
    let block = Block::default()
        .title(format!(" {} ", step.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Step body
            Constraint::Length(BUTTON_HEIGHT), // Back / Next
        ])
        .horizontal_margin(1)
        .split(inner);

    match step {
        Step::Personal | Step::Education => draw_fields(frame, chunks[0], app, step),
        Step::Travel => travel_form::draw(frame, chunks[0], app),
    }
    draw_nav_buttons(frame, chunks[1], app, step);
}

/// Stack the step's inputs top to bottom, scrolled so the focused one shows
fn draw_fields(frame: &mut Frame, area: Rect, app: &App, step: Step) {
    let fields = step.fields();
    let heights: Vec<u16> = fields.iter().map(|f| field_height(app, *f)).collect();
    let focused = match app.state.focus {
        Focus::Field(field) => fields.iter().position(|f| *f == field),
        Focus::Button(_) => None,
    };
    let window = visible_window(&heights, focused, area.height);

    let mut y = area.y;
    for idx in window.clone() {
        let height = heights[idx].min(area.bottom().saturating_sub(y));
        draw_input(frame, Rect { y, height, ..area }, app, fields[idx]);
        y += height;
    }

    if window.end < fields.len() && y < area.bottom() {
        let hint_area = Rect {
            y: area.bottom() - 1,
            height: 1,
            ..area
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                " ↓ more fields (Tab)",
                Style::default().fg(Color::DarkGray),
            )),
            hint_area,
        );
    }
}

/// Fields that fit in `available` rows, starting as high as the focused one allows
fn visible_window(heights: &[u16], focused: Option<usize>, available: u16) -> Range<usize> {
    let fits = |range: Range<usize>| heights[range].iter().sum::<u16>() <= available;

    let mut start = 0;
    if let Some(focused) = focused {
        while start < focused && !fits(start..focused + 1) {
            start += 1;
        }
    }
    let mut end = start;
    while end < heights.len() && fits(start..end + 1) {
        end += 1;
    }
    // The first field of the window is drawn even when clipped
    start..end.max((start + 1).min(heights.len()))
}

/// Draw a wizard button with focus and enabled state from the app
fn draw_wizard_button(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    button: WizardButton,
    step: Step,
    accent: Option<Color>,
) {
    render_button(
        frame,
        area,
        button.label(step),
        app.state.focus == Focus::Button(button),
        app.state.is_button_enabled(button),
        accent,
    );
}

fn draw_nav_buttons(frame: &mut Frame, area: Rect, app: &App, step: Step) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12), // Back
            Constraint::Length(2),
            Constraint::Length(12), // Next / Submit
            Constraint::Min(0),
        ])
        .split(area);

    draw_wizard_button(frame, chunks[0], app, WizardButton::Back, step, None);
    draw_wizard_button(
        frame,
        chunks[2],
        app,
        WizardButton::Forward,
        step,
        Some(Color::Magenta),
    );
}
