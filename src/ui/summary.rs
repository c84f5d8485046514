//! Read-only summary shown after submission

use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let mut lines = vec![
        Line::from(Span::styled(
            "Thank you for submitting the form!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if let Some(submission) = &app.state.submission {
        lines.extend(submission.summary_lines().into_iter().map(|(label, value)| {
            Line::from(vec![
                Span::styled(
                    format!("{label}: "),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(value),
            ])
        }));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}
