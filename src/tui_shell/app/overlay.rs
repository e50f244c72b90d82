//! Full-frame overlay shown while a snap is open, covering the feed the way
//! the mobile screen's full-screen view did.

use std::time::Instant;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::App;
use crate::viewer::ViewerSession;

pub(super) fn draw_viewer(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    match &app.viewer {
        ViewerSession::Idle => {}
        ViewerSession::Loading { snap_id } => {
            draw_frame(frame, area, None);
            let body = centered_body(area);
            frame.render_widget(
                Paragraph::new(format!("opening {} ...", snap_id)).centered(),
                body,
            );
        }
        ViewerSession::Active(active) => {
            let remaining = active.remaining_secs(Instant::now());
            draw_frame(frame, area, Some(remaining));
            let body = centered_body(area);
            let lines = vec![
                Line::from(Span::styled(
                    active.image.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    format!("disappears in {}s", remaining),
                    Style::default().fg(Color::Gray),
                )),
            ];
            frame.render_widget(Paragraph::new(lines).centered(), body);
        }
    }
}

fn draw_frame(frame: &mut ratatui::Frame, area: Rect, remaining: Option<u64>) {
    frame.render_widget(Clear, area);
    let title = match remaining {
        Some(secs) => Line::from(vec![
            Span::raw("Snap  "),
            Span::styled(
                format!("{}", secs),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        None => Line::from("Snap"),
    };
    frame.render_widget(Block::default().borders(Borders::ALL).title(title), area);
}

fn centered_body(area: Rect) -> Rect {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);
    parts[1]
}
