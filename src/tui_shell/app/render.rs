use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListState, Paragraph, Wrap};

use time::OffsetDateTime;

use super::rows::{details_lines, list_rows};
use super::{App, overlay};

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let now = OffsetDateTime::now_utc();
    let area = frame.area();

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(Paragraph::new(header_line(app)), parts[0]);

    let mut state = ListState::default();
    if !app.feed.is_empty() {
        state.select(Some(app.selected.min(app.feed.len() - 1)));
    }
    let list = List::new(list_rows(app, now))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Snaps received"),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));
    frame.render_stateful_widget(list, parts[1], &mut state);

    let detail = Paragraph::new(details_lines(app))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Details"));
    frame.render_widget(detail, parts[2]);

    frame.render_widget(Paragraph::new(hint_line(app)), parts[3]);

    overlay::draw_viewer(frame, app);
}

fn header_line(app: &App) -> Line<'static> {
    let mut spans = vec![Span::styled(
        "snapfeed",
        Style::default().fg(Color::Yellow),
    )];
    if let Some(updated_at) = &app.updated_at {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("updated {}", super::time_utils::fmt_ts_ui(updated_at)),
            Style::default().fg(Color::Gray),
        ));
    }
    if !app.logged_in {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "not logged in",
            Style::default().fg(Color::Red),
        ));
    }
    Line::from(spans)
}

fn hint_line(app: &App) -> Line<'static> {
    let hint = if app.viewer.is_idle() {
        "enter: view  r: refresh  l: logout  q: quit"
    } else {
        "esc: dismiss"
    };
    let mut spans = vec![Span::styled(
        hint.to_string(),
        Style::default().fg(Color::Gray),
    )];
    if let Some(last) = app.log.last() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            last.clone(),
            Style::default().fg(Color::Red),
        ));
    }
    Line::from(spans)
}
