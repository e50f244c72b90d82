use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::ListItem;

use time::OffsetDateTime;

use super::App;
use super::time_utils::{fmt_ts_list, fmt_ts_ui};

pub(super) fn list_rows(app: &App, now: OffsetDateTime) -> Vec<ListItem<'static>> {
    let mut rows = Vec::new();

    for snap in app.feed.items() {
        rows.push(
            ListItem::new(format!(
                "{:<24} new snap  {}",
                snap.from_user.username,
                fmt_ts_list(&snap.date, now)
            ))
            .style(Style::default().add_modifier(Modifier::BOLD)),
        );
    }

    if app.feed.is_empty() {
        let hint = if app.logged_in {
            "(no snaps received)"
        } else {
            "(not logged in; run `snapfeed login --token ...`)"
        };
        rows.push(ListItem::new(hint).style(Style::default().fg(Color::Gray)));
    }
    rows
}

pub(super) fn details_lines(app: &App) -> Vec<Line<'static>> {
    let Some(snap) = app.feed.get(app.selected) else {
        return vec![Line::from("select a snap to see its details")];
    };

    let avatar = if snap.from_user.avatar_url.is_empty() {
        "(none)".to_string()
    } else {
        snap.from_user.avatar_url.clone()
    };
    vec![
        Line::from(format!("id: {}", snap.id)),
        Line::from(format!(
            "from: {} ({})  avatar: {}",
            snap.from_user.username, snap.from, avatar
        )),
        Line::from(format!("sent: {}", fmt_ts_ui(&snap.date))),
    ]
}
