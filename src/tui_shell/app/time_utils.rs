use std::sync::OnceLock;

use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::format_description::well_known::Rfc3339;

fn ts_ui_format() -> &'static [FormatItem<'static>] {
    static FMT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();
    FMT.get_or_init(|| {
        time::format_description::parse(
            "[year]-[month repr:numerical padding:zero]-[day padding:zero] [hour padding:zero]:[minute padding:zero]Z",
        )
        .expect("valid time format")
    })
}

fn fmt_since(ts: &str, now: OffsetDateTime) -> Option<String> {
    let dt = OffsetDateTime::parse(ts, &Rfc3339).ok()?;
    let secs = (now - dt).whole_seconds();
    if secs < 0 {
        return None;
    }

    let mins = secs / 60;
    let hours = mins / 60;
    let days = hours / 24;

    if secs < 60 {
        Some("just now".to_string())
    } else if mins < 60 {
        Some(format!("{}m ago", mins))
    } else if hours < 48 {
        Some(format!("{}h ago", hours))
    } else if days < 14 {
        Some(format!("{}d ago", days))
    } else {
        None
    }
}

/// Relative timestamp for feed rows, falling back to absolute for old or
/// unparsable dates.
pub(super) fn fmt_ts_list(ts: &str, now: OffsetDateTime) -> String {
    fmt_since(ts, now).unwrap_or_else(|| fmt_ts_ui(ts))
}

pub(super) fn fmt_ts_ui(ts: &str) -> String {
    OffsetDateTime::parse(ts, &Rfc3339)
        .ok()
        .and_then(|dt| dt.format(ts_ui_format()).ok())
        .unwrap_or_else(|| ts.to_string())
}

pub(super) fn now_ts() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "<time>".to_string())
}
