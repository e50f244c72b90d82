use std::time::{Duration, Instant};

use super::*;

fn content(duration: u64) -> SnapContent {
    SnapContent {
        image: "https://cdn.example/a.jpg".to_string(),
        duration,
    }
}

#[test]
fn open_then_activate() {
    let mut session = ViewerSession::Idle;
    session.open("s1".to_string());
    assert_eq!(session.loading_id(), Some("s1"));

    assert!(session.activate("s1", content(5), Instant::now()));
    let active = session.active().expect("active session");
    assert_eq!(active.snap_id, "s1");
    assert_eq!(active.duration, 5);
}

#[test]
fn activate_ignores_stale_response() {
    let mut session = ViewerSession::Idle;
    session.open("s1".to_string());
    session.open("s2".to_string());

    // The fetch for s1 resolves after s2 was opened; it must not win.
    assert!(!session.activate("s1", content(5), Instant::now()));
    assert_eq!(session.loading_id(), Some("s2"));
}

#[test]
fn fetch_failure_returns_to_idle() {
    let mut session = ViewerSession::Idle;
    session.open("s1".to_string());
    assert!(session.fail_loading("s1"));
    assert!(session.is_idle());

    // A failure for some other snap changes nothing.
    session.open("s2".to_string());
    assert!(!session.fail_loading("s1"));
    assert_eq!(session.loading_id(), Some("s2"));
}

#[test]
fn countdown_runs_from_duration_to_zero() {
    let t0 = Instant::now();
    let mut session = ViewerSession::Idle;
    session.open("s1".to_string());
    session.activate("s1", content(3), t0);

    let active = session.active().unwrap();
    for k in 0..=3u64 {
        let now = t0 + Duration::from_secs(k);
        assert_eq!(active.remaining_secs(now), 3 - k);
    }
    assert!(!active.expired(t0 + Duration::from_secs(2)));
    assert!(active.expired(t0 + Duration::from_secs(3)));
}

#[test]
fn take_expired_fires_exactly_once() {
    let t0 = Instant::now();
    let mut session = ViewerSession::Idle;
    session.open("s1".to_string());
    session.activate("s1", content(2), t0);

    let deadline = t0 + Duration::from_secs(2);
    assert_eq!(session.take_expired(t0), None);
    assert_eq!(session.take_expired(deadline), Some("s1".to_string()));
    assert!(session.is_idle());
    assert_eq!(session.take_expired(deadline), None);
}

#[test]
fn reopening_replaces_the_active_session() {
    let t0 = Instant::now();
    let mut session = ViewerSession::Idle;
    session.open("s1".to_string());
    session.activate("s1", content(1), t0);

    // Opening a second snap cancels the first session outright; its old
    // deadline cannot fire any more.
    session.open("s2".to_string());
    assert_eq!(session.loading_id(), Some("s2"));
    assert_eq!(session.take_expired(t0 + Duration::from_secs(60)), None);
}

#[test]
fn dismiss_consumes_active_but_not_loading() {
    let t0 = Instant::now();
    let mut session = ViewerSession::Idle;
    session.open("s1".to_string());
    assert_eq!(session.dismiss(), None);
    assert!(session.is_idle());

    session.open("s1".to_string());
    session.activate("s1", content(5), t0);
    assert_eq!(session.dismiss(), Some("s1".to_string()));
    assert!(session.is_idle());
}
