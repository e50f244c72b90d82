//! Viewing lifecycle for a single snap.
//!
//! `Idle -> Loading (on tap) -> Active (on successful fetch) -> Idle (on
//! expiry or dismissal)`, with `Loading -> Idle` on fetch failure. The
//! active state owns everything about the session including its deadline,
//! so replacing or dropping it also cancels the countdown; there are no
//! detached timers to leak.

use std::time::{Duration, Instant};

use crate::model::SnapContent;

#[derive(Debug)]
pub enum ViewerSession {
    Idle,
    /// A snap was tapped; the content fetch is in flight.
    Loading { snap_id: String },
    Active(ActiveSnap),
}

/// The single snap currently displayed full-screen.
#[derive(Debug)]
pub struct ActiveSnap {
    pub snap_id: String,
    pub image: String,

    /// Total display duration in whole seconds.
    pub duration: u64,

    opened_at: Instant,
}

impl ActiveSnap {
    fn new(snap_id: String, content: SnapContent, now: Instant) -> Self {
        Self {
            snap_id,
            image: content.image,
            duration: content.duration,
            opened_at: now,
        }
    }

    /// Whole seconds left: D, D-1, ..., 0 at one-second resolution.
    pub fn remaining_secs(&self, now: Instant) -> u64 {
        let elapsed = now.duration_since(self.opened_at).as_secs();
        self.duration.saturating_sub(elapsed)
    }

    pub fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.opened_at) >= Duration::from_secs(self.duration)
    }
}

impl ViewerSession {
    pub fn is_idle(&self) -> bool {
        matches!(self, ViewerSession::Idle)
    }

    pub fn active(&self) -> Option<&ActiveSnap> {
        match self {
            ViewerSession::Active(active) => Some(active),
            _ => None,
        }
    }

    pub fn loading_id(&self) -> Option<&str> {
        match self {
            ViewerSession::Loading { snap_id } => Some(snap_id),
            _ => None,
        }
    }

    /// Start loading a snap. An in-flight or active session is replaced
    /// wholesale, which also cancels its countdown.
    pub fn open(&mut self, snap_id: String) {
        *self = ViewerSession::Loading { snap_id };
    }

    /// Content arrived for `snap_id`. Returns false (and changes nothing)
    /// if the session has since moved on to a different snap.
    pub fn activate(&mut self, snap_id: &str, content: SnapContent, now: Instant) -> bool {
        match self {
            ViewerSession::Loading { snap_id: id } if id == snap_id => {
                *self = ViewerSession::Active(ActiveSnap::new(snap_id.to_string(), content, now));
                true
            }
            _ => false,
        }
    }

    /// The content fetch for `snap_id` failed; return to idle if that fetch
    /// is still the current session.
    pub fn fail_loading(&mut self, snap_id: &str) -> bool {
        match self {
            ViewerSession::Loading { snap_id: id } if id == snap_id => {
                *self = ViewerSession::Idle;
                true
            }
            _ => false,
        }
    }

    /// Clear the session if its deadline has passed, returning the id that
    /// must now be marked seen. Fires at most once per session: the state
    /// is gone after the first hit.
    pub fn take_expired(&mut self, now: Instant) -> Option<String> {
        if let ViewerSession::Active(active) = self
            && active.expired(now)
        {
            let id = active.snap_id.clone();
            *self = ViewerSession::Idle;
            return Some(id);
        }
        None
    }

    /// Early dismissal. A displayed snap counts as consumed, so its id is
    /// handed back for the mark-seen call; abandoning a pending fetch
    /// consumes nothing.
    pub fn dismiss(&mut self) -> Option<String> {
        match std::mem::replace(self, ViewerSession::Idle) {
            ViewerSession::Active(active) => Some(active.snap_id),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "tests/viewer_tests.rs"]
mod tests;
