//! Pure feed construction: merge the snap and user listings into the
//! displayed feed.

use std::collections::{HashMap, HashSet};

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::model::{FeedSnap, SenderProfile, Snap, User};

/// Annotate each snap with its sender's profile, drop duplicate ids and sort
/// newest-first.
///
/// Snaps whose sender is missing from `users` get the placeholder profile;
/// snaps whose timestamp does not parse sort last. First occurrence wins on
/// a duplicate id.
pub fn merge_feed(snaps: Vec<Snap>, users: Vec<User>) -> Vec<FeedSnap> {
    let profiles: HashMap<&str, &User> = users.iter().map(|u| (u.id.as_str(), u)).collect();

    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(snaps.len());
    for snap in &snaps {
        if !seen.insert(snap.id.clone()) {
            continue;
        }
        let from_user = profiles
            .get(snap.from.as_str())
            .map(|u| SenderProfile {
                username: u.username.clone(),
                avatar_url: u.profile_picture.clone(),
            })
            .unwrap_or_else(SenderProfile::unknown);
        items.push(FeedSnap {
            id: snap.id.clone(),
            from: snap.from.clone(),
            date: snap.date.clone(),
            from_user,
        });
    }

    items.sort_by_key(|s| std::cmp::Reverse(parse_ts(&s.date)));
    items
}

fn parse_ts(date: &str) -> i128 {
    OffsetDateTime::parse(date, &Rfc3339)
        .map(|dt| dt.unix_timestamp_nanos())
        .unwrap_or(i128::MIN)
}

/// The locally held, time-sorted list of not-yet-viewed snaps.
#[derive(Debug, Default)]
pub struct Feed {
    items: Vec<FeedSnap>,
}

impl Feed {
    pub fn items(&self) -> &[FeedSnap] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&FeedSnap> {
        self.items.get(idx)
    }

    /// Replace the held list wholesale after a successful refresh. Failed
    /// refreshes never call this, so the prior list survives them.
    pub fn replace(&mut self, items: Vec<FeedSnap>) {
        self.items = items;
    }

    /// Drop a consumed snap. The id may already be gone.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|s| s.id != id);
    }
}

#[cfg(test)]
#[path = "tests/feed_tests.rs"]
mod tests;
