use std::time::{Duration, Instant};

use anyhow::Result;

use crate::feed::Feed;
use crate::store::LocalStore;
use crate::sync::{Command, Event, FeedWorker};
use crate::viewer::ViewerSession;

mod event_loop;
mod overlay;
mod render;
mod rows;
mod time_utils;

pub(super) use event_loop::run_loop;

const REFRESH_INTERVAL: Duration = Duration::from_secs(10);
const LOG_CAP: usize = 200;

pub(super) struct App {
    pub(super) store: LocalStore,
    pub(super) worker: FeedWorker,

    pub(super) feed: Feed,
    pub(super) selected: usize,
    pub(super) viewer: ViewerSession,

    /// True while a refresh command is with the worker; the 10-second
    /// schedule skips ticks until it reports back.
    pub(super) refresh_inflight: bool,
    pub(super) last_refresh: Option<Instant>,
    pub(super) logged_in: bool,
    pub(super) updated_at: Option<String>,

    // Failures land here, never in a blocking UI element.
    pub(super) log: Vec<String>,

    pub(super) quit: bool,
}

impl App {
    pub(super) fn load() -> Result<Self> {
        let store = LocalStore::open_default()?;
        let logged_in = store.get_token()?.is_some();
        let worker = FeedWorker::spawn(store.clone());

        let mut app = Self {
            store,
            worker,
            feed: Feed::default(),
            selected: 0,
            viewer: ViewerSession::Idle,
            refresh_inflight: false,
            last_refresh: None,
            logged_in,
            updated_at: None,
            log: Vec::new(),
            quit: false,
        };
        app.request_refresh();
        Ok(app)
    }

    /// One pass per event-loop iteration: apply worker events, expire the
    /// viewer, and keep the refresh schedule going.
    pub(super) fn tick(&mut self) {
        for ev in self.worker.poll() {
            self.apply_event(ev);
        }

        if let Some(id) = self.viewer.take_expired(Instant::now()) {
            self.consume(id);
        }

        let due = self
            .last_refresh
            .is_none_or(|t| t.elapsed() >= REFRESH_INTERVAL);
        if due {
            self.request_refresh();
        }
    }

    pub(super) fn request_refresh(&mut self) {
        if self.refresh_inflight {
            return;
        }
        self.refresh_inflight = true;
        self.last_refresh = Some(Instant::now());
        self.worker.send(Command::Refresh);
    }

    pub(super) fn open_selected(&mut self) {
        let Some(snap) = self.feed.get(self.selected) else {
            return;
        };
        let id = snap.id.clone();
        self.viewer.open(id.clone());
        self.worker.send(Command::Open(id));
    }

    /// Countdown finished or the viewer was dismissed early: report the
    /// consumption and drop the snap locally. The mark-seen outcome does
    /// not gate removal from the feed.
    pub(super) fn consume(&mut self, id: String) {
        self.worker.send(Command::MarkSeen(id.clone()));
        self.feed.remove(&id);
        self.clamp_selection();
    }

    pub(super) fn logout(&mut self) {
        if let Err(err) = self.store.clear_token() {
            self.push_log(format!("logout failed: {:#}", err));
            return;
        }
        self.logged_in = false;
        self.feed.replace(Vec::new());
        self.selected = 0;
        self.viewer = ViewerSession::Idle;
        self.push_log("logged out; run `snapfeed login --token ...` to sign back in");
    }

    fn apply_event(&mut self, ev: Event) {
        match ev {
            Event::FeedRefreshed(items) => {
                self.refresh_inflight = false;
                self.logged_in = true;
                self.updated_at = Some(time_utils::now_ts());
                self.feed.replace(items);
                self.clamp_selection();
            }
            Event::RefreshFailed(reason) => {
                self.refresh_inflight = false;
                self.push_log(format!("refresh failed: {}", reason));
            }
            Event::RefreshSkipped => {
                self.refresh_inflight = false;
                self.logged_in = false;
            }
            Event::SnapOpened { id, content } => {
                // Stale responses for a session that moved on are dropped.
                self.viewer.activate(&id, content, Instant::now());
            }
            Event::OpenFailed { id, reason } => {
                if self.viewer.fail_loading(&id) {
                    self.push_log(format!("open {} failed: {}", id, reason));
                }
            }
            Event::SeenMarked { id, ok } => {
                if !ok {
                    self.push_log(format!("mark seen {} failed (snap stays consumed locally)", id));
                }
            }
        }
    }

    fn clamp_selection(&mut self) {
        if self.feed.is_empty() {
            self.selected = 0;
        } else {
            self.selected = self.selected.min(self.feed.len() - 1);
        }
    }

    pub(super) fn push_log(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
        if self.log.len() > LOG_CAP {
            let overflow = self.log.len() - LOG_CAP;
            self.log.drain(..overflow);
        }
    }
}
