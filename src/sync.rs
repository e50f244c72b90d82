//! Background worker owning all network I/O for the interactive shell.
//!
//! The UI thread sends [`Command`]s and drains [`Event`]s once per tick.
//! The worker serializes commands, so two refresh cycles can never be in
//! flight at the same time; the shell additionally skips scheduling a
//! refresh while one is pending.

use std::sync::mpsc::{Receiver, SendError, Sender, TryRecvError, channel};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::feed::merge_feed;
use crate::model::{FeedSnap, SnapContent};
use crate::remote::ApiClient;
use crate::store::LocalStore;

#[derive(Debug)]
pub enum Command {
    Refresh,
    Open(String),
    MarkSeen(String),
    Shutdown,
}

#[derive(Debug)]
pub enum Event {
    FeedRefreshed(Vec<FeedSnap>),
    RefreshFailed(String),
    /// No credential is stored; the cycle was skipped without issuing any
    /// request.
    RefreshSkipped,
    SnapOpened {
        id: String,
        content: SnapContent,
    },
    OpenFailed {
        id: String,
        reason: String,
    },
    SeenMarked {
        id: String,
        ok: bool,
    },
}

pub struct FeedWorker {
    tx: Sender<Command>,
    rx: Receiver<Event>,
    handle: Option<JoinHandle<()>>,
}

impl FeedWorker {
    pub fn spawn(store: LocalStore) -> Self {
        let (cmd_tx, cmd_rx) = channel();
        let (evt_tx, evt_rx) = channel();
        let handle = std::thread::spawn(move || worker_loop(store, cmd_rx, evt_tx));
        Self {
            tx: cmd_tx,
            rx: evt_rx,
            handle: Some(handle),
        }
    }

    pub fn send(&self, cmd: Command) {
        let _ = self.tx.send(cmd);
    }

    /// Drain pending events without blocking.
    pub fn poll(&self) -> Vec<Event> {
        let mut out = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(ev) => out.push(ev),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        out
    }

    /// Block for the next event, up to `timeout`.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<Event> {
        self.rx.recv_timeout(timeout).ok()
    }
}

impl Drop for FeedWorker {
    fn drop(&mut self) {
        let _ = self.tx.send(Command::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn worker_loop(store: LocalStore, cmds: Receiver<Command>, events: Sender<Event>) {
    for cmd in cmds {
        let outcome = match cmd {
            Command::Shutdown => break,
            Command::Refresh => refresh(&store, &events),
            Command::Open(id) => open(&store, &events, id),
            Command::MarkSeen(id) => mark_seen(&store, &events, id),
        };
        // A send error means the UI side is gone; stop quietly.
        if outcome.is_err() {
            break;
        }
    }
}

/// Build a client from the store, reading the credential fresh for every
/// command. `Ok(None)` means no credential is stored.
fn api_client(store: &LocalStore) -> anyhow::Result<Option<ApiClient>> {
    let Some(token) = store.get_token()? else {
        return Ok(None);
    };
    let cfg = store.read_config()?;
    Ok(Some(ApiClient::new(cfg.base_url, cfg.api_key, token)?))
}

fn refresh(store: &LocalStore, events: &Sender<Event>) -> Result<(), SendError<Event>> {
    let client = match api_client(store) {
        Ok(Some(client)) => client,
        Ok(None) => return events.send(Event::RefreshSkipped),
        Err(err) => return events.send(Event::RefreshFailed(format!("{:#}", err))),
    };

    // The two listings are independent reads; issue them side by side and
    // join both before merging.
    let (snaps, users) = std::thread::scope(|s| {
        let snaps = s.spawn(|| client.list_snaps());
        let users = s.spawn(|| client.list_users());
        (snaps.join(), users.join())
    });

    let (snaps, users) = match (snaps, users) {
        (Ok(Ok(snaps)), Ok(Ok(users))) => (snaps, users),
        (Ok(Err(err)), _) | (_, Ok(Err(err))) => {
            return events.send(Event::RefreshFailed(format!("{:#}", err)));
        }
        _ => return events.send(Event::RefreshFailed("fetch thread panicked".to_string())),
    };

    events.send(Event::FeedRefreshed(merge_feed(snaps, users)))
}

fn open(store: &LocalStore, events: &Sender<Event>, id: String) -> Result<(), SendError<Event>> {
    let client = match api_client(store) {
        Ok(Some(client)) => client,
        Ok(None) => {
            return events.send(Event::OpenFailed {
                id,
                reason: "not logged in".to_string(),
            });
        }
        Err(err) => {
            return events.send(Event::OpenFailed {
                id,
                reason: format!("{:#}", err),
            });
        }
    };

    match client.get_snap(&id) {
        Ok(content) => events.send(Event::SnapOpened { id, content }),
        Err(err) => events.send(Event::OpenFailed {
            id,
            reason: format!("{:#}", err),
        }),
    }
}

fn mark_seen(store: &LocalStore, events: &Sender<Event>, id: String) -> Result<(), SendError<Event>> {
    let ok = match api_client(store) {
        Ok(Some(client)) => client.mark_seen(&id).is_ok(),
        _ => false,
    };
    events.send(Event::SeenMarked { id, ok })
}
