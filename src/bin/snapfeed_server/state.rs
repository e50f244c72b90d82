use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use super::*;

pub(crate) struct AppState {
    pub(crate) api_key: String,
    pub(crate) dev_token: String,
    pub(crate) feed: RwLock<FeedState>,
}

impl AppState {
    pub(crate) fn new(args: &Args, seed: Seed) -> Self {
        Self {
            api_key: args.api_key.clone(),
            dev_token: args.dev_token.clone(),
            feed: RwLock::new(FeedState {
                users: seed.users,
                snaps: seed.snaps,
                seen: HashSet::new(),
            }),
        }
    }
}

#[derive(Default)]
pub(crate) struct FeedState {
    pub(crate) users: Vec<SeedUser>,
    pub(crate) snaps: Vec<SeedSnap>,
    pub(crate) seen: HashSet<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Seed {
    #[serde(default)]
    pub(crate) users: Vec<SeedUser>,

    #[serde(default)]
    pub(crate) snaps: Vec<SeedSnap>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub(crate) struct SeedUser {
    #[serde(rename = "_id")]
    pub(crate) id: String,

    pub(crate) username: String,

    #[serde(rename = "profilePicture", default)]
    pub(crate) profile_picture: String,
}

/// One seeded snap: listing fields plus the viewable payload served by
/// `GET /snap/{id}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub(crate) struct SeedSnap {
    #[serde(rename = "_id")]
    pub(crate) id: String,

    pub(crate) from: String,
    pub(crate) date: String,
    pub(crate) image: String,
    pub(crate) duration: u64,
}

pub(crate) fn load_seed(path: &Path) -> Result<Seed> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read seed file {}", path.display()))?;
    serde_json::from_slice(&bytes).context("parse seed file")
}
