use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use snapfeed::remote::ApiClient;
use snapfeed::store::LocalStore;

pub const API_KEY: &str = "test-key";
pub const TOKEN: &str = "dev";

pub struct ServerGuard {
    pub base_url: String,
    pub token: String,
    pub api_key: String,
    _data_dir: tempfile::TempDir,
    child: Child,
}

impl Drop for ServerGuard {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

pub fn spawn_server() -> Result<ServerGuard> {
    spawn_server_with_seed(default_seed())
}

pub fn spawn_server_with_seed(seed: serde_json::Value) -> Result<ServerGuard> {
    let data_dir = tempfile::tempdir().context("create server tempdir")?;

    let seed_path = data_dir.path().join("seed.json");
    std::fs::write(
        &seed_path,
        serde_json::to_vec_pretty(&seed).context("serialize seed")?,
    )
    .context("write seed file")?;

    let addr_file = data_dir.path().join("addr.txt");

    let child = Command::new(env!("CARGO_BIN_EXE_snapfeed-server"))
        .args([
            "--addr",
            "127.0.0.1:0",
            "--addr-file",
            addr_file.to_str().unwrap(),
            "--api-key",
            API_KEY,
            "--dev-token",
            TOKEN,
            "--seed",
            seed_path.to_str().unwrap(),
        ])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("spawn snapfeed-server")?;

    let base_url = read_addr_file(&addr_file)?;
    wait_for_healthz(&base_url)?;

    Ok(ServerGuard {
        base_url,
        token: TOKEN.to_string(),
        api_key: API_KEY.to_string(),
        _data_dir: data_dir,
        child,
    })
}

/// Three snaps from two known senders plus one unknown sender, with
/// timestamps T1 < T2 < T3 (s1 < s2 < s3).
pub fn default_seed() -> serde_json::Value {
    serde_json::json!({
        "users": [
            {"_id": "u1", "username": "alice", "profilePicture": "https://cdn.example/alice.png"},
            {"_id": "u2", "username": "bob", "profilePicture": ""},
        ],
        "snaps": [
            {"_id": "s1", "from": "u1", "date": "2026-08-27T10:00:00Z",
             "image": "https://cdn.example/s1.jpg", "duration": 3},
            {"_id": "s2", "from": "u2", "date": "2026-08-28T09:30:00Z",
             "image": "https://cdn.example/s2.jpg", "duration": 5},
            {"_id": "s3", "from": "u9", "date": "2026-08-28T11:00:00Z",
             "image": "https://cdn.example/s3.jpg", "duration": 2},
        ],
    })
}

fn read_addr_file(addr_file: &Path) -> Result<String> {
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("addr file not written at {}", addr_file.display());
        }

        if let Ok(s) = std::fs::read_to_string(addr_file) {
            let s = s.trim();
            if !s.is_empty() {
                return Ok(format!("http://{}", s));
            }
        }
        thread::sleep(Duration::from_millis(10));
    }
}

pub fn wait_for_healthz(base_url: &str) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("server did not become healthy at {}/healthz", base_url);
        }
        match client.get(format!("{}/healthz", base_url)).send() {
            Ok(resp) if resp.status().is_success() => return Ok(()),
            _ => {
                thread::sleep(Duration::from_millis(50));
            }
        }
    }
}

#[allow(dead_code)]
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}

#[allow(dead_code)]
pub fn client_for(guard: &ServerGuard) -> Result<ApiClient> {
    ApiClient::new(
        guard.base_url.clone(),
        guard.api_key.clone(),
        guard.token.clone(),
    )
}

/// A local store in `dir`, configured against the guarded server and
/// holding its credential.
#[allow(dead_code)]
pub fn store_for(guard: &ServerGuard, dir: &Path) -> Result<LocalStore> {
    let store = LocalStore::open(dir)?;
    let mut cfg = store.read_config()?;
    cfg.base_url = guard.base_url.clone();
    cfg.api_key = guard.api_key.clone();
    store.write_config(&cfg)?;
    store.set_token(&guard.token)?;
    Ok(store)
}
