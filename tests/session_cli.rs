mod common;

use std::path::Path;
use std::process::{Command, Output};

use anyhow::{Context, Result};

fn snapfeed(config_dir: &Path, args: &[&str]) -> Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_snapfeed"))
        .env("SNAPFEED_CONFIG_DIR", config_dir)
        .args(args)
        .output()
        .context("run snapfeed")
}

fn stdout_json(out: &Output) -> Result<serde_json::Value> {
    serde_json::from_slice(&out.stdout).context("parse stdout json")
}

#[test]
fn login_feed_view_logout_flow() -> Result<()> {
    let guard = common::spawn_server()?;
    let dir = tempfile::tempdir()?;

    // login stores the credential and host override.
    let out = snapfeed(
        dir.path(),
        &["login", "--token", &guard.token, "--url", &guard.base_url],
    )?;
    assert!(out.status.success(), "login failed: {:?}", out);

    // The api key differs from the compiled-in default in tests; write it
    // the way a packaged build would carry it.
    {
        let store = snapfeed::store::LocalStore::open(dir.path())?;
        let mut cfg = store.read_config()?;
        cfg.api_key = guard.api_key.clone();
        store.write_config(&cfg)?;
    }

    let out = snapfeed(dir.path(), &["session", "--json"])?;
    assert!(out.status.success());
    let session = stdout_json(&out)?;
    assert_eq!(session["logged_in"], true);
    assert_eq!(session["base_url"], guard.base_url.as_str());

    // feed prints the merged, newest-first list.
    let out = snapfeed(dir.path(), &["feed", "--json"])?;
    assert!(out.status.success(), "feed failed: {:?}", out);
    let feed = stdout_json(&out)?;
    let ids: Vec<&str> = feed
        .as_array()
        .context("feed json array")?
        .iter()
        .map(|s| s["_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["s3", "s2", "s1"]);

    // view fetches content and marks the snap seen.
    let out = snapfeed(dir.path(), &["view", "s2", "--json"])?;
    assert!(out.status.success(), "view failed: {:?}", out);

    let out = snapfeed(dir.path(), &["feed", "--json"])?;
    let feed = stdout_json(&out)?;
    let ids: Vec<&str> = feed
        .as_array()
        .context("feed json array")?
        .iter()
        .map(|s| s["_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["s3", "s1"]);

    // logout clears the credential; authenticated commands now refuse.
    let out = snapfeed(dir.path(), &["logout"])?;
    assert!(out.status.success());

    let out = snapfeed(dir.path(), &["session", "--json"])?;
    let session = stdout_json(&out)?;
    assert_eq!(session["logged_in"], false);

    let out = snapfeed(dir.path(), &["feed", "--json"])?;
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("not logged in"), "stderr: {}", stderr);

    Ok(())
}
