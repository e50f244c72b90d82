use std::io::Write;

use anyhow::{Context, Result};

use snapfeed::feed::merge_feed;
use snapfeed::store::LocalStore;

use super::require_client;

pub(super) fn list(store: &LocalStore, json: bool) -> Result<()> {
    let client = require_client(store)?;

    // Same pair of reads the interactive shell issues, joined inline.
    let (snaps, users) = std::thread::scope(|s| {
        let snaps = s.spawn(|| client.list_snaps());
        let users = s.spawn(|| client.list_users());
        (snaps.join(), users.join())
    });
    let snaps = snaps.map_err(|_| anyhow::anyhow!("snap fetch panicked"))??;
    let users = users.map_err(|_| anyhow::anyhow!("user fetch panicked"))??;

    let items = merge_feed(snaps, users);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&items).context("serialize feed json")?
        );
    } else if items.is_empty() {
        println!("No snaps received");
    } else {
        for snap in &items {
            println!("{}  {}  {}", snap.id, snap.date, snap.from_user.username);
        }
    }
    Ok(())
}

pub(super) fn view(store: &LocalStore, snap_id: &str, json: bool) -> Result<()> {
    let client = require_client(store)?;
    let content = client.get_snap(snap_id)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&content).context("serialize snap json")?
        );
    } else {
        println!("image: {}", content.image);
        for left in (1..=content.duration).rev() {
            print!("\r{:>3}s", left);
            std::io::stdout().flush().ok();
            std::thread::sleep(std::time::Duration::from_secs(1));
        }
        println!("\r  0s");
    }

    // Consumption is reported after the countdown either way.
    client.mark_seen(snap_id).context("mark seen")?;
    if !json {
        println!("Marked seen: {}", snap_id);
    }
    Ok(())
}
