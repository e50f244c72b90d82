use anyhow::{Context, Result};

use snapfeed::store::LocalStore;

pub(super) fn login(store: &LocalStore, token: &str, url: Option<String>) -> Result<()> {
    if let Some(url) = url {
        let mut cfg = store.read_config()?;
        cfg.base_url = url.trim_end_matches('/').to_string();
        store.write_config(&cfg)?;
    }
    store.set_token(token)?;
    println!("Logged in");
    Ok(())
}

pub(super) fn logout(store: &LocalStore) -> Result<()> {
    store.clear_token()?;
    println!("Logged out");
    Ok(())
}

pub(super) fn status(store: &LocalStore, json: bool) -> Result<()> {
    let cfg = store.read_config()?;
    let logged_in = store.get_token()?.is_some();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "base_url": cfg.base_url,
                "logged_in": logged_in,
            }))
            .context("serialize session json")?
        );
    } else {
        println!("url: {}", cfg.base_url);
        println!(
            "session: {}",
            if logged_in { "logged in" } else { "logged out" }
        );
    }
    Ok(())
}
