use anyhow::{Context, Result};

use snapfeed::remote::ApiClient;
use snapfeed::store::LocalStore;

use crate::cli_subcommands::Commands;

mod feed;
mod session;

pub(crate) fn handle_command(command: Commands) -> Result<()> {
    let store = LocalStore::open_default()?;

    match command {
        Commands::Login { token, url } => session::login(&store, &token, url),
        Commands::Logout => session::logout(&store),
        Commands::Session { json } => session::status(&store, json),
        Commands::Feed { json } => feed::list(&store, json),
        Commands::View { snap_id, json } => feed::view(&store, &snap_id, json),
    }
}

pub(crate) fn require_client(store: &LocalStore) -> Result<ApiClient> {
    let cfg = store.read_config()?;
    let token = store
        .get_token()?
        .context("not logged in (run `snapfeed login --token ...`)")?;
    ApiClient::new(cfg.base_url, cfg.api_key, token)
}
