//! Development stand-in for the snap backend.
//!
//! Implements the contract the client consumes (`x-api-key` plus bearer
//! auth, `{ "data": ... }` response envelope) over in-memory state seeded
//! from a JSON file. The integration tests spawn it on an ephemeral port.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use clap::Parser;

#[path = "snapfeed_server/state.rs"]
mod state;
use self::state::*;
#[path = "snapfeed_server/handlers.rs"]
mod handlers;
use self::handlers::*;

#[derive(Parser, Debug)]
#[command(name = "snapfeed-server")]
#[command(about = "Dev stand-in for the snap backend", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    addr_file: Option<PathBuf>,

    /// API key clients must present in `x-api-key`
    #[arg(long, default_value = "snapfeed-dev")]
    api_key: String,

    /// Development bearer token
    #[arg(long, default_value = "dev")]
    dev_token: String,

    /// Seed file (JSON: `{ "users": [...], "snaps": [...] }`)
    #[arg(long)]
    seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();

    let seed = match &args.seed {
        Some(path) => load_seed(path)?,
        None => Seed::default(),
    };
    let state = Arc::new(AppState::new(&args, seed));

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;
    let local_addr = listener.local_addr().context("read listener local addr")?;
    eprintln!("snapfeed-server listening on {}", local_addr);
    if let Some(addr_file) = &args.addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
