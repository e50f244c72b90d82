use anyhow::{Context, Result};

use crate::model::{Snap, SnapContent, User};

mod http_client;
mod operations;
mod types;

use self::types::Envelope;

/// Blocking client for the snap backend. Every request carries the static
/// `x-api-key` header and the stored bearer credential.
pub struct ApiClient {
    base_url: String,
    api_key: String,
    token: String,
    client: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: String, api_key: String, token: String) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("snapfeed")
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url,
            api_key,
            token,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
