mod common;

use anyhow::{Context, Result};

#[test]
fn stub_server_enforces_api_key_and_bearer() -> Result<()> {
    let guard = common::spawn_server()?;
    let client = reqwest::blocking::Client::new();

    // Public route should be reachable without credentials.
    let health = client
        .get(format!("{}/healthz", guard.base_url))
        .send()
        .context("GET /healthz")?;
    assert!(health.status().is_success());

    // Missing auth entirely.
    let unauth = client
        .get(format!("{}/snap", guard.base_url))
        .send()
        .context("GET /snap without auth")?;
    assert_eq!(unauth.status(), reqwest::StatusCode::UNAUTHORIZED);

    // Bearer alone is not enough; the API key header is required too.
    let no_key = client
        .get(format!("{}/snap", guard.base_url))
        .header(
            reqwest::header::AUTHORIZATION,
            common::auth_header(&guard.token),
        )
        .send()
        .context("GET /snap without api key")?;
    assert_eq!(no_key.status(), reqwest::StatusCode::UNAUTHORIZED);

    // API key alone is not enough either.
    let no_bearer = client
        .get(format!("{}/snap", guard.base_url))
        .header("x-api-key", &guard.api_key)
        .send()
        .context("GET /snap without bearer")?;
    assert_eq!(no_bearer.status(), reqwest::StatusCode::UNAUTHORIZED);

    // Full credentials: 200 with the data envelope.
    let ok = client
        .get(format!("{}/snap", guard.base_url))
        .header("x-api-key", &guard.api_key)
        .header(
            reqwest::header::AUTHORIZATION,
            common::auth_header(&guard.token),
        )
        .send()
        .context("GET /snap with auth")?;
    assert!(ok.status().is_success());
    let body: serde_json::Value = ok.json().context("parse snap envelope")?;
    assert!(body["data"].is_array());

    // Unknown routes still 404 through the composed router.
    let missing = client
        .get(format!("{}/definitely-not-a-route", guard.base_url))
        .header("x-api-key", &guard.api_key)
        .header(
            reqwest::header::AUTHORIZATION,
            common::auth_header(&guard.token),
        )
        .send()
        .context("GET unknown route")?;
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);

    Ok(())
}

#[test]
fn wrong_bearer_token_is_rejected() -> Result<()> {
    let guard = common::spawn_server()?;
    let client = reqwest::blocking::Client::new();

    let resp = client
        .get(format!("{}/user", guard.base_url))
        .header("x-api-key", &guard.api_key)
        .header(reqwest::header::AUTHORIZATION, "Bearer wrong")
        .send()
        .context("GET /user with wrong bearer")?;
    assert_eq!(resp.status(), reqwest::StatusCode::UNAUTHORIZED);

    Ok(())
}
