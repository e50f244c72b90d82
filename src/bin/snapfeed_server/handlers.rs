use axum::extract::{Path, State};

use super::*;

pub(crate) fn build_router(state: Arc<AppState>) -> Router {
    let authed = Router::new()
        .route("/snap", get(list_snaps))
        .route("/user", get(list_users))
        .route("/snap/:id", get(get_snap))
        .route("/snap/seen/:id", put(mark_seen))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/healthz", get(healthz))
        .merge(authed)
        .with_state(state)
}

async fn healthz() -> Response {
    Json(serde_json::json!({"ok": true})).into_response()
}

/// Every authenticated route requires both the static API key and a bearer
/// token, exactly as the production backend does.
async fn require_auth(
    State(state): State<Arc<AppState>>,
    req: axum::extract::Request,
    next: Next,
) -> Response {
    let key_ok = req
        .headers()
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == state.api_key);
    if !key_ok {
        return unauthorized();
    }

    let Some(value) = req.headers().get(header::AUTHORIZATION) else {
        return unauthorized();
    };
    let Ok(value) = value.to_str() else {
        return unauthorized();
    };
    let Some(token) = value.strip_prefix("Bearer ") else {
        return unauthorized();
    };
    if token != state.dev_token {
        return unauthorized();
    }

    next.run(req).await
}

async fn list_snaps(State(state): State<Arc<AppState>>) -> Response {
    let feed = state.feed.read().await;
    let out: Vec<serde_json::Value> = feed
        .snaps
        .iter()
        .filter(|s| !feed.seen.contains(&s.id))
        .map(|s| serde_json::json!({"_id": s.id, "from": s.from, "date": s.date}))
        .collect();
    data(out)
}

async fn list_users(State(state): State<Arc<AppState>>) -> Response {
    let feed = state.feed.read().await;
    data(&feed.users)
}

async fn get_snap(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    let feed = state.feed.read().await;
    match feed
        .snaps
        .iter()
        .find(|s| s.id == id && !feed.seen.contains(&s.id))
    {
        Some(s) => data(serde_json::json!({"image": s.image, "duration": s.duration})),
        None => not_found(),
    }
}

async fn mark_seen(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    let mut feed = state.feed.write().await;
    if !feed.snaps.iter().any(|s| s.id == id) {
        return not_found();
    }
    feed.seen.insert(id);
    data(true)
}

fn data<T: serde::Serialize>(value: T) -> Response {
    Json(serde_json::json!({"data": value})).into_response()
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({"error": "unauthorized"})),
    )
        .into_response()
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({"error": "not found"})),
    )
        .into_response()
}
