//! Liveness, readiness and build-info probes. None of them sit under the API prefix.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct ProbeBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    store: Option<&'static str>,
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

/// The process is up; says nothing about the store.
async fn alive() -> Json<ProbeBody> {
    Json(ProbeBody {
        status: "ok",
        store: None,
    })
}

/// 503 while the product repository cannot answer a ping.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ProbeBody>) {
    match state.products.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ProbeBody {
                status: "ok",
                store: Some("ok"),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "product store not ready");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ProbeBody {
                    status: "degraded",
                    store: Some("unavailable"),
                }),
            )
        }
    }
}

async fn build_info() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `/health` and `/version`; neither touches the store.
pub fn common_routes() -> Router {
    Router::new()
        .route("/health", get(alive))
        .route("/version", get(build_info))
}

/// `common_routes` plus `/ready`, which pings the repository held in `state`.
pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(state)
        .merge(common_routes())
}
