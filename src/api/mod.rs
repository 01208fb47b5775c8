pub mod models;

pub mod fortune;
pub mod joke;
pub mod secret;
pub mod smash;
pub mod vibe;

// Re-exports
pub use models::*;

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    routing::get,
    Router,
};

/// Assemble the full application router around one `AppState`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(fortune::routes())
        .merge(joke::routes())
        .merge(vibe::routes())
        .merge(smash::routes())
        .merge(secret::routes())
        .fallback(not_found_handler)
        .with_state(state)
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let fortunes = state.fortunes.read().await.len();
    let jokes = state.jokes.read().await.len();
    let vibes = state.vibes.read().await.len();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        fortunes,
        jokes,
        vibes,
    })
}

/// Catch-all for unmatched routes.
pub async fn not_found_handler(
    method: Method,
    uri: Uri,
) -> (StatusCode, Json<RouteNotFoundResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(RouteNotFoundResponse {
            success: false,
            error: "Route not found".to_string(),
            path: uri.to_string(),
            method: method.to_string(),
        }),
    )
}
