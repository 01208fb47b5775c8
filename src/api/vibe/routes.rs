use crate::api::models::AppState;
use crate::api::vibe::handlers::*;
use axum::{
    routing::{get, put},
    Router,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/vibe",
            get(lookup_vibe_handler).post(create_vibe_handler),
        )
        .route("/api/vibe/all", get(list_vibes_handler))
        .route(
            "/api/vibe/{mood}",
            put(update_vibe_handler).delete(delete_vibe_handler),
        )
}
