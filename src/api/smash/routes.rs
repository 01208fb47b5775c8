use crate::api::models::AppState;
use crate::api::smash::handlers::*;
use axum::{
    routing::{get, post, put},
    Router,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/smash",
            post(smash_handler)
                .get(read_smashes_handler)
                .delete(reset_smashes_handler),
        )
        .route("/api/smash/set", put(set_smashes_handler))
        // Plural alias kept for the frontend's GET /api/smashes.
        .route("/api/smashes", get(read_smashes_handler))
}
