use crate::api::models::AppState;
use crate::api::secret::handlers::secret_handler;
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/secret", get(secret_handler))
}
