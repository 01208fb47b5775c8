use crate::api::fortune::handlers::*;
use crate::api::models::AppState;
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/fortune",
            get(random_fortune_handler).post(create_fortune_handler),
        )
        .route("/api/fortune/all", get(list_fortunes_handler))
        .route(
            "/api/fortune/{id}",
            get(get_fortune_handler)
                .put(update_fortune_handler)
                .delete(delete_fortune_handler),
        )
}
