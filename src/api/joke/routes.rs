use crate::api::joke::handlers::*;
use crate::api::models::AppState;
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/joke",
            get(random_joke_handler).post(create_joke_handler),
        )
        .route("/api/joke/all", get(list_jokes_handler))
        .route(
            "/api/joke/{id}",
            get(get_joke_handler)
                .put(update_joke_handler)
                .delete(delete_joke_handler),
        )
}
