use crate::api::models::*;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;

fn parse_id(raw: &str) -> Result<u64, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest("Invalid joke id".to_string()))
}

/// GET /api/joke -> one random joke's text
pub async fn random_joke_handler(
    State(state): State<AppState>,
) -> Result<Json<JokeTextResponse>, AppError> {
    let store = state.jokes.read().await;
    let entry = store.pick_random(state.picker.as_ref())?;

    Ok(Json(JokeTextResponse {
        joke: entry.text.clone(),
    }))
}

/// GET /api/joke/all -> every joke, in insertion order
pub async fn list_jokes_handler(State(state): State<AppState>) -> Json<JokeListResponse> {
    let store = state.jokes.read().await;

    Json(JokeListResponse {
        jokes: store.list().to_vec(),
        count: store.len(),
    })
}

/// GET /api/joke/{id}
pub async fn get_joke_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JokeResponse>, AppError> {
    let id = parse_id(&id)?;
    let store = state.jokes.read().await;
    let entry = store.get(id)?;

    Ok(Json(JokeResponse {
        joke: entry.clone(),
    }))
}

/// POST /api/joke
pub async fn create_joke_handler(
    State(state): State<AppState>,
    Json(request): Json<TextBody>,
) -> Result<(StatusCode, Json<JokeMessageResponse>), AppError> {
    let text = request.text.unwrap_or_default();
    let entry = state.jokes.write().await.create(&text)?;

    info!(id = entry.id, "Joke added");

    Ok((
        StatusCode::CREATED,
        Json(JokeMessageResponse {
            message: "Joke added".to_string(),
            joke: entry,
        }),
    ))
}

/// PUT /api/joke/{id}
pub async fn update_joke_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<TextBody>,
) -> Result<Json<JokeMessageResponse>, AppError> {
    let id = parse_id(&id)?;
    let text = request.text.unwrap_or_default();
    let entry = state.jokes.write().await.update(id, &text)?;

    Ok(Json(JokeMessageResponse {
        message: "Joke updated".to_string(),
        joke: entry,
    }))
}

/// DELETE /api/joke/{id}
pub async fn delete_joke_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JokeMessageResponse>, AppError> {
    let id = parse_id(&id)?;
    let entry = state.jokes.write().await.remove(id)?;

    Ok(Json(JokeMessageResponse {
        message: "Joke deleted".to_string(),
        joke: entry,
    }))
}
