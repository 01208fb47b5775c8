use crate::api::models::*;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;

fn parse_id(raw: &str) -> Result<u64, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest("Invalid fortune id".to_string()))
}

/// GET /api/fortune -> one random fortune's text
pub async fn random_fortune_handler(
    State(state): State<AppState>,
) -> Result<Json<FortuneTextResponse>, AppError> {
    let store = state.fortunes.read().await;
    let entry = store.pick_random(state.picker.as_ref())?;

    Ok(Json(FortuneTextResponse {
        fortune: entry.text.clone(),
    }))
}

/// GET /api/fortune/all -> every fortune, in insertion order
pub async fn list_fortunes_handler(State(state): State<AppState>) -> Json<FortuneListResponse> {
    let store = state.fortunes.read().await;

    Json(FortuneListResponse {
        fortunes: store.list().to_vec(),
        count: store.len(),
    })
}

/// GET /api/fortune/{id}
pub async fn get_fortune_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FortuneResponse>, AppError> {
    let id = parse_id(&id)?;
    let store = state.fortunes.read().await;
    let entry = store.get(id)?;

    Ok(Json(FortuneResponse {
        fortune: entry.clone(),
    }))
}

/// POST /api/fortune
pub async fn create_fortune_handler(
    State(state): State<AppState>,
    Json(request): Json<TextBody>,
) -> Result<(StatusCode, Json<FortuneMessageResponse>), AppError> {
    let text = request.text.unwrap_or_default();
    let entry = state.fortunes.write().await.create(&text)?;

    info!(id = entry.id, "Fortune added");

    Ok((
        StatusCode::CREATED,
        Json(FortuneMessageResponse {
            message: "Fortune added".to_string(),
            fortune: entry,
        }),
    ))
}

/// PUT /api/fortune/{id}
pub async fn update_fortune_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<TextBody>,
) -> Result<Json<FortuneMessageResponse>, AppError> {
    let id = parse_id(&id)?;
    let text = request.text.unwrap_or_default();
    let entry = state.fortunes.write().await.update(id, &text)?;

    Ok(Json(FortuneMessageResponse {
        message: "Fortune updated".to_string(),
        fortune: entry,
    }))
}

/// DELETE /api/fortune/{id}
pub async fn delete_fortune_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FortuneMessageResponse>, AppError> {
    let id = parse_id(&id)?;
    let entry = state.fortunes.write().await.remove(id)?;

    Ok(Json(FortuneMessageResponse {
        message: "Fortune deleted".to_string(),
        fortune: entry,
    }))
}
