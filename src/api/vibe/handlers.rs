use crate::api::models::*;
use crate::storage::VibeRecord;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::info;

/// GET /api/vibe?mood=... -> the vibe for a mood, or a fallback hint.
///
/// An unknown mood is a normal outcome and still returns 200.
pub async fn lookup_vibe_handler(
    State(state): State<AppState>,
    Query(query): Query<MoodQuery>,
) -> Json<VibeRecord> {
    let mood = query.mood.unwrap_or_default();
    let record = state.vibes.read().await.lookup(&mood);
    Json(record)
}

/// GET /api/vibe/all
pub async fn list_vibes_handler(State(state): State<AppState>) -> Json<VibeListResponse> {
    let store = state.vibes.read().await;

    Json(VibeListResponse {
        vibes: store.all(),
        count: store.len(),
    })
}

/// POST /api/vibe
pub async fn create_vibe_handler(
    State(state): State<AppState>,
    Json(request): Json<NewVibeRequest>,
) -> Result<(StatusCode, Json<VibeMessageResponse>), AppError> {
    let mood = request.mood.unwrap_or_default();
    let emoji = request.emoji.unwrap_or_default();
    let message = request.message.unwrap_or_default();

    let record = state.vibes.write().await.insert(&mood, &emoji, &message)?;

    info!(mood = %record.mood, "Vibe added");

    Ok((
        StatusCode::CREATED,
        Json(VibeMessageResponse {
            message: "Vibe added".to_string(),
            mood: record.mood,
            vibe: record.vibe,
        }),
    ))
}

/// PUT /api/vibe/{mood} -> partial update of emoji and/or message
pub async fn update_vibe_handler(
    State(state): State<AppState>,
    Path(mood): Path<String>,
    Json(request): Json<UpdateVibeRequest>,
) -> Result<Json<VibeMessageResponse>, AppError> {
    let record = state.vibes.write().await.update(
        &mood,
        request.emoji.as_deref(),
        request.message.as_deref(),
    )?;

    Ok(Json(VibeMessageResponse {
        message: "Vibe updated".to_string(),
        mood: record.mood,
        vibe: record.vibe,
    }))
}

/// DELETE /api/vibe/{mood}
pub async fn delete_vibe_handler(
    State(state): State<AppState>,
    Path(mood): Path<String>,
) -> Result<Json<VibeMessageResponse>, AppError> {
    let record = state.vibes.write().await.remove(&mood)?;

    Ok(Json(VibeMessageResponse {
        message: "Vibe deleted".to_string(),
        mood: record.mood,
        vibe: record.vibe,
    }))
}
