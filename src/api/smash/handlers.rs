use crate::api::models::*;
use axum::extract::State;

/// POST /api/smash -> bump the counter
pub async fn smash_handler(State(state): State<AppState>) -> Json<SmashResponse> {
    let smashes = state.smashes.write().await.increment();
    Json(SmashResponse { smashes })
}

/// GET /api/smash (also mounted at /api/smashes)
pub async fn read_smashes_handler(State(state): State<AppState>) -> Json<SmashResponse> {
    let smashes = state.smashes.read().await.value();
    Json(SmashResponse { smashes })
}

/// PUT /api/smash/set -> overwrite the counter with a non-negative value
pub async fn set_smashes_handler(
    State(state): State<AppState>,
    Json(request): Json<SetSmashRequest>,
) -> Result<Json<SmashMessageResponse>, AppError> {
    let value = request.value.ok_or_else(|| {
        AppError::BadRequest("Valid non-negative number required".to_string())
    })?;

    let smashes = state.smashes.write().await.set(value)?;

    Ok(Json(SmashMessageResponse {
        message: "Counter set".to_string(),
        smashes,
    }))
}

/// DELETE /api/smash -> reset to zero, reporting the prior value
pub async fn reset_smashes_handler(State(state): State<AppState>) -> Json<SmashResetResponse> {
    let (previous_value, smashes) = state.smashes.write().await.reset();

    Json(SmashResetResponse {
        message: "Counter reset".to_string(),
        previous_value,
        smashes,
    })
}
