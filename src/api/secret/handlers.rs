use crate::api::models::*;
use axum::extract::{Query, State};
use tracing::info;

/// GET /api/secret?code=... -> unlock result for the configured code.
///
/// Touches no store state; the code is compared as-is (case-sensitive).
pub async fn secret_handler(
    State(state): State<AppState>,
    Query(query): Query<SecretQuery>,
) -> Result<Json<SecretResponse>, AppError> {
    let code = query.code.unwrap_or_default();
    if code.is_empty() {
        return Err(AppError::BadRequest(
            "code query parameter is required".to_string(),
        ));
    }

    if code != *state.secret_code {
        return Err(AppError::Unauthorized("Invalid code".to_string()));
    }

    info!("Secret unlocked");

    Ok(Json(SecretResponse {
        unlocked: true,
        message: "You passed the vibe check. Welcome to CPE 411L. 🎉".to_string(),
    }))
}
