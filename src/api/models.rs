use crate::storage::{
    Entry, EntryStore, IndexPicker, SmashCounter, StoreError, Vibe, VibeRecord, VibeStore,
};
use axum::{
    extract::rejection::JsonRejection,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::error;

const DEFAULT_FORTUNES: &[&str] = &[
    "You will debug it in 5 minutes... after 55 minutes of panic.",
    "Your next commit will be clean and meaningful.",
    "A bug will disappear when you add one console.log().",
    "You passed the vibe check today. 😎",
];

const DEFAULT_JOKES: &[&str] = &[
    "Why did the developer go broke? Because they used up all their cache.",
    "My code has two moods: works or why-is-this-happening.",
    "I told my program a joke... it just threw an exception.",
];

/// Application state shared across handlers. Every store sits behind its
/// own lock; handlers never hold two store locks at once.
#[derive(Clone)]
pub struct AppState {
    pub fortunes: Arc<RwLock<EntryStore>>,
    pub jokes: Arc<RwLock<EntryStore>>,
    pub vibes: Arc<RwLock<VibeStore>>,
    pub smashes: Arc<RwLock<SmashCounter>>,
    pub picker: Arc<dyn IndexPicker>,
    pub secret_code: Arc<str>,
}

impl AppState {
    /// State with the stock seed data the service ships with.
    pub fn seeded(picker: Arc<dyn IndexPicker>, secret_code: &str) -> Self {
        Self {
            fortunes: Arc::new(RwLock::new(EntryStore::seeded("Fortune", DEFAULT_FORTUNES))),
            jokes: Arc::new(RwLock::new(EntryStore::seeded("Joke", DEFAULT_JOKES))),
            vibes: Arc::new(RwLock::new(VibeStore::with_defaults())),
            smashes: Arc::new(RwLock::new(SmashCounter::new())),
            picker,
            secret_code: Arc::from(secret_code),
        }
    }
}

// ---- Requests ----

/// Body for fortune/joke create and update.
#[derive(Debug, Deserialize)]
pub struct TextBody {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewVibeRequest {
    pub mood: Option<String>,
    pub emoji: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateVibeRequest {
    pub emoji: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetSmashRequest {
    pub value: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct MoodQuery {
    pub mood: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SecretQuery {
    pub code: Option<String>,
}

// ---- Fortune responses ----

#[derive(Debug, Serialize)]
pub struct FortuneTextResponse {
    pub fortune: String,
}

#[derive(Debug, Serialize)]
pub struct FortuneListResponse {
    pub fortunes: Vec<Entry>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct FortuneResponse {
    pub fortune: Entry,
}

#[derive(Debug, Serialize)]
pub struct FortuneMessageResponse {
    pub message: String,
    pub fortune: Entry,
}

// ---- Joke responses ----

#[derive(Debug, Serialize)]
pub struct JokeTextResponse {
    pub joke: String,
}

#[derive(Debug, Serialize)]
pub struct JokeListResponse {
    pub jokes: Vec<Entry>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct JokeResponse {
    pub joke: Entry,
}

#[derive(Debug, Serialize)]
pub struct JokeMessageResponse {
    pub message: String,
    pub joke: Entry,
}

// ---- Vibe responses ----

#[derive(Debug, Serialize)]
pub struct VibeListResponse {
    pub vibes: Vec<VibeRecord>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct VibeMessageResponse {
    pub message: String,
    pub mood: String,
    pub vibe: Vibe,
}

// ---- Smash responses ----

#[derive(Debug, Serialize)]
pub struct SmashResponse {
    pub smashes: i64,
}

#[derive(Debug, Serialize)]
pub struct SmashMessageResponse {
    pub message: String,
    pub smashes: i64,
}

#[derive(Debug, Serialize)]
pub struct SmashResetResponse {
    pub message: String,
    #[serde(rename = "previousValue")]
    pub previous_value: i64,
    pub smashes: i64,
}

// ---- Secret / health / fallback ----

#[derive(Debug, Serialize)]
pub struct SecretResponse {
    pub unlocked: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub fortunes: usize,
    pub jokes: usize,
    pub vibes: usize,
}

#[derive(Debug, Serialize)]
pub struct RouteNotFoundResponse {
    pub success: bool,
    pub error: String,
    pub path: String,
    pub method: String,
}

/// Error response body for handler-level failures.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// JSON body extractor whose rejections go through `AppError`, so a
/// malformed or wrong-typed body gets the same `{error}` envelope as
/// every other failure instead of axum's plain-text response.
#[derive(Debug)]
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::from_request(req, state).await?;
        Ok(Self(value))
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Application error type. Variants map one-to-one onto status codes.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Internal(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidInput(msg) => AppError::BadRequest(msg),
            StoreError::NotFound(msg) => AppError::NotFound(msg),
            StoreError::Conflict(msg) => AppError::Conflict(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
