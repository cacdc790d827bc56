use axum::extract::{FromRequestParts, Path, Query, State};
use axum::http::request::Parts;
use axum::Json;
use signup_core::Directory;

use crate::error::AppError;
use crate::state::AppState;

const MISSING_EMAIL: &str = "Missing required query parameter: email";

/// The `email` query parameter. A repeated key resolves to its last value.
pub struct EmailParams {
    pub email: Option<String>,
}

impl<S> FromRequestParts<S> for EmailParams
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::unprocessable(e.body_text()))?;
        let email = pairs
            .into_iter()
            .filter(|(key, _)| key == "email")
            .map(|(_, value)| value)
            .last();
        Ok(Self { email })
    }
}

impl EmailParams {
    fn require(self) -> Result<String, AppError> {
        self.email.ok_or_else(|| AppError::unprocessable(MISSING_EMAIL))
    }
}

/// GET /activities — every activity keyed by name, with its current roster.
pub async fn list_activities(State(app): State<AppState>) -> Result<Json<Directory>, AppError> {
    let store = app.store.clone();
    let directory = tokio::task::spawn_blocking(move || store.list())
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(directory))
}

/// POST /activities/{name}/signup?email= — add a student to the roster.
pub async fn signup(
    State(app): State<AppState>,
    Path(name): Path<String>,
    params: EmailParams,
) -> Result<Json<serde_json::Value>, AppError> {
    let email = params.require()?;
    let store = app.store.clone();
    let message = tokio::task::spawn_blocking(move || store.signup(&name, &email))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(serde_json::json!({ "message": message })))
}

/// DELETE /activities/{name}/participants?email= — remove a student from the roster.
pub async fn unregister(
    State(app): State<AppState>,
    Path(name): Path<String>,
    params: EmailParams,
) -> Result<Json<serde_json::Value>, AppError> {
    let email = params.require()?;
    let store = app.store.clone();
    let message = tokio::task::spawn_blocking(move || store.unregister(&name, &email))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(serde_json::json!({ "message": message })))
}
