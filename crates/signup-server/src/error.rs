use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use signup_core::SignupError;

// ---------------------------------------------------------------------------
// Internal sentinels for statuses SignupError does not model
// ---------------------------------------------------------------------------

/// Carries an explicit HTTP 404 through the `anyhow::Error` chain.
#[derive(Debug)]
struct NotFoundError(String);

impl std::fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for NotFoundError {}

/// Carries an explicit HTTP 405 for known paths hit with the wrong method.
#[derive(Debug)]
struct MethodNotAllowedError(String);

impl std::fmt::Display for MethodNotAllowedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for MethodNotAllowedError {}

/// Carries an explicit HTTP 422 (malformed request parameters).
#[derive(Debug)]
struct UnprocessableError(String);

impl std::fmt::Display for UnprocessableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for UnprocessableError {}

// ---------------------------------------------------------------------------
// AppError — unified error type for HTTP responses
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses. Renders as `{"detail": "..."}`.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// Construct a 404 Not Found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self(NotFoundError(msg.into()).into())
    }

    /// Construct a 405 Method Not Allowed error.
    pub fn method_not_allowed(msg: impl Into<String>) -> Self {
        Self(MethodNotAllowedError(msg.into()).into())
    }

    /// Construct a 422 Unprocessable Entity error.
    pub fn unprocessable(msg: impl Into<String>) -> Self {
        Self(UnprocessableError(msg.into()).into())
    }

    fn status(&self) -> StatusCode {
        if self.0.downcast_ref::<NotFoundError>().is_some() {
            return StatusCode::NOT_FOUND;
        }
        if self.0.downcast_ref::<MethodNotAllowedError>().is_some() {
            return StatusCode::METHOD_NOT_ALLOWED;
        }
        if self.0.downcast_ref::<UnprocessableError>().is_some() {
            return StatusCode::UNPROCESSABLE_ENTITY;
        }
        match self.0.downcast_ref::<SignupError>() {
            Some(SignupError::ActivityNotFound(_) | SignupError::ParticipantNotFound { .. }) => {
                StatusCode::NOT_FOUND
            }
            Some(SignupError::AlreadySignedUp { .. }) => StatusCode::BAD_REQUEST,
            Some(
                SignupError::InvalidSeed(_)
                | SignupError::Io(_)
                | SignupError::Yaml(_)
                | SignupError::Json(_),
            )
            | None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %format!("{:#}", self.0), "request failed");
        }
        let body = serde_json::json!({ "detail": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_not_found_maps_to_404() {
        let err = AppError(SignupError::ActivityNotFound("Knitting".into()).into());
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn already_signed_up_maps_to_400() {
        let err = AppError(
            SignupError::AlreadySignedUp {
                activity: "Chess Club".into(),
                email: "a@x.edu".into(),
            }
            .into(),
        );
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn participant_not_found_maps_to_404() {
        let err = AppError(
            SignupError::ParticipantNotFound {
                activity: "Chess Club".into(),
                email: "a@x.edu".into(),
            }
            .into(),
        );
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_seed_maps_to_500() {
        let err = AppError(SignupError::InvalidSeed("empty".into()).into());
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn non_signup_error_maps_to_500() {
        let err = AppError(anyhow::anyhow!("something unexpected"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_constructor_maps_to_404() {
        let err = AppError::not_found("Not Found");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn method_not_allowed_constructor_maps_to_405() {
        let err = AppError::method_not_allowed("Method Not Allowed");
        assert_eq!(
            err.into_response().status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn unprocessable_constructor_maps_to_422() {
        let err = AppError::unprocessable("Missing required query parameter: email");
        assert_eq!(
            err.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn response_body_is_json() {
        let err = AppError(SignupError::ActivityNotFound("x".into()).into());
        let response = err.into_response();
        let ct = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .expect("should have content-type");
        assert!(
            ct.to_str().unwrap().contains("application/json"),
            "expected JSON content type, got {:?}",
            ct
        );
    }
}
