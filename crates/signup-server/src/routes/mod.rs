pub mod activities;

use axum::response::Redirect;

use crate::error::AppError;

/// GET / — the UI lives under /static.
pub async fn root() -> Redirect {
    Redirect::temporary("/static/index.html")
}

/// Catch-all for unmatched routes.
pub async fn not_found() -> AppError {
    AppError::not_found("Not Found")
}

/// Known path, unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed("Method Not Allowed")
}
