//! JSON bodies shared by the route handlers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// The body sent with every error response, e.g. `{"detail": "Expense not found"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// The body sent after a record has been deleted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeleteAcknowledgement {
    pub success: bool,
}

impl IntoResponse for DeleteAcknowledgement {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Render a JSON error body with `status`.
pub fn render_detail(status: StatusCode, detail: &str) -> Response {
    (
        status,
        Json(ErrorDetail {
            detail: detail.to_owned(),
        }),
    )
        .into_response()
}
