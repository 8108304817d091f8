//! A stand-in for the identity service that accepts a single token.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use serde_json::json;

use crate::{IdentityService, test_utils::TEST_API_KEY};

/// The only token the fake identity service accepts.
pub(crate) const VALID_TOKEN: &str = "valid-token";

pub(crate) struct FakeIdentityServer {
    pub base_url: String,
    request_count: Arc<AtomicUsize>,
}

impl FakeIdentityServer {
    pub async fn spawn() -> Self {
        let request_count = Arc::new(AtomicUsize::new(0));
        let app = Router::new()
            .route("/auth/v1/user", get(get_user))
            .with_state(request_count.clone());

        Self {
            base_url: super::serve(app).await,
            request_count,
        }
    }

    /// A client for this server that uses the accepted key.
    pub fn service(&self) -> IdentityService {
        IdentityService::new(&self.base_url, TEST_API_KEY)
            .expect("Could not create identity service client")
    }

    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

async fn get_user(
    State(request_count): State<Arc<AtomicUsize>>,
    headers: HeaderMap,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
) -> Response {
    request_count.fetch_add(1, Ordering::SeqCst);

    if headers.get("apikey").is_none_or(|key| key != TEST_API_KEY) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "No API key found in request" })),
        )
            .into_response();
    }

    match bearer {
        Some(TypedHeader(Authorization(bearer))) if bearer.token() == VALID_TOKEN => {
            Json(json!({ "id": "6f1c", "email": "test@example.com" })).into_response()
        }
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "invalid JWT" })),
        )
            .into_response(),
    }
}
