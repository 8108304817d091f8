//! Bearer token checks against an external identity service.

use std::time::Duration;

use axum::{
    extract::{FromRef, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use reqwest::{Client, StatusCode};

use crate::{AppState, Error, config::parse_base_url};

const USER_PATH: &str = "auth/v1/user";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A client for the identity service that issues and verifies bearer tokens.
#[derive(Debug, Clone)]
pub struct IdentityService {
    client: Client,
    base_url: String,
    api_key: String,
}

impl IdentityService {
    /// Create a client for the identity service at `base_url` that
    /// identifies itself with `api_key`.
    ///
    /// # Errors
    /// Returns [Error::InvalidConfig] if `base_url` is not an absolute URL or
    /// the HTTP client could not be built.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|error| {
                Error::InvalidConfig(format!("could not build identity service client: {error}"))
            })?;

        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
            api_key: api_key.to_owned(),
        })
    }

    /// Ask the identity service whether `token` belongs to a signed in user.
    ///
    /// # Errors
    /// Returns [Error::InvalidToken] if the service rejects the token, or
    /// [Error::IdentityService] if the service could not be reached or gave
    /// any other answer.
    pub async fn verify(&self, token: &str) -> Result<(), Error> {
        let response = self
            .client
            .get(format!("{}/{USER_PATH}", self.base_url))
            .header("apikey", &self.api_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|error| {
                tracing::error!("could not reach the identity service: {error}");
                Error::IdentityService(error.to_string())
            })?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(Error::InvalidToken),
            status => {
                tracing::error!("the identity service responded with {status}");
                Err(Error::IdentityService(format!(
                    "unexpected status {status}"
                )))
            }
        }
    }
}

/// The state needed for the auth middleware.
#[derive(Clone)]
pub struct AuthState {
    /// The service that checks bearer tokens. Requests are let through
    /// unchecked when this is `None`.
    pub identity_service: Option<IdentityService>,
}

impl FromRef<AppState> for AuthState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            identity_service: state.identity_service.clone(),
        }
    }
}

/// Middleware function that checks for a valid bearer token.
///
/// The request is executed normally if the identity service accepts the
/// token, otherwise an error response is returned.
pub async fn auth_guard(State(state): State<AuthState>, request: Request, next: Next) -> Response {
    let Some(identity_service) = state.identity_service else {
        return next.run(request).await;
    };

    let Some(Authorization(bearer)) = request.headers().typed_get::<Authorization<Bearer>>()
    else {
        return Error::MissingBearerToken.into_response();
    };

    match identity_service.verify(bearer.token()).await {
        Ok(()) => next.run(request).await,
        Err(error) => error.into_response(),
    }
}
