//! Expense tracker is a web app for recording day-to-day expenses and the
//! categories they are filed under.
//!
//! This library provides a JSON REST API over two stores, one for categories
//! and one for expenses. Each store can be kept in memory for the lifetime of
//! the process, or in a hosted database that exposes its tables through a
//! PostgREST-style REST interface. Requests can optionally be gated behind a
//! bearer token that is checked by an external identity service.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::{StatusCode, header::WWW_AUTHENTICATE},
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod auth;
mod category;
mod config;
mod endpoints;
mod expense;
mod logging;
mod not_found;
mod remote;
mod routing;
mod shared_responses;
#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use auth::{AuthState, IdentityService, auth_guard};
pub use category::{
    Category, CategoryId, CategoryName, CategoryStore, InMemoryCategoryStore, RemoteCategoryStore,
};
pub use config::{Config, StoreBackend};
pub use expense::{
    Expense, ExpenseId, ExpensePatch, ExpenseStore, InMemoryExpenseStore, NewExpense,
    RemoteExpenseStore,
};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use remote::RemoteDatabase;
pub use routing::build_router;

use crate::shared_responses::render_detail;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
///
/// A missing record is not an error: stores return `Ok(None)` when the
/// requested ID does not exist and leave it to the caller to decide what that
/// means.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty string was used to create a category name.
    #[error("Category name cannot be empty")]
    EmptyCategoryName,

    /// The request to the backing database could not be completed, e.g., the
    /// database could not be reached or the connection dropped.
    #[error("could not reach the backing database: {0}")]
    BackingStoreRequest(String),

    /// The backing database rejected the request.
    ///
    /// Holds the HTTP status code and the response body.
    #[error("the backing database responded with status {0}: {1}")]
    BackingStoreStatus(u16, String),

    /// The backing database answered with something other than the expected
    /// rows.
    #[error("unexpected response from the backing database: {0}")]
    BackingStoreResponse(String),

    /// Could not acquire the lock on an in-memory store.
    #[error("could not acquire the store lock")]
    StoreLock,

    /// The request did not carry an `Authorization: Bearer <token>` header.
    #[error("Missing bearer token")]
    MissingBearerToken,

    /// The identity service did not accept the bearer token.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The identity service could not be reached or gave an unexpected answer.
    ///
    /// The error string should only be logged on the server.
    #[error("identity service failure: {0}")]
    IdentityService(String),

    /// A configuration value is missing or malformed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            tracing::error!("could not decode a response from the backing database: {value}");
            Error::BackingStoreResponse(value.to_string())
        } else {
            tracing::error!("a request to the backing database failed: {value}");
            Error::BackingStoreRequest(value.to_string())
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::EmptyCategoryName => {
                render_detail(StatusCode::UNPROCESSABLE_ENTITY, &self.to_string())
            }
            Error::MissingBearerToken | Error::InvalidToken => {
                let response = render_detail(StatusCode::UNAUTHORIZED, &self.to_string());
                ([(WWW_AUTHENTICATE, "Bearer")], response).into_response()
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                render_detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        }
    }
}
