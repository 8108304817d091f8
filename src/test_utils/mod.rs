#![allow(missing_docs)]

pub(crate) mod fake_identity;
pub(crate) mod fake_rest;
pub(crate) mod http;
pub(crate) mod stores;

pub(crate) use fake_identity::{FakeIdentityServer, VALID_TOKEN};
pub(crate) use fake_rest::FakeRestServer;
pub(crate) use http::{assert_content_type, parse_json_body};
pub(crate) use stores::FailingStore;

/// The key that the fake servers accept.
pub(crate) const TEST_API_KEY: &str = "test-api-key";

/// Serve `app` on an ephemeral local port and return its base URL.
pub(crate) async fn serve(app: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind test listener");
    let address = listener
        .local_addr()
        .expect("Could not get test listener address");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Test server stopped unexpectedly");
    });

    format!("http://{address}")
}
