//! Integration tests for Tuber Treats.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tuber-treats-integration-tests
//! ```
//!
//! Each test starts its own API server in-process on an ephemeral port, with
//! a freshly seeded store, and talks to it over HTTP with `reqwest`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;

use reqwest::Client;
use tokio::net::TcpListener;
use tuber_treats_api::config::ApiConfig;
use tuber_treats_api::state::AppState;

/// A running API server and a client pointed at it.
pub struct TestServer {
    pub client: Client,
    pub addr: SocketAddr,
    pub state: AppState,
}

impl TestServer {
    /// Start a server with the seeded sample data.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn start() -> Self {
        Self::with_config(ApiConfig::default()).await
    }

    /// Start a server with an empty store.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn start_empty() -> Self {
        Self::with_config(ApiConfig {
            seed_data: false,
            ..ApiConfig::default()
        })
        .await
    }

    async fn with_config(config: ApiConfig) -> Self {
        let state = AppState::from_config(config);
        let app = tuber_treats_api::app(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server error");
        });

        Self {
            client: Client::new(),
            addr,
            state,
        }
    }

    /// Absolute URL for `path` on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}
