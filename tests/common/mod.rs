//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use axum_test::{TestResponse, TestServer};
use serde_json::Value;

use link_server::config::{CorsSettings, LinkSettings, ServerSettings, Settings};
use link_server::presentation::http::routes;
use link_server::startup::AppState;

/// Test application wrapping the real router
pub struct TestApp {
    pub server: TestServer,
}

impl TestApp {
    /// Create a new test application with default test settings
    pub fn new() -> Self {
        Self::with_settings(test_settings())
    }

    /// Create a test application with custom settings
    pub fn with_settings(settings: Settings) -> Self {
        let state = AppState::new(settings);
        let router = routes::create_router(state);

        Self {
            server: TestServer::new(router).expect("Failed to build test server"),
        }
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.server.get(uri).await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: &Value) -> TestResponse {
        self.server.post(uri).json(body).await
    }
}

/// Settings fixture matching the documented defaults
pub fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".into(),
            port: 0,
        },
        link: LinkSettings {
            domain: "https://snapora.com".into(),
            play_store_url: "https://play.google.com/store/apps/details?id=com.snapora.app".into(),
            package_name: "com.snapora.app".into(),
        },
        cors: CorsSettings {
            allowed_origins: vec![],
        },
        environment: "test".into(),
    }
}
