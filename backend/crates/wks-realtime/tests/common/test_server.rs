use crate::common::test_db::create_test_pool;

use wks_auth::JwtValidator;
use wks_config::ActivityConfig;
use wks_realtime::{AppState, ConnectionConfig, ShutdownCoordinator};

use std::sync::Arc;

use axum::{Router, routing::get};
use axum_test::TestServer;

/// HS256 requires at least 32 bytes
pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-integration-tests-min-32-bytes-long";

#[derive(Debug, Clone)]
pub struct TestServerConfig {
    pub jwt_secret: Option<Vec<u8>>,
    pub max_connections: usize,
    pub send_buffer_size: usize,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            max_connections: 100,
            send_buffer_size: 32,
        }
    }
}

impl TestServerConfig {
    pub fn with_jwt() -> Self {
        Self {
            jwt_secret: Some(TEST_JWT_SECRET.to_vec()),
            ..Default::default()
        }
    }

    pub fn with_max_connections(max_connections: usize) -> Self {
        Self {
            max_connections,
            ..Default::default()
        }
    }
}

/// Test server with access to AppState for assertions
pub struct TestServerWithState {
    pub server: TestServer,
    pub app_state: AppState,
}

/// Auth disabled: the handshake token is the bare user id
pub async fn create_test_server() -> TestServerWithState {
    create_test_server_with_config(TestServerConfig::default()).await
}

pub async fn create_test_server_with_config(config: TestServerConfig) -> TestServerWithState {
    let app_state = create_test_state(config).await;

    let router = Router::new()
        .route("/ws", get(wks_realtime::handler))
        .with_state(app_state.clone());

    let server = TestServer::builder()
        .http_transport()
        .build(router)
        .expect("Failed to create test server");

    TestServerWithState { server, app_state }
}

/// AppState over a fresh in-memory database, no transport
pub async fn create_test_state(config: TestServerConfig) -> AppState {
    let pool = create_test_pool().await;

    let jwt_validator = config
        .jwt_secret
        .map(|secret| Arc::new(JwtValidator::with_hs256(&secret)));

    AppState::new(
        pool,
        jwt_validator,
        ConnectionConfig {
            send_buffer_size: config.send_buffer_size,
            max_connections: config.max_connections,
        },
        ActivityConfig::default(),
        ShutdownCoordinator::new(),
    )
}
