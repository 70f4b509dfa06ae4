#![allow(dead_code)]

//! Test infrastructure for bb-server probe tests

use bb_hub::{BroadcastConfig, BroadcastHub};
use bb_server::{AppState, build_router};

use axum_test::TestServer;

/// Hub with default settings; call from inside a Tokio runtime
pub fn create_test_hub() -> BroadcastHub {
    BroadcastHub::new(BroadcastConfig::default()).expect("Failed to create test hub")
}

/// Probe server sharing `hub`
pub fn create_test_server(hub: &BroadcastHub) -> TestServer {
    TestServer::builder()
        .build(build_router(AppState::new(hub.clone())))
        .expect("Failed to create test server")
}
