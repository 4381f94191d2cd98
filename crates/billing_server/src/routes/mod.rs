//! Route modules for the billing server
//!
//! This module contains endpoint group-specific routers:
//! - subscription: Invoice schedule endpoint
//! - health: Health check and monitoring endpoints

pub mod health;
pub mod subscription;

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self {
            config,
            start_time: std::time::Instant::now(),
        }
    }
}

/// Build the main application router by merging all route modules
pub fn build_router(config: Arc<ServerConfig>) -> Router {
    let state = AppState::new(config);

    Router::new()
        .merge(health::routes())
        .merge(subscription::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
