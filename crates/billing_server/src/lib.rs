//! REST API server for subscription invoice scheduling
//!
//! This crate provides the HTTP front for the billing domain layer,
//! exposing invoice schedule generation plus health and readiness
//! endpoints. Request handling is stateless: each request is parsed,
//! handed to [`billing_core`], and mapped back to JSON.
//!
//! # Endpoints
//!
//! - `POST /api/v1/subscription` - Build the invoice schedule for a subscription
//! - `GET /health` - Health check
//! - `GET /ready` - Readiness probe

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

// Re-export the domain layer for integration
pub use billing_core;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
