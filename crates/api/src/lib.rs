//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes over the core engine
//! - The in-memory engagement store
//! - Error-to-response mapping
//!
//! The core stays pure and synchronous; every side effect (the store, the
//! HTTP transport) lives here.

pub mod error;
pub mod routes;
pub mod store;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use store::EngagementStore;

/// Application state shared across handlers.
#[derive(Clone, Default)]
pub struct AppState {
    /// Engagement store. In-memory: durable persistence is an external
    /// collaborator, not part of this service.
    pub engagements: Arc<EngagementStore>,
}

impl AppState {
    /// Creates empty application state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
