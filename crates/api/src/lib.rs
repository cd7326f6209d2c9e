//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for budget editing sessions
//! - The in-memory session store
//! - JSON error responses

pub mod error;
pub mod routes;
pub mod sessions;

use axum::Router;
use mbudget_core::session::{BudgetPersister, DefaultBudgetProvider, ProjectCostSource};
use mbudget_shared::config::SessionConfig;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub use sessions::SessionStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Open budget editing sessions.
    pub sessions: Arc<SessionStore>,
    /// Source of default category percentages.
    pub defaults: Arc<dyn DefaultBudgetProvider>,
    /// Source of project costs.
    pub costs: Arc<dyn ProjectCostSource>,
    /// Where committed budgets are stored.
    pub persister: Arc<dyn BudgetPersister>,
    /// Limits and defaults for new sessions.
    pub session_config: SessionConfig,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
