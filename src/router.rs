use crate::logging::logging_middleware;
use crate::modules::health::router::init_health_router;
use crate::state::AppState;
use axum::{Router, middleware};

/// Builds the application router with the CORS policy installed.
///
/// The CORS layer wraps the entire router, so the policy applies uniformly
/// to every path with no per-route overrides. Preflight `OPTIONS` requests
/// are answered by the layer itself and never reach a handler.
pub fn init_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", Router::new().nest("/health", init_health_router()))
        .with_state(state.clone())
        .layer(state.cors_config.cors_layer())
        .layer(middleware::from_fn(logging_middleware))
}
