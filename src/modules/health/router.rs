use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller;

pub fn init_health_router() -> Router<AppState> {
    Router::new().route("/", get(controller::get_health))
}
