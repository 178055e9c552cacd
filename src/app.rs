use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/log", post(handlers::log_form))
        .route("/set-goal", post(handlers::set_goal))
        .route("/api/log", post(handlers::api_log))
        .route("/api/stats", get(handlers::api_stats))
        .route("/api/reset", post(handlers::api_reset))
        .with_state(state)
}
