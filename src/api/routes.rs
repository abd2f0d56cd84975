//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    append_handler, check_and_set_handler, decrement_handler, delete_handler, flush_handler,
    get_handler, health_handler, increment_handler, prepend_handler, set_handler, stats_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// Arguments travel in the query string. Reads answer GET; every mutating
/// route answers both GET and POST.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/get", get(get_handler))
        .route("/set", get(set_handler).post(set_handler))
        .route("/delete", get(delete_handler).post(delete_handler))
        .route(
            "/checkandset",
            get(check_and_set_handler).post(check_and_set_handler),
        )
        .route("/increment", get(increment_handler).post(increment_handler))
        .route("/decrement", get(decrement_handler).post(decrement_handler))
        .route("/append", get(append_handler).post(append_handler))
        .route("/prepend", get(prepend_handler).post(prepend_handler))
        .route("/flush", get(flush_handler).post(flush_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
