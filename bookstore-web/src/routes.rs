//! Page routes

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        // Re-fetched by the page once a removal animation ends
        .route("/page", get(handlers::current_page))
        .route("/books", post(handlers::add_book))
        // One listener for every card button and the modal backdrop
        .route("/events", post(handlers::click))
        .route("/keys", post(handlers::key))
        .route("/edit", post(handlers::edit_book))
        .route("/modal/close", post(handlers::close_modal))
        .route("/delete/confirm", post(handlers::confirm_delete))
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
