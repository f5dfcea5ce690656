//! Router creation and configuration
//!
//! Creates the Axum router for the REST API endpoints.

use super::handlers::*;
use super::types::AppState;
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use recipebox_core::RecipeStore;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Create REST API router over a shared store
///
/// HEAD is routed to the 405 fallback explicitly, since axum would otherwise
/// answer it with the GET handler. Request bodies are not size-limited.
pub fn create_router(store: Arc<RecipeStore>) -> Router {
    let state = AppState::new(store);

    Router::new()
        .route("/health", get(health))
        .route(
            "/recipes",
            get(list_recipes)
                .head(method_not_allowed)
                .post(create_recipe)
                .fallback(method_not_allowed),
        )
        .route(
            "/recipes/:id",
            get(get_recipe)
                .head(method_not_allowed)
                .put(update_recipe)
                .patch(update_recipe)
                .delete(delete_recipe)
                .fallback(method_not_allowed),
        )
        .fallback(not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
}
