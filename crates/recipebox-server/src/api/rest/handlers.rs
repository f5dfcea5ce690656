//! API endpoint handlers
//!
//! HTTP request handlers for all REST API endpoints. Each handler decodes its
//! input, makes exactly one store call and encodes the result after the store
//! lock has been released.

use super::extractors::JsonExtractor;
use super::types::*;
use crate::error::ServerError;
use axum::{
    extract::{OriginalUri, Path, State},
    http::{Method, StatusCode},
    Json,
};
use recipebox_core::{Recipe, RecipeDraft};
use tracing::{debug, info, warn};

/// Health check endpoint
pub(super) async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        recipes: state.store.len().await,
    })
}

/// GET /recipes
pub(super) async fn list_recipes(State(state): State<AppState>) -> Json<Vec<Recipe>> {
    let recipes = state.store.list().await;
    debug!("Listing {} recipes", recipes.len());
    Json(recipes)
}

/// POST /recipes
pub(super) async fn create_recipe(
    State(state): State<AppState>,
    JsonExtractor(draft): JsonExtractor<RecipeDraft>,
) -> StatusCode {
    let id = state.store.create(draft).await;
    info!("Created recipe {}", id);
    StatusCode::OK
}

/// GET /recipes/:id
pub(super) async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, ServerError> {
    let recipe = state
        .store
        .get(&id)
        .await
        .inspect_err(|_| warn!("Fetch of unknown recipe {}", id))?;
    debug!("Fetched recipe {}", id);
    Ok(Json(recipe))
}

/// PUT or PATCH /recipes/:id, whole-record replace
pub(super) async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonExtractor(draft): JsonExtractor<RecipeDraft>,
) -> Result<StatusCode, ServerError> {
    state
        .store
        .update(&id, draft)
        .await
        .inspect_err(|_| warn!("Update of unknown recipe {}", id))?;
    info!("Replaced recipe {}", id);
    Ok(StatusCode::OK)
}

/// DELETE /recipes/:id
pub(super) async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    let removed = state
        .store
        .delete(&id)
        .await
        .inspect_err(|_| warn!("Delete of unknown recipe {}", id))?;
    info!("Deleted recipe {} ({})", removed.id, removed.name);
    Ok(StatusCode::OK)
}

/// Fallback for a recipe path hit with an unsupported method
pub(super) async fn method_not_allowed(
    method: Method,
    OriginalUri(uri): OriginalUri,
) -> ServerError {
    debug!("Rejected {} {}", method, uri.path());
    ServerError::MethodNotAllowed(format!("{} is not supported on {}", method, uri.path()))
}

/// Fallback for paths matching no route, including malformed recipe paths
pub(super) async fn not_found(OriginalUri(uri): OriginalUri) -> ServerError {
    debug!("No route for {}", uri.path());
    ServerError::NotFound(format!("No resource at {}", uri.path()))
}
