//! REST API type definitions
//!
//! Shared state and response types for the REST API endpoints. Recipe bodies
//! use the core model types directly.

use recipebox_core::RecipeStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RecipeStore>,
}

impl AppState {
    pub fn new(store: Arc<RecipeStore>) -> Self {
        Self { store }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Number of recipes currently stored
    pub recipes: usize,
}
