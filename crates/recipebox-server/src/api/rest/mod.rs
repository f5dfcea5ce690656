//! REST API implementation
//!
//! `/recipes` collection and `/recipes/:id` item routes over a shared
//! [`recipebox_core::RecipeStore`], plus `/health`:
//! - types: shared `AppState` and the health response
//! - extractors: recipe body decoding (400 on bad JSON, 500 on read failure)
//! - handlers: one store call per request, plus the 404/405 fallbacks
//! - router: route table, HEAD rejection, unlimited body size, request tracing

mod extractors;
mod handlers;
mod router;
pub mod types;

// Re-export public API
pub use extractors::JsonExtractor;
pub use router::create_router;
pub use types::{AppState, HealthResponse};
