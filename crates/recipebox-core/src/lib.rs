//! In-memory recipe store for the recipebox service
//!
//! This crate owns the recipe data model and the single shared store that
//! every HTTP request goes through.
//!
//! # Features
//!
//! - **Atomic operations**: each store call runs in one critical section, so
//!   the existence check and the mutation of an update or delete can never be
//!   split by a concurrent request
//! - **Injected id generation**: random UUIDs by default, or a monotonic
//!   counter via [`SequentialIdGenerator`]
//! - **Whole-record replace**: updates overwrite every field and never create
//!
//! # Quick Start
//!
//! ```
//! use recipebox_core::{RecipeDraft, RecipeStore};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> recipebox_core::StoreResult<()> {
//! let store = RecipeStore::default();
//!
//! let id = store
//!     .create(RecipeDraft::new("Tea", "water, leaves", "boil, steep"))
//!     .await;
//!
//! let recipe = store.get(&id).await?;
//! assert_eq!(recipe.name, "Tea");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod id;
pub mod model;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use id::{IdGenerator, SequentialIdGenerator, UuidGenerator};
pub use model::{Recipe, RecipeDraft, RecipeId};
pub use store::RecipeStore;
