//! Shared recipe store
//!
//! A single map guarded by one mutex. Every public operation takes the lock
//! exactly once and releases it before returning, so callers decode and
//! encode JSON outside the critical section and no operation can observe
//! another half-applied.

use crate::error::{StoreError, StoreResult};
use crate::id::{IdGenerator, UuidGenerator};
use crate::model::{Recipe, RecipeDraft, RecipeId};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Authoritative in-memory collection of recipes
pub struct RecipeStore {
    recipes: Mutex<HashMap<RecipeId, Recipe>>,
    ids: Arc<dyn IdGenerator>,
}

impl RecipeStore {
    /// Create an empty store
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            recipes: Mutex::new(HashMap::new()),
            ids,
        }
    }

    /// Create a store holding the demonstration recipe
    pub fn seeded(ids: Arc<dyn IdGenerator>) -> Self {
        let seed = Recipe::seed();
        let mut recipes = HashMap::new();
        recipes.insert(seed.id.clone(), seed);

        Self {
            recipes: Mutex::new(recipes),
            ids,
        }
    }

    /// Snapshot of every stored recipe, in no particular order
    pub async fn list(&self) -> Vec<Recipe> {
        let recipes = self.recipes.lock().await;
        recipes.values().cloned().collect()
    }

    pub async fn get(&self, id: &str) -> StoreResult<Recipe> {
        let recipes = self.recipes.lock().await;
        recipes
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    /// Store a new recipe under a freshly generated id
    pub async fn create(&self, draft: RecipeDraft) -> RecipeId {
        let mut recipes = self.recipes.lock().await;

        // Generators are only unique among their own ids; a record that
        // was inserted some other way may already hold one.
        let mut id = self.ids.next_id();
        while recipes.contains_key(&id) {
            debug!("Generated id {} already in use, drawing another", id);
            id = self.ids.next_id();
        }

        recipes.insert(id.clone(), draft.into_recipe(id.clone()));
        id
    }

    /// Replace the whole recipe stored under `id`
    ///
    /// Fails with [`StoreError::NotFound`] if nothing is stored there; update
    /// never creates.
    pub async fn update(&self, id: &str, draft: RecipeDraft) -> StoreResult<()> {
        let mut recipes = self.recipes.lock().await;
        match recipes.get_mut(id) {
            Some(slot) => {
                *slot = draft.into_recipe(id.to_string());
                Ok(())
            }
            None => Err(StoreError::not_found(id)),
        }
    }

    /// Remove the recipe stored under `id`, returning it
    pub async fn delete(&self, id: &str) -> StoreResult<Recipe> {
        let mut recipes = self.recipes.lock().await;
        recipes.remove(id).ok_or_else(|| StoreError::not_found(id))
    }

    pub async fn len(&self) -> usize {
        self.recipes.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.recipes.lock().await.is_empty()
    }
}

impl Default for RecipeStore {
    fn default() -> Self {
        Self::seeded(Arc::new(UuidGenerator))
    }
}

impl std::fmt::Debug for RecipeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeStore").finish_non_exhaustive()
    }
}
