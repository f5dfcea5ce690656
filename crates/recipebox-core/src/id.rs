//! Recipe id generators

use crate::model::RecipeId;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of fresh recipe ids
///
/// Implementations must never hand out the same id twice.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> RecipeId;
}

/// Random v4 UUIDs
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> RecipeId {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic counter producing `recipe-1`, `recipe-2`, ...
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> RecipeId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("recipe-{}", n)
    }
}
