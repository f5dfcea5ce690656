//! Recipe data model

use serde::{Deserialize, Serialize};

/// Identifier assigned to a recipe by the store
pub type RecipeId = String;

/// A stored recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
}

/// Recipe content as supplied by a client
///
/// Carries no id: the store assigns one on create and the path decides it on
/// update. An `id` key in the incoming JSON is ignored along with any other
/// unknown key, and missing fields decode to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeDraft {
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
}

impl RecipeDraft {
    pub fn new(
        name: impl Into<String>,
        ingredients: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into(),
            instructions: instructions.into(),
        }
    }

    /// Attach an id, producing the record the store keeps
    pub fn into_recipe(self, id: RecipeId) -> Recipe {
        Recipe {
            id,
            name: self.name,
            ingredients: self.ingredients,
            instructions: self.instructions,
        }
    }
}

impl Recipe {
    /// The demonstration record present in a freshly seeded store
    pub fn seed() -> Self {
        RecipeDraft::new(
            "Honey Garlic Glazed Salmon",
            "honey, soy sauce, lemon juice, red pepper, olive oil, salmon, salt, black pepper, garlic , lemon",
            "whisk, heat,season, cook, flip, add, garnish, serve",
        )
        .into_recipe("id1".to_string())
    }
}
