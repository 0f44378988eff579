//! Saved-recipe list persisted under [`RECIPES_KEY`].
//!
//! The store never reports an error to its caller: unreadable data falls back
//! to the seed recipe and failed writes are logged and dropped.

use log::{debug, warn};
use serde_json::Value;

use crate::model::Recipe;
use crate::seed::seed_recipe;
use crate::storage::{KeyValueStore, RECIPES_KEY};

pub struct RecipeStore<S> {
    storage: S,
}

impl<S: KeyValueStore> RecipeStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Current list of saved recipes, never empty.
    ///
    /// Missing, unparsable or non-array data yields `[seed]`. Entries that do
    /// not validate as recipes are dropped; if none survive the seed is
    /// returned instead.
    pub fn load(&self) -> Vec<Recipe> {
        let raw = match self.storage.get(RECIPES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No saved recipes, using seed recipe");
                return vec![seed_recipe()];
            }
            Err(e) => {
                warn!("Failed to read saved recipes: {}", e);
                return vec![seed_recipe()];
            }
        };

        let entries = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(entries)) => entries,
            Ok(_) => {
                warn!("Saved recipes are not a list, using seed recipe");
                return vec![seed_recipe()];
            }
            Err(e) => {
                warn!("Saved recipes are not valid JSON ({}), using seed recipe", e);
                return vec![seed_recipe()];
            }
        };

        let recipes: Vec<Recipe> = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match Recipe::from_value(entry) {
                Ok(recipe) => Some(recipe),
                Err(e) => {
                    warn!("Skipping saved recipe #{}: {}", index, e);
                    None
                }
            })
            .collect();

        if recipes.is_empty() {
            debug!("Saved recipe list is empty, using seed recipe");
            vec![seed_recipe()]
        } else {
            recipes
        }
    }

    /// Append `recipe` unless a recipe with the same id is already saved.
    pub fn save(&self, recipe: &Recipe) {
        let mut recipes = self.load();
        if recipes.iter().any(|r| r.id == recipe.id) {
            debug!("Recipe '{}' already saved", recipe.id);
            return;
        }
        recipes.push(recipe.clone());
        self.persist(&recipes);
    }

    /// Remove the recipe with `id`; an emptied list is replaced by the seed.
    pub fn delete(&self, id: &str) {
        let mut recipes = self.load();
        recipes.retain(|r| r.id != id);
        if recipes.is_empty() {
            debug!("Last recipe deleted, reinstating seed recipe");
            recipes.push(seed_recipe());
        }
        self.persist(&recipes);
    }

    /// Saved recipe with exactly this id
    pub fn find(&self, id: &str) -> Option<Recipe> {
        self.load().into_iter().find(|r| r.id == id)
    }

    fn persist(&self, recipes: &[Recipe]) {
        let json = match serde_json::to_string(recipes) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to encode saved recipes: {}", e);
                return;
            }
        };
        match self.storage.set(RECIPES_KEY, &json) {
            Ok(()) => debug!("Persisted {} recipes", recipes.len()),
            Err(e) => warn!("Failed to persist saved recipes, change is not durable: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_load_skips_invalid_entries() {
        let raw = r#"[
            {"id":"a","title":"A","baseServings":2,"ingredients":[],"steps":[]},
            {"title":"no id","baseServings":2,"ingredients":[],"steps":[]},
            42
        ]"#;
        let store = RecipeStore::new(MemoryStorage::new().with_entry(RECIPES_KEY, raw));
        let recipes = store.load();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id, "a");
    }

    #[test]
    fn test_load_all_invalid_entries_falls_back_to_seed() {
        let raw = r#"[{"title":"no id"}]"#;
        let store = RecipeStore::new(MemoryStorage::new().with_entry(RECIPES_KEY, raw));
        assert_eq!(store.load(), vec![seed_recipe()]);
    }

    #[test]
    fn test_find() {
        let store = RecipeStore::new(MemoryStorage::new());
        assert!(store.find("mock-1").is_some());
        assert!(store.find("missing").is_none());
    }
}
