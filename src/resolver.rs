use log::{debug, warn};

use crate::model::Recipe;
use crate::seed::seed_recipe;
use crate::storage::{KeyValueStore, CURRENT_RECIPE_KEY};
use crate::store::RecipeStore;

/// Pick the recipe for the detail view.
///
/// A valid transient recipe wins over the id lookup, the id lookup wins over
/// the seed recipe. Never fails.
pub fn resolve<S: KeyValueStore>(
    store: &RecipeStore<S>,
    id: Option<&str>,
    transient_recipe_json: Option<&str>,
) -> Recipe {
    if let Some(json) = transient_recipe_json {
        match Recipe::from_json(json) {
            Ok(recipe) => {
                debug!("Resolved transient recipe '{}'", recipe.id);
                return recipe;
            }
            Err(e) => warn!("Ignoring invalid transient recipe: {}", e),
        }
    }

    if let Some(id) = id {
        if let Some(recipe) = store.find(id) {
            debug!("Resolved saved recipe '{}'", id);
            return recipe;
        }
        debug!("No saved recipe '{}', using seed recipe", id);
    }

    seed_recipe()
}

/// [`resolve`] with the transient recipe read from session storage
pub fn resolve_with_session<S: KeyValueStore, T: KeyValueStore>(
    store: &RecipeStore<S>,
    session: &T,
    id: Option<&str>,
) -> Recipe {
    let transient = session.get(CURRENT_RECIPE_KEY).unwrap_or_else(|e| {
        warn!("Failed to read transient recipe: {}", e);
        None
    });
    resolve(store, id, transient.as_deref())
}
