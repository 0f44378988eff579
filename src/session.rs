//! Page flows that hand recipes between the import, detail and list views.
//!
//! Durable state goes through [`RecipeStore`]; the pasted link, the
//! not-yet-saved recipe and the skip-confirmation flag live in a separate
//! session-scoped [`KeyValueStore`]. Session write failures are logged and
//! ignored, like durable ones.

use log::{debug, info, warn};
use rand::Rng;

use crate::error::RecibookError;
use crate::filter::filter_recipes;
use crate::generator::RecipeGenerator;
use crate::model::Recipe;
use crate::resolver::resolve_with_session;
use crate::storage::{
    KeyValueStore, CURRENT_RECIPE_KEY, PASTED_URL_KEY, SKIP_PHONE_MODAL_KEY,
};
use crate::store::RecipeStore;

/// Result of pressing "Save Recipe" on the detail view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The recipe is in the store and the hand-off state is cleared
    Saved,
    /// The phone-number confirmation must be shown; nothing was written
    ConfirmationRequired,
}

pub struct RecipeBook<D, S> {
    store: RecipeStore<D>,
    session: S,
}

impl<D: KeyValueStore, S: KeyValueStore> RecipeBook<D, S> {
    pub fn new(durable: D, session: S) -> Self {
        Self {
            store: RecipeStore::new(durable),
            session,
        }
    }

    pub fn store(&self) -> &RecipeStore<D> {
        &self.store
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    /// Landing page: remember the pasted link before the fetching screen.
    ///
    /// Does not touch the hand-off recipe, so the detail view afterwards shows
    /// whatever is already handed off, or the seed recipe.
    pub fn submit_url(&self, url: &str) -> Result<String, RecibookError> {
        let url = validate_url(url)?;
        self.session_set(PASTED_URL_KEY, &url);
        info!("Importing recipe from {}", url);
        Ok(url)
    }

    /// List page "create recipe": generate a recipe for the pasted link and
    /// hand it to the detail view with the save confirmation skipped.
    pub fn create_from_url<R: Rng>(
        &self,
        url: &str,
        generator: &mut RecipeGenerator<R>,
    ) -> Result<Recipe, RecibookError> {
        let url = validate_url(url)?;
        let recipe = generator.generate();
        self.hand_off(&url, &recipe)?;
        Ok(recipe)
    }

    /// Store `recipe` as the pending import for `url`
    pub fn hand_off(&self, url: &str, recipe: &Recipe) -> Result<(), RecibookError> {
        let json = recipe.to_json()?;
        self.session_set(PASTED_URL_KEY, url);
        self.session_set(SKIP_PHONE_MODAL_KEY, "true");
        self.session_set(CURRENT_RECIPE_KEY, &json);
        debug!("Handed off recipe '{}' for {}", recipe.id, url);
        Ok(())
    }

    /// Recipe for the detail view; see [`crate::resolver::resolve`]
    pub fn resolve(&self, id: Option<&str>) -> Recipe {
        resolve_with_session(&self.store, &self.session, id)
    }

    pub fn pasted_url(&self) -> Option<String> {
        self.session_get(PASTED_URL_KEY)
    }

    pub fn skips_confirmation(&self) -> bool {
        self.session_get(SKIP_PHONE_MODAL_KEY).as_deref() == Some("true")
    }

    /// Save directly when the confirmation is skipped, otherwise ask for it.
    pub fn request_save(&self, recipe: &Recipe) -> SaveOutcome {
        if self.skips_confirmation() {
            self.save_without_confirmation(recipe)
        } else {
            debug!("Save of '{}' needs confirmation", recipe.id);
            SaveOutcome::ConfirmationRequired
        }
    }

    pub fn save_without_confirmation(&self, recipe: &Recipe) -> SaveOutcome {
        self.store.save(recipe);
        self.session_remove(SKIP_PHONE_MODAL_KEY);
        self.session_remove(CURRENT_RECIPE_KEY);
        info!("Saved recipe '{}'", recipe.title);
        SaveOutcome::Saved
    }

    pub fn delete_recipe(&self, id: &str) {
        self.store.delete(id);
        self.session_remove(CURRENT_RECIPE_KEY);
        info!("Deleted recipe '{}'", id);
    }

    /// Saved recipes matching the list page's search box and collection tab
    pub fn list(&self, query: &str, collection_id: &str) -> Vec<Recipe> {
        let recipes = self.store.load();
        filter_recipes(&recipes, query, collection_id)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Forget every session-scoped key, as when the browser session ends
    pub fn end_session(&self) {
        for key in [PASTED_URL_KEY, CURRENT_RECIPE_KEY, SKIP_PHONE_MODAL_KEY] {
            self.session_remove(key);
        }
    }

    fn session_get(&self, key: &str) -> Option<String> {
        self.session.get(key).unwrap_or_else(|e| {
            warn!("Failed to read session key '{}': {}", key, e);
            None
        })
    }

    fn session_set(&self, key: &str, value: &str) {
        if let Err(e) = self.session.set(key, value) {
            warn!("Failed to write session key '{}': {}", key, e);
        }
    }

    fn session_remove(&self, key: &str) {
        if let Err(e) = self.session.remove(key) {
            warn!("Failed to clear session key '{}': {}", key, e);
        }
    }
}

/// Trimmed link, rejecting blank input
pub fn validate_url(url: &str) -> Result<String, RecibookError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(RecibookError::InvalidUrl(
            "Recipe link cannot be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert_eq!(
            validate_url("  https://example.com/r  ").unwrap(),
            "https://example.com/r"
        );
        assert!(matches!(
            validate_url("   "),
            Err(RecibookError::InvalidUrl(_))
        ));
    }
}
