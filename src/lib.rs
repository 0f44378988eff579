//! Save, browse and scale recipes imported from links.
//!
//! Everything is kept in string key-value storage: a durable list of saved
//! recipes and a session store that hands a freshly imported recipe to the
//! detail view. Importing is mocked; a pasted link yields the seed recipe or a
//! generated one.

pub mod builder;
pub mod config;
pub mod error;
pub mod filter;
pub mod generator;
pub mod model;
pub mod resolver;
pub mod scaler;
pub mod seed;
pub mod session;
pub mod sources;
pub mod storage;
pub mod store;

pub use builder::{ImportMode, RecipeImporter, RecipeImporterBuilder};
pub use config::{load_config, AppConfig};
pub use error::{RecibookError, RecipeValidationError};
pub use filter::{filter_recipes, ALL_COLLECTIONS, COLLECTIONS};
pub use generator::{generate_random_recipe, RecipeGenerator};
pub use model::{Ingredient, Recipe};
pub use resolver::resolve;
pub use scaler::{scale, IngredientChecklist, Servings, MAX_SERVINGS, MIN_SERVINGS};
pub use seed::{seed_recipe, SEED_RECIPE_ID};
pub use session::{RecipeBook, SaveOutcome};
pub use storage::{FileStorage, KeyValueStore, MemoryStorage};
pub use store::RecipeStore;

use std::path::Path;

/// Recipe book persisted as `local.json` and `session.json` under `data_dir`
pub fn open_recipe_book(data_dir: &Path) -> RecipeBook<FileStorage, FileStorage> {
    RecipeBook::new(FileStorage::durable(data_dir), FileStorage::session(data_dir))
}

/// Import a link with the sample source and no loading delay
pub async fn import_from_url(url: &str) -> Result<Recipe, RecibookError> {
    RecipeImporter::builder().url(url).build().await
}
