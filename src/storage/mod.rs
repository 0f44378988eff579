mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::RecibookError;

/// Durable list of saved recipes (JSON array)
pub const RECIPES_KEY: &str = "recibook_recipes";
/// Last link pasted on the landing page or the create dialog (session)
pub const PASTED_URL_KEY: &str = "recibook_pasted_url";
/// Recipe handed from the import flow to the detail view before saving (session)
pub const CURRENT_RECIPE_KEY: &str = "recibook_current_recipe";
/// `"true"` when saving should skip the phone-number confirmation (session)
pub const SKIP_PHONE_MODAL_KEY: &str = "recibook_skip_phone_modal";

/// String key-value storage, the shape of browser local/session storage.
///
/// Implementations take `&self` so one backend can be shared by the store,
/// the resolver and the page flows.
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, `None` if it was never written
    fn get(&self, key: &str) -> Result<Option<String>, RecibookError>;

    /// Overwrite the value under `key`
    fn set(&self, key: &str, value: &str) -> Result<(), RecibookError>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), RecibookError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, RecibookError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), RecibookError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), RecibookError> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, RecibookError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), RecibookError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), RecibookError> {
        (**self).remove(key)
    }
}
