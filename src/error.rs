use thiserror::Error;

/// Errors that can occur outside the silently-recovering recipe store
#[derive(Error, Debug)]
pub enum RecibookError {
    /// Failed to read or write a storage file
    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to encode or decode JSON
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Storage backend refused the operation
    #[error("Storage error: {0}")]
    StorageError(String),

    /// A recipe payload did not have the expected shape
    #[error("Invalid recipe: {0}")]
    InvalidRecipe(#[from] RecipeValidationError),

    /// The pasted recipe link was empty
    #[error("Invalid recipe URL: {0}")]
    InvalidUrl(String),

    /// No recipe with the requested id is stored
    #[error("Recipe not found: {0}")]
    NotFound(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

/// Reasons a JSON payload is rejected as a recipe
#[derive(Error, Debug)]
pub enum RecipeValidationError {
    #[error("payload is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("payload is not a JSON object")]
    NotAnObject,

    #[error("missing or empty field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}` has the wrong shape: {reason}")]
    InvalidField { field: &'static str, reason: String },
}
