use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RecipeValidationError;

/// A single ingredient line, quantified at the recipe's base servings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub amount: f64,
    pub unit: String,
    pub name: String,
}

impl Ingredient {
    pub fn new(amount: f64, unit: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            amount,
            unit: unit.into(),
            name: name.into(),
        }
    }
}

/// A saved or transient recipe.
///
/// Serialized with the camelCase field names used by the local storage
/// layout (`imageUrl`, `baseServings`, `collectionIds`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub image_url: String,
    pub base_servings: u32,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_ids: Option<Vec<String>>,
}

impl Recipe {
    /// Parse and validate a single recipe from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, RecipeValidationError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Validate an already-decoded JSON value as a recipe.
    ///
    /// `id` and `title` must be non-empty strings, `ingredients` and `steps`
    /// must be present (they may be empty), and `baseServings` must be at
    /// least 1.
    pub fn from_value(value: Value) -> Result<Self, RecipeValidationError> {
        let object = value.as_object().ok_or(RecipeValidationError::NotAnObject)?;

        for field in ["id", "title"] {
            match object.get(field) {
                Some(Value::String(s)) if !s.is_empty() => {}
                _ => return Err(RecipeValidationError::MissingField(field)),
            }
        }
        for field in ["ingredients", "steps"] {
            match object.get(field) {
                None | Some(Value::Null) => {
                    return Err(RecipeValidationError::MissingField(field))
                }
                Some(_) => {}
            }
        }

        let recipe: Recipe =
            serde_json::from_value(value).map_err(|e| RecipeValidationError::InvalidField {
                field: "recipe",
                reason: e.to_string(),
            })?;

        if recipe.base_servings == 0 {
            return Err(RecipeValidationError::InvalidField {
                field: "baseServings",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(recipe)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Whether the recipe is tagged with `collection_id`. Untagged recipes
    /// belong to no collection.
    pub fn in_collection(&self, collection_id: &str) -> bool {
        self.collection_ids
            .as_ref()
            .is_some_and(|ids| ids.iter().any(|id| id == collection_id))
    }

    /// Ingredient names joined by single spaces, as searched by the list filter
    pub fn ingredient_text(&self) -> String {
        self.ingredients
            .iter()
            .map(|i| i.name.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
