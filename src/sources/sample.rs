use async_trait::async_trait;

use super::RecipeSource;
use crate::error::RecibookError;
use crate::model::Recipe;
use crate::seed::seed_recipe;

/// Answers every link with the seed recipe, like the landing-page import
pub struct SampleSource;

#[async_trait]
impl RecipeSource for SampleSource {
    fn source_name(&self) -> &str {
        "sample"
    }

    async fn fetch(&self, _url: &str) -> Result<Recipe, RecibookError> {
        Ok(seed_recipe())
    }
}
