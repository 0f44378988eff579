//! Mocked recipe sources behind the "fetching" screen.
//!
//! No link is ever downloaded: a source answers with a built-in or generated
//! recipe after the configured loading delay.

mod random;
mod sample;

pub use random::RandomSource;
pub use sample::SampleSource;

use async_trait::async_trait;
use log::debug;
use std::time::Duration;
use tokio::time::sleep;

use crate::error::RecibookError;
use crate::model::Recipe;

/// Something that turns a pasted link into a recipe
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Short name used in logs (e.g. "sample", "random")
    fn source_name(&self) -> &str;

    async fn fetch(&self, url: &str) -> Result<Recipe, RecibookError>;
}

/// Show the loading screen for `delay`, then ask `source` for the recipe
pub async fn fetch_with_delay(
    source: &dyn RecipeSource,
    url: &str,
    delay: Duration,
) -> Result<Recipe, RecibookError> {
    if !delay.is_zero() {
        debug!("Fetching {} via {} ({:?})", url, source.source_name(), delay);
        sleep(delay).await;
    }
    source.fetch(url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fetch_waits_for_delay() {
        let start = tokio::time::Instant::now();
        let recipe = fetch_with_delay(&SampleSource, "https://example.com", Duration::from_secs(3))
            .await
            .unwrap();
        assert!(start.elapsed() >= Duration::from_secs(3));
        assert_eq!(recipe.id, crate::seed::SEED_RECIPE_ID);
    }

    #[tokio::test]
    async fn test_zero_delay_returns_immediately() {
        let recipe = fetch_with_delay(&SampleSource, "https://example.com", Duration::ZERO)
            .await
            .unwrap();
        assert_eq!(recipe.id, crate::seed::SEED_RECIPE_ID);
    }
}
