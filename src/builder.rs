use std::time::Duration;

use crate::session::validate_url;
use crate::sources::{fetch_with_delay, RandomSource, RecipeSource, SampleSource};
use crate::{RecibookError, Recipe};

/// Which mocked source answers the import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImportMode {
    /// Always the seed recipe (landing page)
    #[default]
    Sample,
    /// A generated recipe (list page "create recipe")
    Random,
}

/// Builder for configuring and executing a mocked recipe import
#[derive(Default)]
pub struct RecipeImporterBuilder {
    url: Option<String>,
    mode: ImportMode,
    delay: Option<Duration>,
    source: Option<Box<dyn RecipeSource>>,
}

impl RecipeImporterBuilder {
    /// Set the pasted recipe link
    ///
    /// # Example
    /// ```
    /// use recibook::RecipeImporter;
    ///
    /// let builder = RecipeImporter::builder()
    ///     .url("https://example.com/recipe");
    /// ```
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Answer with a generated recipe instead of the seed recipe
    pub fn random(mut self) -> Self {
        self.mode = ImportMode::Random;
        self
    }

    pub fn mode(mut self, mode: ImportMode) -> Self {
        self.mode = mode;
        self
    }

    /// Length of the loading screen; defaults to no wait
    ///
    /// # Example
    /// ```
    /// use recibook::RecipeImporter;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeImporter::builder()
    ///     .url("https://example.com/recipe")
    ///     .delay(Duration::from_secs(3));
    /// ```
    pub fn delay(mut self, duration: Duration) -> Self {
        self.delay = Some(duration);
        self
    }

    /// Use a custom source; overrides the mode
    pub fn source(mut self, source: impl RecipeSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Build and execute the import
    ///
    /// # Errors
    /// Returns `RecibookError` if:
    /// - No link was specified
    /// - The link is blank
    /// - The source fails
    ///
    /// # Example
    /// ```no_run
    /// # use recibook::RecipeImporter;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let recipe = RecipeImporter::builder()
    ///     .url("https://example.com/recipe")
    ///     .random()
    ///     .build()
    ///     .await?;
    /// println!("{}", recipe.title);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<Recipe, RecibookError> {
        let url = self.url.ok_or_else(|| {
            RecibookError::BuilderError("No recipe link specified. Use .url()".to_string())
        })?;
        let url = validate_url(&url)?;

        let source: Box<dyn RecipeSource> = match (self.source, self.mode) {
            (Some(source), _) => source,
            (None, ImportMode::Sample) => Box::new(SampleSource),
            (None, ImportMode::Random) => Box::new(RandomSource::new()),
        };

        fetch_with_delay(source.as_ref(), &url, self.delay.unwrap_or(Duration::ZERO)).await
    }
}

/// Main entry point for the builder API
pub struct RecipeImporter;

impl RecipeImporter {
    /// Creates a new builder for importing recipes
    ///
    /// # Example
    /// ```
    /// use recibook::RecipeImporter;
    ///
    /// let builder = RecipeImporter::builder();
    /// ```
    pub fn builder() -> RecipeImporterBuilder {
        RecipeImporterBuilder::default()
    }
}
