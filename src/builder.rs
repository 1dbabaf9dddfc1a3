use crate::afx::{AfxPayload, AfxSubmission, Store};
use crate::config::CartConfig;
use crate::extractors::RecipeExtractor;
use crate::model::{Recipe, FALLBACK_TITLE};
use crate::quantity::normalize_all;
use crate::ImportError;
use log::{debug, warn};

/// Represents the input source for an import
#[derive(Debug, Clone)]
pub enum InputSource {
    /// A complete HTML document, already fetched
    Html(String),
    /// Ingredient lines that skip extraction
    Lines(Vec<String>),
}

/// Represents the desired output
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputMode {
    /// Normalize and build the AFX submission (default)
    #[default]
    Submission,
    /// Return the extracted recipe without normalizing
    Recipe,
}

/// Result of an import operation
#[derive(Debug, Clone)]
pub enum ImportResult {
    /// Ready-to-post AFX submission
    Submission(AfxSubmission),
    /// Extracted recipe (raw lines)
    Recipe(Recipe),
}

/// Builder for configuring and executing imports
#[derive(Debug, Default)]
pub struct CartImporterBuilder {
    source: Option<InputSource>,
    mode: OutputMode,
    store: Option<Store>,
    title: Option<String>,
    config: CartConfig,
}

impl CartImporterBuilder {
    /// Set the input source to an HTML document
    ///
    /// # Example
    /// ```
    /// use recipe_cart::CartImporter;
    ///
    /// let builder = CartImporter::builder()
    ///     .html("<html><title>Soup</title></html>");
    /// ```
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.source = Some(InputSource::Html(html.into()));
        self
    }

    /// Set the input source to ingredient lines, bypassing extraction
    ///
    /// # Example
    /// ```
    /// use recipe_cart::CartImporter;
    ///
    /// let builder = CartImporter::builder()
    ///     .lines(["2 cups flour", "1 tsp salt"]);
    /// ```
    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source = Some(InputSource::Lines(
            lines.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Recipe title for line input (HTML input resolves its own)
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Storefront to submit to; overrides the configured store
    pub fn store(mut self, store: Store) -> Self {
        self.store = Some(store);
        self
    }

    /// Use a loaded configuration instead of the defaults
    pub fn config(mut self, config: CartConfig) -> Self {
        self.config = config;
        self
    }

    /// Only extract the recipe; skip normalization
    pub fn extract_only(mut self) -> Self {
        self.mode = OutputMode::Recipe;
        self
    }

    /// Build and execute the import
    ///
    /// # Errors
    /// Returns `ImportError` if:
    /// - No input source was specified
    /// - No ingredients were found
    /// - `extract_only()` was combined with line input
    ///
    /// # Example
    /// ```
    /// use recipe_cart::{CartImporter, ImportResult};
    ///
    /// let result = CartImporter::builder()
    ///     .lines(["2 cups flour"])
    ///     .build()
    ///     .unwrap();
    /// assert!(matches!(result, ImportResult::Submission(_)));
    /// ```
    pub fn build(self) -> Result<ImportResult, ImportError> {
        let source = self.source.ok_or_else(|| {
            ImportError::BuilderError(
                "No input source specified. Use .html() or .lines()".to_string(),
            )
        })?;
        let store = self.store.unwrap_or(self.config.store);

        match (source, self.mode) {
            (InputSource::Html(html), mode) => {
                let extractor = RecipeExtractor::from_config(&self.config.extractors);
                let recipe = extractor.extract(&html);

                if let OutputMode::Recipe = mode {
                    return Ok(ImportResult::Recipe(recipe));
                }
                submission(recipe, store)
            }

            (InputSource::Lines(lines), OutputMode::Submission) => {
                let recipe = Recipe {
                    title: self.title.unwrap_or_else(|| FALLBACK_TITLE.to_string()),
                    ingredients: lines
                        .into_iter()
                        .filter(|line| !line.trim().is_empty())
                        .collect(),
                };
                submission(recipe, store)
            }

            (InputSource::Lines(_), OutputMode::Recipe) => Err(ImportError::BuilderError(
                "Cannot use extract_only() with line input. Lines are already extracted."
                    .to_string(),
            )),
        }
    }
}

fn submission(recipe: Recipe, store: Store) -> Result<ImportResult, ImportError> {
    if !recipe.has_ingredients() {
        warn!("No ingredients found for '{}'", recipe.title);
        return Err(ImportError::NoIngredients {
            title: recipe.title,
        });
    }

    let normalized = normalize_all(&recipe.ingredients);
    debug!(
        "Normalized {} ingredients for {}",
        normalized.len(),
        store.display_name()
    );

    Ok(ImportResult::Submission(AfxSubmission::new(
        AfxPayload::from_normalized(&normalized),
        store,
        recipe.title,
    )))
}

/// Main entry point for the builder API
pub struct CartImporter;

impl CartImporter {
    /// Creates a new builder
    ///
    /// # Example
    /// ```
    /// use recipe_cart::CartImporter;
    ///
    /// let builder = CartImporter::builder();
    /// ```
    pub fn builder() -> CartImporterBuilder {
        CartImporterBuilder::default()
    }
}
