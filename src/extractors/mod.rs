use crate::config::ExtractorsConfig;
use crate::model::{Recipe, FALLBACK_TITLE};
use html_escape::decode_html_entities;
use log::{debug, info};
use scraper::Html;

mod html_list;
mod json_ld;
mod markup;

pub use self::html_list::HtmlListExtractor;
pub use self::json_ld::JsonLdExtractor;
pub use self::markup::{normalize_whitespace, MarkupQuery};

/// A strategy for locating raw ingredient lines.
pub trait Extractor {
    fn name(&self) -> &'static str;
    /// Ingredient lines in document order; empty when nothing was found.
    fn ingredients(&self, query: &dyn MarkupQuery) -> Vec<String>;
}

/// Locates a recipe's title and ingredient lines in an HTML document.
///
/// Ingredient strategies run in order (JSON-LD, then HTML lists) and the first
/// non-empty result wins. Nothing here fails: a page without a recipe yields
/// an empty ingredient list.
pub struct RecipeExtractor {
    extractors: Vec<Box<dyn Extractor>>,
}

impl Default for RecipeExtractor {
    fn default() -> Self {
        Self::from_config(&ExtractorsConfig::default())
    }
}

impl RecipeExtractor {
    pub fn from_config(config: &ExtractorsConfig) -> Self {
        let mut extractors: Vec<Box<dyn Extractor>> = Vec::new();
        if config.json_ld {
            extractors.push(Box::new(JsonLdExtractor));
        }
        if config.html_lists {
            extractors.push(Box::new(HtmlListExtractor));
        }
        RecipeExtractor { extractors }
    }

    pub fn extract(&self, html: &str) -> Recipe {
        let document = Html::parse_document(html);
        self.extract_from(&document)
    }

    pub fn extract_from(&self, query: &dyn MarkupQuery) -> Recipe {
        let title = resolve_title(query);
        debug!("RecipeExtractor: Title resolved to '{}'", title);

        for extractor in &self.extractors {
            let ingredients = extractor.ingredients(query);
            if !ingredients.is_empty() {
                info!(
                    "Extracted {} ingredients for '{}' using {}",
                    ingredients.len(),
                    title,
                    extractor.name()
                );
                return Recipe { title, ingredients };
            }
            debug!("RecipeExtractor: {} found no ingredients", extractor.name());
        }

        info!("No ingredients found for '{}'", title);
        Recipe {
            title,
            ingredients: Vec::new(),
        }
    }
}

/// JSON-LD recipe name, then the `<title>` element, then "Recipe".
fn resolve_title(query: &dyn MarkupQuery) -> String {
    if let Some(title) = JsonLdExtractor.title(query) {
        return title;
    }

    query
        .title_text()
        .map(|text| normalize_whitespace(&decode_html_entities(&text)))
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| FALLBACK_TITLE.to_string())
}

/// Extracts a recipe from raw HTML with the default strategies.
pub fn extract(html: &str) -> Recipe {
    RecipeExtractor::default().extract(html)
}
