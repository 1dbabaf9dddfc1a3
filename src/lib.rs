//! Turns recipe web pages into grocery orders.
//!
//! Two pure components do the work:
//! - [`extractors`] finds a recipe's title and raw ingredient lines in HTML,
//!   preferring JSON-LD and falling back to ingredient-named lists.
//! - [`quantity`] parses each line into an item name plus one amount and
//!   [`UnitCode`].
//!
//! [`import_html`] and the [`CartImporter`] builder chain the two and produce
//! the AFX payload the storefront expects. Fetching pages and posting the form
//! are left to the caller.

pub mod afx;
pub mod builder;
pub mod config;
pub mod error;
pub mod extractors;
pub mod model;
pub mod quantity;

#[cfg(feature = "uniffi")]
pub mod uniffi_bindings;

pub use afx::{
    parse_ingredient_for_afx, AfxIngredient, AfxPayload, AfxQuantity, AfxSubmission, Store,
    AFX_ENDPOINT,
};
pub use builder::{CartImporter, CartImporterBuilder, ImportResult};
pub use config::CartConfig;
pub use error::ImportError;
pub use extractors::{extract, RecipeExtractor};
pub use model::{NormalizedIngredient, ParsedQuantity, Recipe, UnitCode};
pub use quantity::{clean_ingredient_name, normalize, normalize_all, parse_number};

use serde::Serialize;

/// Result of a full HTML import: the AFX ingredients plus the recipe title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportResponse {
    pub ingredients: Vec<AfxIngredient>,
    pub recipe_title: String,
}

impl From<AfxSubmission> for ImportResponse {
    fn from(submission: AfxSubmission) -> Self {
        ImportResponse {
            ingredients: submission.payload.ingredients,
            recipe_title: submission.recipe_title,
        }
    }
}

/// Extracts the recipe from `html` and normalizes every ingredient line.
///
/// # Errors
/// `ImportError::NoIngredients` when the page has no recognisable recipe.
pub fn import_html(html: &str) -> Result<ImportResponse, ImportError> {
    match CartImporter::builder().html(html).build()? {
        ImportResult::Submission(submission) => Ok(submission.into()),
        ImportResult::Recipe(_) => Err(ImportError::BuilderError(
            "Expected a submission, got an extracted recipe".to_string(),
        )),
    }
}

/// Version of this library
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
