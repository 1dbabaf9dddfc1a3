//! UniFFI bindings for recipe-cart
//!
//! FFI-compatible records and synchronous functions for use from iOS and Android.
//! Everything here is pure: the host app fetches the page and posts the form.

use std::fmt;

use crate::afx::{AfxSubmission, Store};
use crate::builder::{CartImporter, ImportResult};
use crate::model::{NormalizedIngredient, Recipe};
use crate::ImportError;

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible recipe structure
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipe {
    /// Recipe title ("Recipe" when the page has none)
    pub title: String,
    /// Raw ingredient lines in document order
    pub ingredients: Vec<String>,
}

impl From<Recipe> for FfiRecipe {
    fn from(recipe: Recipe) -> Self {
        FfiRecipe {
            title: recipe.title,
            ingredients: recipe.ingredients,
        }
    }
}

/// FFI-compatible normalized ingredient
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiNormalizedIngredient {
    pub name: String,
    /// Canonical unit code, e.g. "CUP" or "COUNT"
    pub unit: String,
    pub amount: f64,
}

impl From<NormalizedIngredient> for FfiNormalizedIngredient {
    fn from(ingredient: NormalizedIngredient) -> Self {
        FfiNormalizedIngredient {
            name: ingredient.name,
            unit: ingredient.quantity.unit.as_str().to_string(),
            amount: ingredient.quantity.amount,
        }
    }
}

/// FFI-compatible storefront enum
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiStore {
    WholeFoods,
    AmazonFresh,
}

impl From<FfiStore> for Store {
    fn from(store: FfiStore) -> Self {
        match store {
            FfiStore::WholeFoods => Store::WholeFoods,
            FfiStore::AmazonFresh => Store::AmazonFresh,
        }
    }
}

/// Hidden form field of the AFX submission
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiFormField {
    pub name: String,
    pub value: String,
}

/// FFI-compatible AFX submission: where to post and what to send
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiSubmission {
    pub recipe_title: String,
    pub action: String,
    pub method: String,
    pub fields: Vec<FfiFormField>,
}

impl TryFrom<AfxSubmission> for FfiSubmission {
    type Error = ImportError;

    fn try_from(submission: AfxSubmission) -> Result<Self, Self::Error> {
        let fields = submission
            .form_fields()?
            .into_iter()
            .map(|(name, value)| FfiFormField {
                name: name.to_string(),
                value,
            })
            .collect();

        Ok(FfiSubmission {
            recipe_title: submission.recipe_title,
            action: crate::afx::AFX_ENDPOINT.to_string(),
            method: crate::afx::AFX_METHOD.to_string(),
            fields,
        })
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiImportError {
    /// The page had no recognisable ingredient list
    NoIngredients { message: String },
    /// Failed to serialize the AFX payload
    SerializationError { message: String },
    /// Invalid input provided
    InvalidInput { message: String },
}

impl fmt::Display for FfiImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiImportError::NoIngredients { message } => write!(f, "No ingredients: {}", message),
            FfiImportError::SerializationError { message } => {
                write!(f, "Serialization error: {}", message)
            }
            FfiImportError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
        }
    }
}

impl std::error::Error for FfiImportError {}

impl From<ImportError> for FfiImportError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::NoIngredients { .. } => FfiImportError::NoIngredients {
                message: err.to_string(),
            },
            ImportError::Serialization(e) => FfiImportError::SerializationError {
                message: e.to_string(),
            },
            ImportError::Io(_) | ImportError::BuilderError(_) | ImportError::ConfigError(_) => {
                FfiImportError::InvalidInput {
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Extract the title and raw ingredient lines from an HTML document.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn extract_recipe(html: String) -> FfiRecipe {
    crate::extract(&html).into()
}

/// Normalize a single ingredient line.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn normalize_ingredient(line: String) -> FfiNormalizedIngredient {
    crate::normalize(&line).into()
}

/// Extract, normalize and build the AFX submission for an HTML document.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn import_recipe_html(html: String, store: FfiStore) -> Result<FfiSubmission, FfiImportError> {
    let result = CartImporter::builder()
        .html(html)
        .store(store.into())
        .build()?;

    match result {
        ImportResult::Submission(submission) => Ok(FfiSubmission::try_from(submission)?),
        ImportResult::Recipe(_) => Err(FfiImportError::InvalidInput {
            message: "Expected a submission".to_string(),
        }),
    }
}

/// Get the library version.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    crate::version().to_string()
}
