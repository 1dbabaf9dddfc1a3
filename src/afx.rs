//! The AFX ingredient payload and the form that carries it to the storefront.
//!
//! Field names here (`ingredients`, `name`, `quantityList`, `unit`, `amount`,
//! `brand`, `almBrandId`) are fixed by the receiving endpoint.

use crate::error::ImportError;
use crate::model::{NormalizedIngredient, UnitCode};
use crate::quantity::normalize;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Landing endpoint the submission form posts to.
pub const AFX_ENDPOINT: &str = "https://www.amazon.com/afx/ingredients/landing";

/// HTTP method of the submission form.
pub const AFX_METHOD: &str = "POST";

/// Storefronts that accept an AFX ingredient list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Store {
    #[default]
    WholeFoods,
    AmazonFresh,
}

impl Store {
    /// Identifier used in configuration and on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            Store::WholeFoods => "wholefoods",
            Store::AmazonFresh => "amazonfresh",
        }
    }

    /// Display name sent as the `brand` form field.
    pub fn display_name(&self) -> &'static str {
        match self {
            Store::WholeFoods => "Whole Foods",
            Store::AmazonFresh => "Amazon Fresh",
        }
    }

    fn brand_label(&self) -> &'static str {
        match self {
            Store::WholeFoods => "UFG Whole Foods",
            Store::AmazonFresh => "Amazon Fresh",
        }
    }

    /// The `almBrandId` form field: the base64 encoded brand label.
    pub fn brand_id(&self) -> String {
        STANDARD.encode(self.brand_label())
    }
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Store {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wholefoods" => Ok(Store::WholeFoods),
            "amazonfresh" => Ok(Store::AmazonFresh),
            other => Err(ImportError::BuilderError(format!(
                "Unknown store '{other}', expected 'wholefoods' or 'amazonfresh'"
            ))),
        }
    }
}

/// One entry of an AFX `quantityList`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AfxQuantity {
    pub unit: UnitCode,
    #[serde(serialize_with = "serialize_amount")]
    pub amount: f64,
}

/// One ingredient as the AFX endpoint expects it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AfxIngredient {
    pub name: String,
    #[serde(rename = "quantityList")]
    pub quantity_list: Vec<AfxQuantity>,
}

impl From<&NormalizedIngredient> for AfxIngredient {
    fn from(ingredient: &NormalizedIngredient) -> Self {
        AfxIngredient {
            name: ingredient.name.clone(),
            quantity_list: vec![AfxQuantity {
                unit: ingredient.quantity.unit,
                amount: ingredient.quantity.amount,
            }],
        }
    }
}

impl From<NormalizedIngredient> for AfxIngredient {
    fn from(ingredient: NormalizedIngredient) -> Self {
        AfxIngredient::from(&ingredient)
    }
}

/// Normalizes one ingredient line straight into the AFX shape.
pub fn parse_ingredient_for_afx(line: &str) -> AfxIngredient {
    normalize(line).into()
}

/// The JSON document carried in the `ingredients` form field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AfxPayload {
    pub ingredients: Vec<AfxIngredient>,
}

impl AfxPayload {
    pub fn from_normalized(ingredients: &[NormalizedIngredient]) -> Self {
        AfxPayload {
            ingredients: ingredients.iter().map(AfxIngredient::from).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, ImportError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Everything needed to post an ingredient list to a storefront.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AfxSubmission {
    pub payload: AfxPayload,
    pub store: Store,
    pub recipe_title: String,
}

impl AfxSubmission {
    pub fn new(payload: AfxPayload, store: Store, recipe_title: impl Into<String>) -> Self {
        AfxSubmission {
            payload,
            store,
            recipe_title: recipe_title.into(),
        }
    }

    /// Hidden form fields in submission order.
    pub fn form_fields(&self) -> Result<Vec<(&'static str, String)>, ImportError> {
        Ok(vec![
            ("ingredients", self.payload.to_json()?),
            ("brand", self.store.display_name().to_string()),
            ("almBrandId", self.store.brand_id()),
        ])
    }
}

/// Whole amounts go out as JSON integers (`2`, not `2.0`).
fn serialize_amount<S>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if amount.fract() == 0.0 && *amount >= 0.0 && *amount <= u64::MAX as f64 {
        serializer.serialize_u64(*amount as u64)
    } else {
        serializer.serialize_f64(*amount)
    }
}
