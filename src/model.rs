use serde::{Deserialize, Serialize};
use std::fmt;

/// Title used when neither JSON-LD nor the `<title>` element yields one.
pub const FALLBACK_TITLE: &str = "Recipe";

/// A recipe located in an HTML document: its title and the raw ingredient
/// lines in document order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub title: String,
    pub ingredients: Vec<String>,
}

impl Default for Recipe {
    fn default() -> Self {
        Recipe {
            title: FALLBACK_TITLE.to_string(),
            ingredients: Vec::new(),
        }
    }
}

impl Recipe {
    /// An empty ingredient list is a normal outcome meaning "no recipe here".
    pub fn has_ingredients(&self) -> bool {
        !self.ingredients.is_empty()
    }
}

/// Canonical unit codes understood by the AFX ingredient endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitCode {
    // Volume
    Cup,
    Tablespoon,
    Teaspoon,
    FluidOunce,
    Pint,
    Quart,
    Gallon,
    Milliliter,
    Liter,
    // Weight
    Pound,
    Ounce,
    Gram,
    Kilogram,
    /// Pieces, containers and anything unrecognised.
    #[default]
    Count,
}

impl UnitCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitCode::Cup => "CUP",
            UnitCode::Tablespoon => "TABLESPOON",
            UnitCode::Teaspoon => "TEASPOON",
            UnitCode::FluidOunce => "FLUID_OUNCE",
            UnitCode::Pint => "PINT",
            UnitCode::Quart => "QUART",
            UnitCode::Gallon => "GALLON",
            UnitCode::Milliliter => "MILLILITER",
            UnitCode::Liter => "LITER",
            UnitCode::Pound => "POUND",
            UnitCode::Ounce => "OUNCE",
            UnitCode::Gram => "GRAM",
            UnitCode::Kilogram => "KILOGRAM",
            UnitCode::Count => "COUNT",
        }
    }
}

impl fmt::Display for UnitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single amount paired with its unit. `amount` is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParsedQuantity {
    pub amount: f64,
    pub unit: UnitCode,
}

impl Default for ParsedQuantity {
    /// An unparsed quantity means "one of these".
    fn default() -> Self {
        ParsedQuantity {
            amount: 1.0,
            unit: UnitCode::Count,
        }
    }
}

/// An ingredient line reduced to an item name and a single quantity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedIngredient {
    pub name: String,
    pub quantity: ParsedQuantity,
}
