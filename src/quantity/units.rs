use crate::model::UnitCode;
use std::sync::LazyLock;

/// Every spelling the parser recognises, lowercase.
const UNIT_SPELLINGS: &[(&str, UnitCode)] = &[
    // Volume
    ("cup", UnitCode::Cup),
    ("cups", UnitCode::Cup),
    ("c", UnitCode::Cup),
    ("tablespoon", UnitCode::Tablespoon),
    ("tablespoons", UnitCode::Tablespoon),
    ("tbsp", UnitCode::Tablespoon),
    ("tbs", UnitCode::Tablespoon),
    ("teaspoon", UnitCode::Teaspoon),
    ("teaspoons", UnitCode::Teaspoon),
    ("tsp", UnitCode::Teaspoon),
    ("fluid ounce", UnitCode::FluidOunce),
    ("fluid ounces", UnitCode::FluidOunce),
    ("fl oz", UnitCode::FluidOunce),
    ("fl. oz", UnitCode::FluidOunce),
    ("pint", UnitCode::Pint),
    ("pints", UnitCode::Pint),
    ("pt", UnitCode::Pint),
    ("quart", UnitCode::Quart),
    ("quarts", UnitCode::Quart),
    ("qt", UnitCode::Quart),
    ("gallon", UnitCode::Gallon),
    ("gallons", UnitCode::Gallon),
    ("gal", UnitCode::Gallon),
    ("milliliter", UnitCode::Milliliter),
    ("milliliters", UnitCode::Milliliter),
    ("millilitre", UnitCode::Milliliter),
    ("millilitres", UnitCode::Milliliter),
    ("ml", UnitCode::Milliliter),
    ("liter", UnitCode::Liter),
    ("liters", UnitCode::Liter),
    ("litre", UnitCode::Liter),
    ("litres", UnitCode::Liter),
    ("l", UnitCode::Liter),
    // Weight
    ("pound", UnitCode::Pound),
    ("pounds", UnitCode::Pound),
    ("lb", UnitCode::Pound),
    ("lbs", UnitCode::Pound),
    ("ounce", UnitCode::Ounce),
    ("ounces", UnitCode::Ounce),
    ("oz", UnitCode::Ounce),
    ("gram", UnitCode::Gram),
    ("grams", UnitCode::Gram),
    ("g", UnitCode::Gram),
    ("kilogram", UnitCode::Kilogram),
    ("kilograms", UnitCode::Kilogram),
    ("kg", UnitCode::Kilogram),
    // Containers and pieces
    ("piece", UnitCode::Count),
    ("pieces", UnitCode::Count),
    ("clove", UnitCode::Count),
    ("cloves", UnitCode::Count),
    ("can", UnitCode::Count),
    ("cans", UnitCode::Count),
    ("jar", UnitCode::Count),
    ("jars", UnitCode::Count),
    ("package", UnitCode::Count),
    ("packages", UnitCode::Count),
    ("pkg", UnitCode::Count),
    ("bag", UnitCode::Count),
    ("bags", UnitCode::Count),
    ("box", UnitCode::Count),
    ("boxes", UnitCode::Count),
    ("bunch", UnitCode::Count),
    ("bunches", UnitCode::Count),
    ("head", UnitCode::Count),
    ("heads", UnitCode::Count),
    ("stalk", UnitCode::Count),
    ("stalks", UnitCode::Count),
];

/// The spelling table ordered longest first, so "fl oz" wins over "fl" and
/// "lbs" over "lb".
static LONGEST_FIRST: LazyLock<Vec<(&'static str, UnitCode)>> = LazyLock::new(|| {
    let mut spellings = UNIT_SPELLINGS.to_vec();
    spellings.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    spellings
});

/// Looks up an exact unit spelling, ignoring case and surrounding whitespace.
pub fn lookup_unit(text: &str) -> Option<UnitCode> {
    let needle = text.trim().to_lowercase();
    UNIT_SPELLINGS
        .iter()
        .find(|(spelling, _)| *spelling == needle)
        .map(|(_, code)| *code)
}

/// Finds the longest unit spelling at the start of `text` that ends on a word
/// boundary. Returns the unit and the byte length consumed.
pub fn match_unit_prefix(text: &str) -> Option<(UnitCode, usize)> {
    LONGEST_FIRST.iter().find_map(|(spelling, code)| {
        // spellings are ASCII, so a matching prefix is ASCII too
        let head = text.get(..spelling.len())?;
        if !head.eq_ignore_ascii_case(spelling) {
            return None;
        }
        match text[spelling.len()..].chars().next() {
            Some(next) if next.is_alphanumeric() => None,
            _ => Some((*code, spelling.len())),
        }
    })
}

/// All spellings, longest first, for building strip patterns.
pub(crate) fn spellings_longest_first() -> impl Iterator<Item = &'static str> {
    LONGEST_FIRST.iter().map(|(spelling, _)| *spelling)
}
