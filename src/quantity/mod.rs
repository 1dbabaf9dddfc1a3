//! Quantity normalization for free-text ingredient lines.
//!
//! Everything here is a pure function of its input: no I/O, no shared state.

mod name;
mod number;
mod units;

pub use self::name::{clean_ingredient_name, PREPARATION_WORDS};
pub use self::number::{parse_number, UNICODE_FRACTIONS};
pub use self::units::{lookup_unit, match_unit_prefix};

use crate::model::{NormalizedIngredient, ParsedQuantity, UnitCode};
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

use self::number::FRACTION_GLYPHS;

/// "2 (14.5 ounce) cans": a count of containers with their size in brackets.
static COMPOUND_CONTAINER: LazyLock<Regex> = LazyLock::new(|| {
    let g = FRACTION_GLYPHS;
    Regex::new(&format!(
        r"(?P<count>\d+(?:\s+\d+/\d+)?|[{g}])\s*\((?P<inner>\d+(?:\.\d+)?(?:\s+\d+/\d+)?|\d+/\d+|[{g}])\s*(?P<unit>[a-zA-Z.\s]+)\)\s*(?P<outer>[a-zA-Z]+)"
    ))
    .expect("valid compound container pattern")
});

/// An amount token directly followed by a word run.
static SIMPLE_QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    let g = FRACTION_GLYPHS;
    Regex::new(&format!(
        r"(?P<amount>\d+\s+\d+/\d+|\d+\s*[{g}]|\d+/\d+|\d+(?:\.\d+)?|[{g}])\s*(?P<rest>[a-zA-Z].*)"
    ))
    .expect("valid simple quantity pattern")
});

/// Parses the quantity expression of an ingredient line.
///
/// A compound container phrase ("2 (14.5 ounce) cans") is merged into one
/// amount of the inner unit. Otherwise the first amount followed by a word is
/// used, but only when that word is a known unit: "2 eggs" yields the default
/// `1 COUNT`, not `2 COUNT`.
pub fn parse_quantity(line: &str) -> ParsedQuantity {
    if let Some(caps) = COMPOUND_CONTAINER.captures(line) {
        let count = parse_number(&caps["count"]).filter(|n| *n != 0.0);
        let inner = parse_number(&caps["inner"]).filter(|n| *n != 0.0);

        return match (count, inner) {
            (Some(count), Some(inner)) => {
                let unit_text = caps["unit"].trim();
                let unit = lookup_unit(unit_text)
                    .or_else(|| lookup_unit(unit_text.trim_end_matches('.')))
                    .unwrap_or(UnitCode::Count);
                debug!(
                    "Compound container: {} x {} {} ({})",
                    count, inner, unit, &caps["outer"]
                );
                ParsedQuantity {
                    amount: count * inner,
                    unit,
                }
            }
            _ => ParsedQuantity::default(),
        };
    }

    let Some(caps) = SIMPLE_QUANTITY.captures(line) else {
        return ParsedQuantity::default();
    };

    match match_unit_prefix(&caps["rest"]) {
        Some((unit, _)) => match parse_number(&caps["amount"]).filter(|n| *n > 0.0) {
            Some(amount) => ParsedQuantity { amount, unit },
            None => {
                debug!("Ignoring zero amount '{}'", &caps["amount"]);
                ParsedQuantity::default()
            }
        },
        None => {
            debug!(
                "Ignoring amount '{}': no known unit in '{}'",
                &caps["amount"], &caps["rest"]
            );
            ParsedQuantity::default()
        }
    }
}

/// Normalizes one raw ingredient line into an item name and a quantity.
///
/// Never fails: unparseable quantities default to `1 COUNT` and a name that
/// cleans down to nothing falls back to the line itself.
pub fn normalize(line: &str) -> NormalizedIngredient {
    let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
    let quantity = parse_quantity(&collapsed);

    let mut name = clean_ingredient_name(&collapsed);
    if name.is_empty() {
        name = if collapsed.is_empty() {
            line.to_string()
        } else {
            line.trim().to_string()
        };
    }

    NormalizedIngredient { name, quantity }
}

/// Normalizes a batch of lines. Output order matches input order.
pub fn normalize_all<I, S>(lines: I) -> Vec<NormalizedIngredient>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| normalize(line.as_ref()))
        .collect()
}
