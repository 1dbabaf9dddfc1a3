use regex::Regex;
use std::sync::LazyLock;

/// Unicode vulgar fraction glyphs and their values.
pub const UNICODE_FRACTIONS: &[(char, f64)] = &[
    ('¼', 0.25),
    ('½', 0.5),
    ('¾', 0.75),
    ('⅐', 1.0 / 7.0),
    ('⅑', 1.0 / 9.0),
    ('⅒', 0.1),
    ('⅓', 1.0 / 3.0),
    ('⅔', 2.0 / 3.0),
    ('⅕', 0.2),
    ('⅖', 0.4),
    ('⅗', 0.6),
    ('⅘', 0.8),
    ('⅙', 1.0 / 6.0),
    ('⅚', 5.0 / 6.0),
    ('⅛', 0.125),
    ('⅜', 0.375),
    ('⅝', 0.625),
    ('⅞', 0.875),
];

/// Character class body matching any glyph in [`UNICODE_FRACTIONS`].
pub(crate) const FRACTION_GLYPHS: &str = "¼½¾⅐⅑⅒⅓⅔⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞";

static MIXED_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s+(\d+)/(\d+)").expect("valid mixed number pattern"));

static FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)/(\d+)").expect("valid fraction pattern"));

static LEADING_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d+(?:\.\d+)?|\.\d+)").expect("valid decimal pattern"));

/// Parses a quantity: a unicode fraction glyph (optionally preceded by a
/// whole number, "1¼" or "1 ¼"), a mixed number "1 1/2" or a fraction "1/2"
/// anywhere in the text, or else a decimal at its start ("1.5kg").
///
/// `None` means no quantity was found. It is not the same as zero.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();

    for &(glyph, value) in UNICODE_FRACTIONS {
        if let Some((before, _)) = text.split_once(glyph) {
            let before = before.trim();
            if before.is_empty() {
                return Some(value);
            }
            return Some(match parse_decimal(before) {
                Some(whole) => whole + value,
                None => value,
            });
        }
    }

    if let Some(caps) = MIXED_NUMBER.captures(text) {
        let whole: f64 = caps[1].parse().ok()?;
        return ratio(&caps[2], &caps[3]).map(|fraction| whole + fraction);
    }

    if let Some(caps) = FRACTION.captures(text) {
        return ratio(&caps[1], &caps[2]);
    }

    parse_decimal(text)
}

fn ratio(numerator: &str, denominator: &str) -> Option<f64> {
    let numerator: f64 = numerator.parse().ok()?;
    let denominator: f64 = denominator.parse().ok()?;
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}

fn parse_decimal(text: &str) -> Option<f64> {
    LEADING_DECIMAL
        .find(text)?
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_numbers() {
        assert_eq!(parse_number("1 1/2"), Some(1.5));
        assert_eq!(parse_number("2 3/4"), Some(2.75));
        assert_eq!(parse_number("10 1/8"), Some(10.125));
    }

    #[test]
    fn test_unicode_glyphs() {
        assert_eq!(parse_number("¾"), Some(0.75));
        assert_eq!(parse_number("½"), Some(0.5));
        assert_eq!(parse_number("⅓"), Some(1.0 / 3.0));
        assert_eq!(parse_number("1¼"), Some(1.25));
        assert_eq!(parse_number("2 ½"), Some(2.5));
        for &(glyph, value) in UNICODE_FRACTIONS {
            assert_eq!(parse_number(&glyph.to_string()), Some(value));
        }
    }

    #[test]
    fn test_unparseable_prefix_keeps_glyph_value() {
        assert_eq!(parse_number("about ½"), Some(0.5));
    }

    #[test]
    fn test_plain_fractions_and_decimals() {
        assert_eq!(parse_number("1/2"), Some(0.5));
        assert_eq!(parse_number("3/4"), Some(0.75));
        assert_eq!(parse_number("14.5"), Some(14.5));
        assert_eq!(parse_number(" 2 "), Some(2.0));
        assert_eq!(parse_number(".5"), Some(0.5));
    }

    #[test]
    fn test_numbers_inside_longer_text() {
        assert_eq!(parse_number("2 cups"), Some(2.0));
        assert_eq!(parse_number("1.5kg"), Some(1.5));
        assert_eq!(parse_number("about 1/2"), Some(0.5));
        assert_eq!(parse_number("roughly 1 1/2 cups"), Some(1.5));
        assert_eq!(parse_number("about 2"), None);
    }

    #[test]
    fn test_nothing_to_parse() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("salt"), None);
        assert_eq!(parse_number("1/0"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("-2"), None);
    }
}
