use super::number::FRACTION_GLYPHS;
use super::units::spellings_longest_first;
use regex::Regex;
use std::sync::LazyLock;

/// Preparation adjectives stripped from the front of an ingredient name.
pub const PREPARATION_WORDS: &[&str] = &[
    "chopped",
    "minced",
    "sliced",
    "diced",
    "crushed",
    "ground",
    "grated",
    "shredded",
    "cubed",
    "peeled",
    "cored",
    "seeded",
    "julienned",
    "halved",
    "quartered",
    "beaten",
    "sifted",
    "melted",
    "softened",
    "finely",
    "coarsely",
    "roughly",
];

const MAX_PREPARATION_WORDS: usize = 3;

struct NamePatterns {
    can_word: Regex,
    can_compound: Regex,
    can_leading_count: Regex,
    can_token: Regex,
    canned_twice: Regex,
    compound: Regex,
    leading_number: Regex,
    leading_unit: Regex,
    preparation: Regex,
    trailing: Vec<Regex>,
}

impl NamePatterns {
    fn new() -> Self {
        let g = FRACTION_GLYPHS;
        let count = format!(r"(?:\d+(?:\s+\d+/\d+)?|[{g}])");

        let units = spellings_longest_first()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|");
        let preparation = PREPARATION_WORDS.join("|");

        let trailing = [
            r"(?i),\s*divided.*$",
            r"(?i)(?:,\s*|\s+)or to taste.*$",
            r"(?i),\s*plus more.*$",
            r"(?i)(?:,\s*|\s+)to taste.*$",
            r"(?i),\s*optional.*$",
            r"(?i),\s*(?:drained|undrained|rinsed).*$",
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("valid trailing clause pattern"))
        .collect();

        NamePatterns {
            can_word: compile(r"(?i)\b(?:can|cans|canned)\b"),
            can_compound: compile(&format!(r"(?i){count}\s*\(.*?\)\s*cans?\s+")),
            can_leading_count: compile(r"(?i)^\d+\s+cans?\s+"),
            can_token: compile(r"(?i)\bcans?\b"),
            canned_twice: compile(r"(?i)\bcanned\s+canned\b"),
            compound: compile(&format!(r"{count}\s*\(.*?\)\s*[a-zA-Z]+\s*")),
            leading_number: compile(&format!(
                r"^(?:\d+\s+\d+/\d+|\d+\s*[{g}]|\d+/\d+|\d+\.\d+|\d+\s*-\s*\d+|[{g}]|\d+)\s*"
            )),
            leading_unit: compile(&format!(r"(?i)^(?:{units})\.?s?\s+(?:of\s+)?")),
            preparation: compile(&format!(r"(?i)^(?:{preparation})\s+")),
            trailing,
        }
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid name cleaning pattern")
}

static PATTERNS: LazyLock<NamePatterns> = LazyLock::new(NamePatterns::new);

/// Strips quantity, unit, container and preparation wording from an
/// ingredient line, leaving the item name.
///
/// Lines mentioning cans keep that fact as a single leading "canned":
/// `"2 (14.5 oz) cans diced tomatoes"` becomes `"canned diced tomatoes"`.
/// May return an empty string; callers decide on a fallback.
pub fn clean_ingredient_name(text: &str) -> String {
    let p = &*PATTERNS;
    let mut text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        return text;
    }

    let has_can_container = p.can_word.is_match(&text);

    if has_can_container {
        text = replace_all(&p.can_compound, &text, "canned ");
        text = replace_all(&p.can_leading_count, &text, "canned ");
        text = replace_all(&p.can_token, &text, "canned");
        while p.canned_twice.is_match(&text) {
            text = replace_all(&p.canned_twice, &text, "canned");
        }
    } else {
        text = p.compound.replacen(&text, 1, "").trim().to_string();
    }

    text = strip_leading_number(&p.leading_number, &text);
    text = replace_all(&p.leading_unit, &text, "");

    if !has_can_container {
        for _ in 0..MAX_PREPARATION_WORDS {
            text = replace_all(&p.preparation, &text, "");
        }
    }

    for pattern in &p.trailing {
        text = replace_all(pattern, &text, "");
    }

    text
}

/// Removes a leading amount only when it stands alone: followed by a space,
/// a letter, a fraction glyph or the end of the text. "2% milk" keeps its
/// number.
fn strip_leading_number(pattern: &Regex, text: &str) -> String {
    let Some(found) = pattern.find(text) else {
        return text.to_string();
    };
    let rest = &text[found.end()..];
    let stands_alone = found.as_str().ends_with(char::is_whitespace)
        || rest
            .chars()
            .next()
            .map_or(true, |next| next.is_alphabetic() || FRACTION_GLYPHS.contains(next));

    if stands_alone {
        rest.trim().to_string()
    } else {
        text.to_string()
    }
}

fn replace_all(pattern: &Regex, text: &str, replacement: &str) -> String {
    pattern.replace_all(text, replacement).trim().to_string()
}
