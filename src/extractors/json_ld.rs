use super::markup::MarkupQuery;
use super::Extractor;
use html_escape::decode_html_entities;
use log::debug;
use serde::Deserialize;
use serde_json::Value;

/// Reads recipe data from schema.org JSON-LD blocks.
pub struct JsonLdExtractor;

impl JsonLdExtractor {
    /// Parses every JSON-LD block, skipping the ones that cannot be read even
    /// after repair.
    fn parse_blocks(&self, query: &dyn MarkupQuery) -> Vec<Value> {
        let blocks = query.json_ld_blocks();
        debug!("JsonLdExtractor: Found {} JSON-LD script tags", blocks.len());

        blocks
            .iter()
            .enumerate()
            .filter_map(|(index, raw)| match parse_block(raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    debug!("JsonLdExtractor: Skipping JSON-LD block {}: {}", index, e);
                    None
                }
            })
            .collect()
    }

    /// Name of the first Recipe node that has one.
    pub fn title(&self, query: &dyn MarkupQuery) -> Option<String> {
        self.parse_blocks(query).iter().find_map(|block| {
            recipe_nodes(block).into_iter().find_map(|node| {
                let name = decode_html_symbols(node.get("name")?.as_str()?);
                let name = name.trim();
                (!name.is_empty()).then(|| name.to_string())
            })
        })
    }
}

impl Extractor for JsonLdExtractor {
    fn name(&self) -> &'static str {
        "json_ld"
    }

    fn ingredients(&self, query: &dyn MarkupQuery) -> Vec<String> {
        for (index, block) in self.parse_blocks(query).iter().enumerate() {
            for node in recipe_nodes(block) {
                let Some(raw) = node.get("recipeIngredient") else {
                    debug!("JsonLdExtractor: Recipe node in block {} has no recipeIngredient", index);
                    continue;
                };

                match RecipeIngredients::deserialize(raw) {
                    Ok(ingredients) => {
                        let lines = ingredients.into_lines();
                        if !lines.is_empty() {
                            debug!(
                                "JsonLdExtractor: Found {} ingredients in block {}",
                                lines.len(),
                                index
                            );
                            return lines;
                        }
                    }
                    Err(e) => {
                        debug!("JsonLdExtractor: Unreadable recipeIngredient: {}", e);
                    }
                }
            }
        }

        debug!("JsonLdExtractor: No recipe ingredients in any JSON-LD block");
        Vec::new()
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecipeIngredients {
    Strings(Vec<String>),
    Objects(Vec<IngredientObject>),
    Single(String),
}

#[derive(Debug, Deserialize)]
struct IngredientObject {
    name: String,
    amount: Option<String>,
}

impl RecipeIngredients {
    fn into_lines(self) -> Vec<String> {
        let lines: Vec<String> = match self {
            RecipeIngredients::Strings(lines) => lines,
            RecipeIngredients::Single(line) => vec![line],
            RecipeIngredients::Objects(objects) => objects
                .into_iter()
                .map(|ingredient| {
                    let amount = ingredient.amount.as_deref().unwrap_or("").trim();
                    if amount.is_empty() {
                        ingredient.name
                    } else {
                        format!("{amount} {}", ingredient.name)
                    }
                })
                .collect(),
        };

        lines
            .iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| decode_html_symbols(line).trim().to_string())
            .collect()
    }
}

fn parse_block(raw: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str::<Value>(raw).or_else(|e| {
        debug!("JsonLdExtractor: Retrying block after repair: {}", e);
        serde_json::from_str::<Value>(&repair_json(raw))
    })
}

/// Recipe nodes of a block in document order: the block itself, members of a
/// top-level array, and members of `@graph`.
fn recipe_nodes(block: &Value) -> Vec<&Value> {
    let mut nodes = Vec::new();
    match block {
        Value::Array(items) => {
            for item in items {
                nodes.extend(recipe_nodes(item));
            }
        }
        Value::Object(_) => {
            if is_recipe_type(block) {
                nodes.push(block);
            }
            if let Some(Value::Array(graph)) = block.get("@graph") {
                nodes.extend(graph.iter().filter(|node| is_recipe_type(node)));
            }
        }
        _ => {}
    }
    nodes
}

fn is_recipe_type(value: &Value) -> bool {
    match value.get("@type") {
        Some(Value::String(kind)) => kind.eq_ignore_ascii_case("recipe"),
        Some(Value::Array(kinds)) => kinds
            .iter()
            .filter_map(Value::as_str)
            .any(|kind| kind.eq_ignore_ascii_case("recipe")),
        _ => false,
    }
}

fn decode_html_symbols(text: &str) -> String {
    // pages frequently double-encode, e.g. "&amp;frac12;"
    decode_html_entities(&decode_html_entities(text)).into_owned()
}

/// Fixes the JSON mistakes recipe plugins commonly emit: missing commas
/// between values, trailing commas, raw line breaks inside strings and
/// leftover HTML comment markers.
fn repair_json(raw: &str) -> String {
    let raw = raw.replace("<!--", "").replace("-->", "");
    let mut repaired = String::with_capacity(raw.len());
    let mut in_string = false;
    let mut escaped = false;

    for c in raw.chars() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            repaired.push(if matches!(c, '\n' | '\r' | '\t') { ' ' } else { c });
            continue;
        }

        match c {
            c if c.is_whitespace() => {}
            '}' | ']' => {
                if repaired.ends_with(',') {
                    repaired.pop();
                }
                repaired.push(c);
            }
            '"' | '{' | '[' => {
                if repaired.ends_with(['"', '}', ']']) {
                    repaired.push(',');
                }
                in_string = c == '"';
                repaired.push(c);
            }
            ',' => {
                if !repaired.ends_with(',') {
                    repaired.push(c);
                }
            }
            _ => repaired.push(c),
        }
    }

    repaired
}
