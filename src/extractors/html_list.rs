use super::markup::MarkupQuery;
use super::Extractor;
use log::debug;

const NEEDLE: &str = "ingredient";

/// Element groups searched for ingredient containers, in priority order.
const PASSES: &[&[&str]] = &[&["ul", "ol"], &["div"]];

/// Fallback for pages without structured data: takes the `<li>` items of the
/// first list (then the first `<div>`) whose class or id mentions
/// "ingredient".
pub struct HtmlListExtractor;

impl Extractor for HtmlListExtractor {
    fn name(&self) -> &'static str {
        "html_lists"
    }

    fn ingredients(&self, query: &dyn MarkupQuery) -> Vec<String> {
        for tags in PASSES {
            let containers = query.query_list_items_by_tag_and_class_substring(tags, NEEDLE);
            debug!(
                "HtmlListExtractor: {} candidate <{}> containers",
                containers.len(),
                tags.join(">/<")
            );

            if let Some(items) = containers.into_iter().find(|items| !items.is_empty()) {
                debug!("HtmlListExtractor: Found {} ingredients", items.len());
                return items;
            }
        }

        debug!("HtmlListExtractor: No ingredient list found");
        Vec::new()
    }
}
