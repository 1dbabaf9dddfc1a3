use scraper::{ElementRef, Html, Selector};

/// The slice of DOM access the extractors need. Implemented for
/// `scraper::Html`; tests may supply their own.
pub trait MarkupQuery {
    /// Raw contents of every `<script type="application/ld+json">` block, in
    /// document order.
    fn json_ld_blocks(&self) -> Vec<String>;

    /// Text of the first `<title>` element, if any.
    fn title_text(&self) -> Option<String>;

    /// For every element named in `tags` whose class or id contains `needle`
    /// (case-insensitive), the whitespace-normalized text of each non-empty
    /// `<li>` descendant. Elements and items both come in document order.
    fn query_list_items_by_tag_and_class_substring(
        &self,
        tags: &[&str],
        needle: &str,
    ) -> Vec<Vec<String>>;
}

impl MarkupQuery for Html {
    fn json_ld_blocks(&self) -> Vec<String> {
        let selector = Selector::parse("script[type]").expect("script selector is valid");
        self.select(&selector)
            .filter(|script| {
                script
                    .value()
                    .attr("type")
                    .is_some_and(|kind| kind.trim().eq_ignore_ascii_case("application/ld+json"))
            })
            .map(|script| script.text().collect::<String>())
            .collect()
    }

    fn title_text(&self) -> Option<String> {
        let selector = Selector::parse("title").expect("title selector is valid");
        self.select(&selector)
            .next()
            .map(|title| title.text().collect::<String>())
    }

    fn query_list_items_by_tag_and_class_substring(
        &self,
        tags: &[&str],
        needle: &str,
    ) -> Vec<Vec<String>> {
        let Ok(selector) = Selector::parse(&tags.join(", ")) else {
            return Vec::new();
        };
        let Ok(li_selector) = Selector::parse("li") else {
            return Vec::new();
        };
        let needle = needle.to_lowercase();

        self.select(&selector)
            .filter(|element| {
                attr_contains(element, "class", &needle) || attr_contains(element, "id", &needle)
            })
            .map(|element| {
                element
                    .select(&li_selector)
                    .map(|li| normalize_whitespace(&li.text().collect::<String>()))
                    .filter(|text| !text.is_empty())
                    .collect()
            })
            .collect()
    }
}

fn attr_contains(element: &ElementRef, attr: &str, needle: &str) -> bool {
    element
        .value()
        .attr(attr)
        .is_some_and(|value| value.to_lowercase().contains(needle))
}

/// Collapses whitespace runs to single spaces and trims the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
