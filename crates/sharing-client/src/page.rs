//! Summary extraction from the rendered sharing page.

use scraper::{Html, Selector};

/// Returns the `content` of the first `<meta name="description">` tag, verbatim.
/// None when the tag is missing or the first such tag has no `content` attribute.
pub fn extract_description(html: &str) -> Option<String> {
    let selector = Selector::parse(r#"meta[name="description"]"#).ok()?;
    let document = Html::parse_document(html);
    document
        .select(&selector)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .map(|content| content.to_string())
}
