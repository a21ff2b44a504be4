use scraper::{Html, Selector};
use url::Url;

use crate::utilities::resolve_url::resolve_candidate;

const META_SELECTORS: [&str; 4] = [
    r#"meta[property="og:image"]"#,
    r#"meta[name="og:image"]"#,
    r#"meta[name="twitter:image"]"#,
    r#"meta[property="twitter:image"]"#,
];

/// Looks for an Open Graph or Twitter card image, in that order.
pub fn extract_meta_image(document: &Html, base: &Url) -> Option<String> {
    META_SELECTORS.iter().find_map(|selector| {
        let selector = Selector::parse(selector).ok()?;
        let content = document
            .select(&selector)
            .next()
            .and_then(|element| element.value().attr("content"));
        resolve_candidate(base, content)
    })
}
