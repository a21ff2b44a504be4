use scraper::{Html, Selector};

/// Returns the raw `src` of the first element matched by `selector`
/// (`#goods-img-basis img` unless configured otherwise).
///
/// Only the first match is looked at: if it has no `src`, or an empty one,
/// the image is considered missing.
pub fn extract_image_url(document: &Html, selector: &Selector) -> Option<String> {
    let element = document.select(selector).next()?;

    element
        .value()
        .attr("src")
        .filter(|src| !src.is_empty())
        .map(str::to_string)
}
