use scraper::{Html, Selector};
use url::Url;

use crate::utilities::resolve_url::resolve_candidate;

const IMG_MIN_DIMENSION: u32 = 120;

/// Picks the most likely product picture among all `<img>` tags.
///
/// Both `width` and `height` of at least 120 score 2, a non-empty `alt` scores 1.
/// Ties go to the image that comes first in the document.
pub fn extract_scored_image(document: &Html, base: &Url) -> Option<String> {
    let selector = Selector::parse("img").ok()?;
    let mut best: Option<(u8, String)> = None;

    for element in document.select(&selector) {
        let img = element.value();
        let Some(src) = resolve_candidate(base, img.attr("src")) else {
            continue;
        };

        let large = [img.attr("width"), img.attr("height")]
            .into_iter()
            .all(|value| value.and_then(leading_int).is_some_and(|n| n >= IMG_MIN_DIMENSION));
        let has_alt = img.attr("alt").is_some_and(|alt| !alt.is_empty());
        let score = u8::from(has_alt) + if large { 2 } else { 0 };

        if best.as_ref().map_or(true, |(top, _)| score > *top) {
            best = Some((score, src));
        }
    }

    best.map(|(_, src)| src)
}

// "300px" counts as 300, like browsers read legacy dimension attributes.
fn leading_int(value: &str) -> Option<u32> {
    let value = value.trim_start();
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    value[..end].parse().ok()
}
