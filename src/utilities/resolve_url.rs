use url::Url;

/// Makes an image `src` absolute.
///
/// Values starting with `http` are returned untouched, anything else is joined
/// onto `page_url` as a relative reference.
pub fn resolve_url(page_url: &str, src: &str) -> Result<String, url::ParseError> {
    if src.starts_with("http") {
        return Ok(src.to_string());
    }

    let base = Url::parse(page_url)?;
    Ok(base.join(src)?.to_string())
}

/// Resolves an attribute value found by a fallback heuristic. Blank or unjoinable
/// values give `None`.
pub fn resolve_candidate(base: &Url, value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        return None;
    }

    base.join(trimmed).ok().map(|url| url.to_string())
}
