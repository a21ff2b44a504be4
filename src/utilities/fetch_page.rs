use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::debug;

use crate::error::ImageError;

// How far into the body a <meta charset> declaration is looked for.
const META_PRESCAN_BYTES: usize = 4096;

/// Sends one GET request to `page_url` and returns the body as text.
///
/// Any non-success status is turned into [`ImageError::Status`]. There is no retry.
/// The body is decoded with the Content-Type charset, else a `<meta>` charset,
/// else UTF-8.
pub async fn fetch_page(client: &Client, page_url: &str) -> Result<String, ImageError> {
    let response = client.get(page_url).send().await?.error_for_status()?;

    debug!(status = %response.status(), url = %response.url(), "Page fetched");

    let header_charset = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(extract_charset);

    let bytes = response.bytes().await?;
    Ok(decode_body(&bytes, header_charset.as_deref()))
}

fn decode_body(bytes: &[u8], header_charset: Option<&str>) -> String {
    let encoding = header_charset
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .or_else(|| sniff_meta_charset(bytes).and_then(|label| Encoding::for_label(label.as_bytes())))
        .unwrap_or(UTF_8);

    // A byte order mark still wins over the chosen encoding.
    let (text, used, _) = encoding.decode(bytes);
    debug!(encoding = used.name(), "Body decoded");
    text.into_owned()
}

/// Finds `<meta charset=...>` or `<meta http-equiv ... content="...; charset=...">`
/// near the top of the document.
fn sniff_meta_charset(bytes: &[u8]) -> Option<String> {
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(META_PRESCAN_BYTES)]);
    let re = Regex::new(r#"(?i)<meta[^>]*?charset\s*=\s*["']?\s*([A-Za-z0-9_.:\-]+)"#).ok()?;
    re.captures(&head)
        .and_then(|caps| caps.get(1).map(|m| m.as_str().to_string()))
}

fn extract_charset(content_type: &str) -> Option<String> {
    let re = Regex::new(r#"(?i)charset\s*=\s*["']?([^"';\s]+)"#).ok()?;
    re.captures(content_type)
        .and_then(|caps| caps.get(1).map(|m| m.as_str().to_string()))
}
