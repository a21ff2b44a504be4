use anyhow::anyhow;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, warn};
use url::Url;

use crate::config::ScraperSettings;
use crate::error::ImageError;
use crate::extractors::goods::extract_image_url::extract_image_url;
use crate::extractors::goods::extract_meta_image::extract_meta_image;
use crate::extractors::goods::extract_scored_image::extract_scored_image;
use crate::utilities::fetch_page::fetch_page;
use crate::utilities::resolve_url::resolve_url;

/// Where to look for the product image in a fetched page.
pub struct ImageLocator {
    selector: Selector,
    fallback: bool,
}

impl ImageLocator {
    pub fn from_settings(settings: &ScraperSettings) -> anyhow::Result<Self> {
        let selector = Selector::parse(&settings.selector)
            .map_err(|e| anyhow!("Invalid image selector {:?}: {:?}", settings.selector, e))?;

        Ok(Self {
            selector,
            fallback: settings.fallback,
        })
    }

    pub fn with_fallback(mut self, fallback: bool) -> Self {
        self.fallback = fallback;
        self
    }
}

/// Fetches `page_url` and returns the absolute URL of its main product image.
///
/// One GET request is sent, nothing is retried. A page where the selector finds
/// no usable `src` (and no fallback matched) gives [`ImageError::NotFound`].
pub async fn fetch_product_image_url(
    client: &Client,
    locator: &ImageLocator,
    page_url: &str,
) -> Result<String, ImageError> {
    let body = fetch_page(client, page_url).await?;
    let document = Html::parse_document(&body);

    if let Some(src) = extract_image_url(&document, &locator.selector) {
        debug!(%src, "Image found with selector");
        return Ok(resolve_url(page_url, &src)?);
    }

    if locator.fallback {
        let base = Url::parse(page_url)?;
        let found = extract_meta_image(&document, &base)
            .or_else(|| extract_scored_image(&document, &base));

        if let Some(image_url) = found {
            debug!(%image_url, "Image found with fallback heuristics");
            return Ok(image_url);
        }
    }

    Err(ImageError::NotFound)
}

/// Renders a lookup result as the single line the CLI prints.
pub fn render_line(page_url: &str, result: Result<String, ImageError>) -> String {
    match result {
        Ok(image_url) => image_url,
        Err(e) => {
            warn!(kind = ?e.kind(), page_url, "{}", e);
            e.to_string()
        }
    }
}

/// String-only form of [`fetch_product_image_url`]: never fails, errors come back
/// as their message.
pub async fn get_product_image_url(client: &Client, locator: &ImageLocator, page_url: &str) -> String {
    let result = fetch_product_image_url(client, locator, page_url).await;
    render_line(page_url, result)
}
