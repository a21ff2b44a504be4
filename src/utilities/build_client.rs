use std::time::Duration;

use reqwest::{Client, ClientBuilder};

use crate::config::ScraperSettings;

/// Client builder carrying the desktop browser User-Agent and the optional timeout.
pub fn client_builder(settings: &ScraperSettings) -> ClientBuilder {
    let mut builder = Client::builder().user_agent(settings.user_agent.as_str());

    if let Some(secs) = settings.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder
}

pub fn build_client(settings: &ScraperSettings) -> Result<Client, reqwest::Error> {
    client_builder(settings).build()
}
