use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const DEFAULT_SELECTOR: &str = "#goods-img-basis img";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub scraper: ScraperSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScraperSettings {
    pub user_agent: String,
    pub selector: String,
    /// Total request timeout. Unset means the request may block indefinitely.
    pub timeout_secs: Option<u64>,
    /// Try og:image / twitter:image and scored <img> tags when the selector misses.
    pub fallback: bool,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            selector: DEFAULT_SELECTOR.to_string(),
            timeout_secs: None,
            fallback: false,
        }
    }
}

/// Loads settings from `file_path` (optional) and then `APP_` environment variables,
/// e.g. `APP_SCRAPER__USER_AGENT`.
pub fn load_config(file_path: &str) -> Result<AppConfig, ConfigError> {
    load_config_with(file_path, app_environment())
}

fn app_environment() -> Environment {
    Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn load_config_with(file_path: &str, environment: Environment) -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        .set_default("scraper.user_agent", DEFAULT_USER_AGENT)?
        .set_default("scraper.selector", DEFAULT_SELECTOR)?
        .set_default("scraper.fallback", false)?
        .add_source(File::new(file_path, FileFormat::Toml).required(false))
        .add_source(environment)
        .build()?;

    settings.try_deserialize::<AppConfig>()
}
