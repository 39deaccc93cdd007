use std::{path::PathBuf, time::Duration};

use anyhow::Context;
use serde::{Deserialize, de::DeserializeOwned};

const DEFAULT_BASE_URL: &str = "https://www.bcferries.com";
const DEFAULT_SAMPLE_SITE_PATH: &str = "./sample/sample-site.html";
const DEFAULT_USER_AGENT: &str = "Mozilla";

/// The env vars that tune scraping. All of them are optional.
#[derive(Debug, Deserialize)]
pub struct ScrapingEnv {
    bcferries_base_url: Option<String>,
    sample_site_path: Option<PathBuf>,
    scraper_user_agent: Option<String>,
    request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct ScrapingConfig {
    pub base_url: String,
    pub sample_site_path: PathBuf,
    pub user_agent: String,
    /// No timeout when unset, so a hanging request stalls the run.
    pub request_timeout: Option<Duration>,
}

impl ScrapingConfig {
    pub fn new() -> anyhow::Result<Self> {
        let scraping_env = ScrapingEnv::load_from_env()?;
        Ok(Self::from(scraping_env))
    }

    pub fn current_conditions_url(&self, departure: &str, destination: &str) -> String {
        format!(
            "{}/current-conditions/{departure}-{destination}",
            self.base_url
        )
    }

    pub fn daily_schedule_url(&self, departure: &str, destination: &str) -> String {
        format!(
            "{}/routes-fares/schedules/daily/{departure}-{destination}",
            self.base_url
        )
    }
}

impl From<ScrapingEnv> for ScrapingConfig {
    fn from(env: ScrapingEnv) -> Self {
        let defaults = Self::default();
        Self {
            base_url: env
                .bcferries_base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            sample_site_path: env.sample_site_path.unwrap_or(defaults.sample_site_path),
            user_agent: env.scraper_user_agent.unwrap_or(defaults.user_agent),
            request_timeout: env.request_timeout_secs.map(Duration::from_secs),
        }
    }
}

impl Default for ScrapingConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            sample_site_path: PathBuf::from(DEFAULT_SAMPLE_SITE_PATH),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: None,
        }
    }
}

// Extension trait.
pub trait LoadFromEnv: DeserializeOwned {
    fn load_from_env() -> anyhow::Result<Self> {
        // Don't throw an error if .env file doesn't exist.
        let _ = dotenv::dotenv();
        let config =
            envy::from_env::<Self>().context("failed to load env variables into config struct")?;
        Ok(config)
    }
}

impl<T: DeserializeOwned> LoadFromEnv for T {}
