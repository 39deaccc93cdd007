use crate::{config::ScrapingConfig, error::ScrapeError, requests::RequestClient, terminals::Terminals};

pub struct ScrapingContext {
    pub scraping_config: ScrapingConfig,
    pub terminals: Terminals,
    pub request_client: RequestClient,
}

impl ScrapingContext {
    pub fn new() -> anyhow::Result<Self> {
        let scraping_config = ScrapingConfig::new()?;
        Self::with_config(scraping_config, Terminals::default()).map_err(Into::into)
    }

    pub fn with_config(
        scraping_config: ScrapingConfig,
        terminals: Terminals,
    ) -> Result<Self, ScrapeError> {
        let request_client = RequestClient::new(&scraping_config)?;
        Ok(ScrapingContext {
            scraping_config,
            terminals,
            request_client,
        })
    }
}
