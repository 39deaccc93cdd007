use log::warn;
use reqwest::{Client, ClientBuilder, Response};

use crate::{config::ScrapingConfig, error::ScrapeError};

pub struct RequestClient {
    client: Client,
}

impl RequestClient {
    pub fn new(config: &ScrapingConfig) -> Result<Self, ScrapeError> {
        // bcferries.com rejects requests without a browser-like agent.
        let mut builder = ClientBuilder::new().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ScrapeError::Client)?;
        Ok(Self { client })
    }

    pub async fn fetch_url_response(&self, url: &str) -> Result<Response, ScrapeError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ScrapeError::Request {
                url: url.to_string(),
                source,
            })?;

        // Error pages are still parsed; they just produce an empty route.
        let status = response.status();
        if !status.is_success() {
            warn!("{url} returned {status}");
        }
        Ok(response)
    }

    pub async fn fetch_url_body(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self.fetch_url_response(url).await?;
        response.text().await.map_err(|source| ScrapeError::Request {
            url: url.to_string(),
            source,
        })
    }
}
