use chrono::DateTime;
use chrono_tz::Tz;
use log::{debug, info};
use scraper::Html;

use crate::{
    capacity_scraper::scrape_capacity_route,
    dates::vancouver_now,
    error::ScrapeError,
    sailing::{Route, Schedule},
    schedule_scraper::scrape_non_capacity_route,
    scraping_context::ScrapingContext,
};

/// Where route pages come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSource {
    Network,
    /// Every route is read from the same local sample page.
    LocalSample,
}

impl DocumentSource {
    pub fn from_local_mode(local_mode: bool) -> Self {
        if local_mode {
            DocumentSource::LocalSample
        } else {
            DocumentSource::Network
        }
    }
}

impl ScrapingContext {
    /// Scrapes every configured route, one at a time. The first fetch failure
    /// aborts the whole run.
    pub async fn scrape_routes(&self, local_mode: bool) -> Result<Schedule, ScrapeError> {
        self.scrape_routes_with(DocumentSource::from_local_mode(local_mode), vancouver_now)
            .await
    }

    /// Like [`Self::scrape_routes`] but dates every route against `now`.
    pub async fn scrape_routes_at(
        &self,
        local_mode: bool,
        now: DateTime<Tz>,
    ) -> Result<Schedule, ScrapeError> {
        self.scrape_routes_with(DocumentSource::from_local_mode(local_mode), || now)
            .await
    }

    async fn scrape_routes_with(
        &self,
        source: DocumentSource,
        now: impl Fn() -> DateTime<Tz>,
    ) -> Result<Schedule, ScrapeError> {
        let mut schedule = Schedule::new();

        for (departure, destinations) in &self.terminals.routes {
            let routes = schedule.entry(departure.clone()).or_default();
            for destination in destinations {
                let route = self
                    .scrape_route(source, departure, destination, &now())
                    .await?;
                info!(
                    "Scraped {} sailings for {departure} -> {destination}",
                    route.sailings.len()
                );
                routes.insert(destination.clone(), route);
            }
        }

        Ok(schedule)
    }

    pub async fn scrape_route(
        &self,
        source: DocumentSource,
        departure: &str,
        destination: &str,
        now: &DateTime<Tz>,
    ) -> Result<Route, ScrapeError> {
        let non_capacity = self.terminals.is_non_capacity(departure);
        let document = self
            .fetch_document(source, departure, destination, non_capacity)
            .await?;

        let route = if non_capacity {
            scrape_non_capacity_route(&document, now)
        } else {
            scrape_capacity_route(&document, now)
        };
        Ok(route)
    }

    async fn fetch_document(
        &self,
        source: DocumentSource,
        departure: &str,
        destination: &str,
        non_capacity: bool,
    ) -> Result<Html, ScrapeError> {
        let html = match source {
            DocumentSource::LocalSample => {
                let path = &self.scraping_config.sample_site_path;
                debug!("Reading local sample {}", path.display());
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| ScrapeError::Fixture {
                        path: path.clone(),
                        source,
                    })?
            }
            DocumentSource::Network => {
                let url = if non_capacity {
                    self.scraping_config
                        .daily_schedule_url(departure, destination)
                } else {
                    self.scraping_config
                        .current_conditions_url(departure, destination)
                };
                debug!("Fetching {url}");
                self.request_client.fetch_url_body(&url).await?
            }
        };

        Ok(Html::parse_document(&html))
    }
}
