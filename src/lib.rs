mod capacity_scraper;
mod config;
mod dates;
mod error;
mod requests;
mod route_scraper;
mod sailing;
mod schedule_scraper;
mod scraping_context;
mod terminals;
mod text_manipulators;

pub use capacity_scraper::scrape_capacity_route;
pub use config::ScrapingConfig;
pub use dates::vancouver_now;
pub use error::ScrapeError;
pub use route_scraper::DocumentSource;
pub use sailing::{Route, Sailing, Schedule, TerminalCode};
pub use schedule_scraper::scrape_non_capacity_route;
pub use scraping_context::ScrapingContext;
pub use terminals::Terminals;
pub use text_manipulators::{contains_sailing_data, find_time};
