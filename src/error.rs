use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop a scrape. Nothing is returned for the routes that
/// were already processed.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("could not read local sample {}: {source}", path.display())]
    Fixture {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
