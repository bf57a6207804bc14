use thiserror::Error;

/// Error taxonomy for the trip planner. Callers are expected to match on the
/// kind and branch; no variant is ever logged-and-swallowed internally.
#[derive(Error, Debug)]
pub enum Error {
    /// A session field (token, country name, state name) required by the
    /// requested operation was never configured.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The caller passed an invalid parameter combination.
    #[error("invalid parameter: {0}")]
    Validation(String),

    /// A name, code, hotspot, or species was not found in the resolved
    /// candidate list, or a recent-observation query came back empty.
    #[error("lookup failed: {0}")]
    Lookup(String),

    /// The underlying HTTP call failed or returned unparsable content.
    #[error("transport error: {0}")]
    Transport(String),

    /// A scraped page was missing the expected HTML structure.
    #[error("scrape error: {0}")]
    Scrape(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Transport(err.to_string())
    }
}
