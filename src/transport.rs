use crate::error::Error;
use log::debug;
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;

/// Base URL for the authenticated eBird API endpoints.
pub const API_BASE: &str = "https://api.ebird.org/v2";

/// Base URL for the public species reference pages.
pub const SPECIES_PAGE_BASE: &str = "https://ebird.org/species";

/// Minimal HTTP seam the planner talks through: one JSON GET with query
/// parameters, one raw page GET. Implementations raise `Error::Transport`
/// for network failures and unparsable payloads.
pub trait Transport {
    fn get_json(&self, url: &str, params: &[(&str, String)]) -> Result<Value, Error>;

    fn get_page(&self, url: &str) -> Result<String, Error>;
}

/// Blocking HTTP transport for the live eBird API. Every JSON request
/// carries the session token in the `X-eBirdApiToken` header; species pages
/// are fetched unauthenticated.
pub struct EbirdTransport {
    client: Client,
    token: String,
}

impl EbirdTransport {
    pub fn new(token: &str) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| Error::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            token: token.to_string(),
        })
    }
}

impl Transport for EbirdTransport {
    fn get_json(&self, url: &str, params: &[(&str, String)]) -> Result<Value, Error> {
        debug!("GET {} params {:?}", url, params);
        let response = self
            .client
            .get(url)
            .header("X-eBirdApiToken", &self.token)
            .query(params)
            .send()?;

        Ok(response.json()?)
    }

    fn get_page(&self, url: &str) -> Result<String, Error> {
        debug!("GET {}", url);
        Ok(self.client.get(url).send()?.text()?)
    }
}
