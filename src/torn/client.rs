use crate::error::StatusError;
use crate::torn::models::{TravelRecord, TravelResponse};
use anyhow::{Context, Result};
use log::debug;
use reqwest::blocking::Client;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.torn.com";

pub struct TornClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TornClient {
    pub fn new(api_key: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.trim().to_string(),
        })
    }

    /// Helper for testing to override base URL (e.g. wiremock)
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Fetch the `travel` selection for the key's owner.
    ///
    /// An API error payload wins over the HTTP status; anything else that
    /// fails to produce a travel record is reported as a connectivity error.
    pub fn fetch_travel(&self) -> Result<TravelRecord, StatusError> {
        if self.api_key.is_empty() {
            return Err(StatusError::MissingApiKey);
        }

        let url = format!("{}/user/", self.base_url);
        debug!("GET {}?selections=travel&key=<redacted>", url);

        let response = self
            .client
            .get(&url)
            .query(&[("selections", "travel"), ("key", self.api_key.as_str())])
            .send()
            .map_err(|e| connectivity(format!("request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| connectivity(format!("failed to read body: {}", e)))?;

        let parsed: TravelResponse = serde_json::from_str(&body).map_err(|e| {
            if status.is_success() {
                connectivity(format!("invalid response body: {}", e))
            } else {
                connectivity(format!("status {}", status))
            }
        })?;

        if let Some(error) = parsed.error {
            debug!("Torn API error {}: {}", error.code, error.error);
            return Err(StatusError::Api {
                code: error.code,
                message: error.error,
            });
        }

        if !status.is_success() {
            return Err(connectivity(format!("status {}", status)));
        }

        parsed
            .travel
            .ok_or_else(|| connectivity("response missing 'travel' object"))
    }
}

fn connectivity(reason: impl Into<String>) -> StatusError {
    let reason = reason.into();
    debug!("Torn API request failed: {}", reason);
    StatusError::connectivity(reason)
}
