use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;

pub struct CatalogClient {
    client: Client,
}

impl CatalogClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent("remodel-planner")
            .connect_timeout(Duration::from_secs(10))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }

    /// Fetch the catalog text from a URL. Invalid UTF-8 is replaced, not rejected.
    pub fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to fetch catalog from {}", url))?
            .error_for_status()
            .with_context(|| format!("Catalog request to {} failed", url))?;

        let bytes = response.bytes().context("Failed to read catalog response")?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
