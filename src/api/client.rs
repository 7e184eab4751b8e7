//! HTTP-backed chart release API implementation.

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};

use crate::http::HttpClient;

use super::{ChartRelease, ChartReleaseApi};

/// Builds a reqwest Client for the management API.
/// When an API key is given it is sent as a bearer token on every request.
pub fn build_client(api_key: Option<&str>) -> Result<Client> {
    let mut headers = HeaderMap::new();
    if let Some(key) = api_key {
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", key))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        debug!("Using API key for authentication");
    }

    let client = Client::builder()
        .user_agent("tnapps-cli")
        .default_headers(headers)
        .build()?;

    Ok(client)
}

/// Chart release client for a TrueNAS SCALE system.
pub struct ChartReleaseClient {
    http_client: HttpClient,
    base_url: String,
}

impl ChartReleaseClient {
    /// Create a new client for the system at the given base URL.
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            http_client: HttpClient::new(client),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The base URL of the system this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ChartReleaseApi for ChartReleaseClient {
    async fn chart_releases(&self) -> Result<Vec<ChartRelease>> {
        let url = format!("{}/api/v2.0/chart/release", self.base_url);
        debug!("Fetching chart releases from {}...", url);
        self.http_client.get_json(&url).await
    }
}
