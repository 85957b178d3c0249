use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;

use super::Upstream;
use crate::config::settings::UpstreamSettings;
use crate::errors::UpstreamError;

const API_KEY_HEADER: &str = "x-rapidapi-key";
const API_HOST_HEADER: &str = "x-rapidapi-host";

/// HTTP client bound to the provider base URL with RapidAPI credentials
pub struct TennisApiClient {
    client: Client,
    base_url: String,
}

impl TennisApiClient {
    pub fn new(settings: &UpstreamSettings) -> Result<Self> {
        let client = Self::build_client(settings)?;
        let base_url = settings.base_url.trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_client(settings: &UpstreamSettings) -> Result<Client> {
        let mut builder = Client::builder()
            .user_agent(settings.user_agent)
            .default_headers(Self::build_headers(settings)?);

        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().context("Failed to build HTTP client")
    }

    fn build_headers(settings: &UpstreamSettings) -> Result<HeaderMap> {
        let mut key = HeaderValue::from_str(&settings.api_key)
            .context("API key is not a valid header value")?;
        key.set_sensitive(true);
        let host = HeaderValue::from_str(&settings.api_host)
            .context("API host is not a valid header value")?;

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);
        headers.insert(API_HOST_HEADER, host);
        Ok(headers)
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send_get_request(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<reqwest::Response, UpstreamError> {
        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        Ok(request.send().await?)
    }
}

#[async_trait]
impl Upstream for TennisApiClient {
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<String, UpstreamError> {
        let url = self.build_url(path);
        debug!("GET {}", url);

        let response = self.send_get_request(&url, query).await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(status_error(status, &url, &body));
        }

        Ok(body)
    }
}

fn status_error(status: reqwest::StatusCode, url: &str, body: &str) -> UpstreamError {
    let mut message = format!(
        "{} {} from GET {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or(""),
        url
    );
    if !body.trim().is_empty() {
        message.push_str(": ");
        message.push_str(body.trim());
    }

    UpstreamError::Status {
        status: status.as_u16(),
        message,
    }
}
