use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};

use crate::errors;

use super::throttle::Throttle;

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// HTTP client preconfigured for the GitHub API, with a fixed delay
/// between consecutive requests
pub struct RateLimitedClient {
    client: Client,
    throttle: Throttle,
}

impl RateLimitedClient {
    pub fn new(
        user_agent: &str,
        timeout_secs: u64,
        rate_limit_ms: u64,
        token: Option<&str>,
    ) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs, token)?;
        let throttle = Throttle::new(rate_limit_ms);

        Ok(Self { client, throttle })
    }

    pub async fn get(&mut self, url: &str) -> Result<reqwest::Response> {
        self.throttle.wait().await;
        errors::with_fetch_context(self.client.get(url).send().await, url)
    }

    fn build_client(user_agent: &str, timeout_secs: u64, token: Option<&str>) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .default_headers(Self::build_headers(token)?)
            .build()
            .context("Failed to build HTTP client")
    }

    fn build_headers(token: Option<&str>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));

        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .context("Invalid characters in API token")?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }
}
