// HTTP feed client: a thin reqwest wrapper feeding `parse_feed`.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use super::parser::parse_feed;
use super::traits::{FeedEntry, FeedSource};

const USER_AGENT: &str = "newswire/0.1 (rss-classifier)";

/// Fetches feeds over HTTP(S).
pub struct FeedClient {
    client: reqwest::Client,
}

impl FeedClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FeedSource for FeedClient {
    async fn fetch(&self, url: &str) -> Result<Vec<FeedEntry>> {
        debug!(url = url, "Fetching feed");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request failed for {url}"))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("HTTP {status} when fetching {url}");
        }

        let body = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read body of {url}"))?;

        parse_feed(&body).with_context(|| format!("Failed to parse feed {url}"))
    }
}
