//! Where the dashboard gets its mentions from.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::constants::USER_AGENT;
use crate::mentions::{MentionAggregator, MentionsResponse, Post};

/// A source of mention posts for the slideshow.
#[async_trait]
pub trait MentionSource: Send + Sync {
    /// Fetch the current post list.
    async fn fetch(&self) -> Result<Vec<Post>>;

    /// Short description for logs.
    fn describe(&self) -> String;
}

/// Calls the aggregator in this process, skipping the HTTP hop.
pub struct InProcessSource {
    aggregator: MentionAggregator,
}

impl InProcessSource {
    #[must_use]
    pub fn new(aggregator: MentionAggregator) -> Self {
        Self { aggregator }
    }
}

#[async_trait]
impl MentionSource for InProcessSource {
    async fn fetch(&self) -> Result<Vec<Post>> {
        Ok(self.aggregator.fetch_mentions().await?)
    }

    fn describe(&self) -> String {
        "in-process aggregator".to_string()
    }
}

/// Polls an aggregator endpoint over HTTP (`GET {url}` returning `{tweets}`).
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    /// Create a source for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl MentionSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<Post>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("Failed to reach mentions endpoint")?;

        if !response.status().is_success() {
            anyhow::bail!("Mentions endpoint returned status {}", response.status());
        }

        let body: MentionsResponse = response
            .json()
            .await
            .context("Failed to parse mentions response")?;

        Ok(body.tweets)
    }

    fn describe(&self) -> String {
        format!("remote endpoint {}", self.url)
    }
}
