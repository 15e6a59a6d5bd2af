//! Client for the Twitter/X v2 recent search API.

pub mod models;

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, error};

use crate::constants::{SEARCH_MAX_RESULTS, USER_AGENT};
use crate::mentions::MentionError;

pub use models::{Includes, Media, PublicMetrics, SearchResponse, Tweet, User};

const TWEET_FIELDS: &str = "created_at,public_metrics,author_id,attachments";
const USER_FIELDS: &str = "username,name,profile_image_url";
const MEDIA_FIELDS: &str = "url,preview_image_url,type";
const EXPANSIONS: &str = "author_id,attachments.media_keys";

/// Thin wrapper around `reqwest` for the recent search endpoint.
#[derive(Debug, Clone)]
pub struct TwitterClient {
    http: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl TwitterClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        bearer_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, MentionError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token,
        })
    }

    /// Run one recent search for `query`, expanding authors and media.
    ///
    /// # Errors
    ///
    /// Returns [`MentionError::MissingCredential`] without making a request when
    /// no token is configured, and otherwise any transport, status, or decode failure.
    pub async fn search_recent(&self, query: &str) -> Result<SearchResponse, MentionError> {
        let token = self
            .bearer_token
            .as_deref()
            .ok_or(MentionError::MissingCredential)?;

        let url = format!("{}/2/tweets/search/recent", self.base_url);
        debug!(url = %url, query = %query, "Searching recent posts");

        let max_results = SEARCH_MAX_RESULTS.to_string();
        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .query(&[
                ("query", query),
                ("max_results", max_results.as_str()),
                ("tweet.fields", TWEET_FIELDS),
                ("user.fields", USER_FIELDS),
                ("media.fields", MEDIA_FIELDS),
                ("expansions", EXPANSIONS),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let details = serde_json::from_slice::<Value>(&body)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()));
            error!(status = status.as_u16(), details = %details, "Search API error");
            return Err(MentionError::UpstreamStatus {
                status: status.as_u16(),
                details,
            });
        }

        serde_json::from_slice(&body).map_err(|e| {
            error!("Failed to decode search response: {e}");
            MentionError::UpstreamData(e.to_string())
        })
    }
}
