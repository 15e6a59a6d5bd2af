//! Mention aggregation: turns a raw search response into the capped post list
//! shown on the dashboard.

mod error;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::{MAX_MENTIONS, MAX_POSTS_PER_AUTHOR};
use crate::twitter::{Includes, SearchResponse, Tweet, TwitterClient};

pub use error::MentionError;

/// A normalized social media post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author: String,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_image: Option<String>,
    pub content: String,
    /// Relative age, fixed at fetch time.
    pub time: String,
    pub likes: u64,
    pub retweets: u64,
    #[serde(default)]
    pub media: Option<PostMedia>,
}

impl Post {
    /// Name to show for the author, falling back to the handle.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.author_name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("@{}", self.author))
    }

    /// Link to the post on the social network.
    #[must_use]
    pub fn permalink(&self) -> String {
        format!("https://twitter.com/{}/status/{}", self.author, self.id)
    }
}

/// Media attached to a post.
///
/// Serialized as a bare object when there is one item and as an array when
/// there are several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostMedia {
    Single(MediaItem),
    Multiple(Vec<MediaItem>),
}

impl PostMedia {
    /// Build from resolved items. Returns `None` when nothing resolved.
    #[must_use]
    pub fn from_items(mut items: Vec<MediaItem>) -> Option<Self> {
        match items.len() {
            0 => None,
            1 => items.pop().map(Self::Single),
            _ => Some(Self::Multiple(items)),
        }
    }

    /// All items in order.
    #[must_use]
    pub fn items(&self) -> &[MediaItem] {
        match self {
            Self::Single(item) => std::slice::from_ref(item),
            Self::Multiple(items) => items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

/// Body of a successful `GET /api/tweets`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentionsResponse {
    pub tweets: Vec<Post>,
}

/// Fetches recent mentions from the search API and reshapes them.
///
/// Stateless: every call performs its own upstream request.
#[derive(Debug, Clone)]
pub struct MentionAggregator {
    client: TwitterClient,
    query: String,
}

impl MentionAggregator {
    #[must_use]
    pub fn new(client: TwitterClient, query: impl Into<String>) -> Self {
        Self {
            client,
            query: query.into(),
        }
    }

    /// Fetch and reshape the current mentions.
    ///
    /// # Errors
    ///
    /// Fails as a whole on any upstream or data error; no partial results.
    pub async fn fetch_mentions(&self) -> Result<Vec<Post>, MentionError> {
        let response = self.client.search_recent(&self.query).await?;
        let fetched = response.data.len();

        let all_posts = reshape(&response, Utc::now())?;
        let posts = apply_caps(all_posts);

        info!(fetched, returned = posts.len(), "Fetched mentions");
        debug!(
            authors = %posts.iter().map(|p| format!("@{}", p.author)).collect::<Vec<_>>().join(", "),
            "Mention authors"
        );

        Ok(posts)
    }
}

/// Convert every post in a search response, preserving upstream order.
///
/// # Errors
///
/// Returns [`MentionError::UpstreamData`] if a post's author is missing from
/// the `includes` table.
pub fn reshape(response: &SearchResponse, now: DateTime<Utc>) -> Result<Vec<Post>, MentionError> {
    response
        .data
        .iter()
        .map(|tweet| reshape_tweet(tweet, &response.includes, now))
        .collect()
}

fn reshape_tweet(tweet: &Tweet, includes: &Includes, now: DateTime<Utc>) -> Result<Post, MentionError> {
    let author = includes.user(&tweet.author_id).ok_or_else(|| {
        MentionError::UpstreamData(format!(
            "author {} of post {} not in includes",
            tweet.author_id, tweet.id
        ))
    })?;

    let hours_ago = (now - tweet.created_at).num_hours();

    Ok(Post {
        id: tweet.id.clone(),
        author: author.username.clone(),
        author_name: author.name.clone(),
        author_image: author.profile_image_url.as_deref().map(upgrade_profile_image),
        content: tweet.text.clone(),
        time: format_age(hours_ago),
        likes: tweet.public_metrics.like_count,
        retweets: tweet.public_metrics.retweet_count,
        media: resolve_media(tweet.media_keys(), includes),
    })
}

/// Human-relative age for a post `hours_ago` hours old.
#[must_use]
pub fn format_age(hours_ago: i64) -> String {
    if hours_ago < 1 {
        "Just now".to_string()
    } else {
        format!("{hours_ago}h ago")
    }
}

/// Request the larger avatar variant instead of the default thumbnail.
#[must_use]
pub fn upgrade_profile_image(url: &str) -> String {
    url.replacen("_normal", "_bigger", 1)
}

/// Resolve media keys against the includes table, keeping key order.
///
/// Keys with no matching media object, or whose object carries no URL, are dropped.
#[must_use]
pub fn resolve_media(keys: &[String], includes: &Includes) -> Option<PostMedia> {
    let items = keys
        .iter()
        .filter_map(|key| includes.media(key))
        .filter_map(|media| {
            let url = media.url.clone().or_else(|| media.preview_image_url.clone())?;
            Some(MediaItem {
                kind: media.kind.clone(),
                url,
            })
        })
        .collect();

    PostMedia::from_items(items)
}

/// Apply the per-author cap, then the global cap, preserving order.
#[must_use]
pub fn apply_caps(posts: Vec<Post>) -> Vec<Post> {
    let mut kept = cap_per_author(posts, MAX_POSTS_PER_AUTHOR);
    kept.truncate(MAX_MENTIONS);
    kept
}

/// Keep at most `limit` posts per author, earliest in list order first.
#[must_use]
pub fn cap_per_author(posts: Vec<Post>, limit: usize) -> Vec<Post> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    posts
        .into_iter()
        .filter(|post| {
            let count = counts.entry(post.author.clone()).or_insert(0);
            if *count >= limit {
                debug!(author = %post.author, "Filtering out post (author at cap)");
                return false;
            }
            *count += 1;
            true
        })
        .collect()
}
