//! Response types for the v2 recent search endpoint.
//!
//! Only the fields requested by [`super::TwitterClient::search_recent`] are modelled.
//! Posts reference their author and media by key; the referenced objects live in
//! the `includes` side-table.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Top-level recent search response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// Matching posts, newest first. Absent when nothing matched.
    #[serde(default)]
    pub data: Vec<Tweet>,
    #[serde(default)]
    pub includes: Includes,
}

/// Expanded objects referenced by the posts in `data`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Includes {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub media: Vec<Media>,
}

impl Includes {
    /// Look up an expanded user by id.
    #[must_use]
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Look up an expanded media object by media key.
    #[must_use]
    pub fn media(&self, key: &str) -> Option<&Media> {
        self.media.iter().find(|m| m.media_key == key)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tweet {
    pub id: String,
    pub text: String,
    pub author_id: String,
    pub created_at: DateTime<Utc>,
    pub public_metrics: PublicMetrics,
    #[serde(default)]
    pub attachments: Option<Attachments>,
}

impl Tweet {
    /// Media keys attached to this post, in attachment order.
    #[must_use]
    pub fn media_keys(&self) -> &[String] {
        self.attachments
            .as_ref()
            .map_or(&[], |a| a.media_keys.as_slice())
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PublicMetrics {
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub retweet_count: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Attachments {
    #[serde(default)]
    pub media_keys: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Media {
    pub media_key: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub url: Option<String>,
    /// Thumbnail for videos and GIFs, which have no direct `url`.
    #[serde(default)]
    pub preview_image_url: Option<String>,
}
