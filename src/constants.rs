//! Shared constants used across the application.

/// User agent string sent with upstream API requests.
pub const USER_AGENT: &str = "hackathon-dashboard/0.1";

/// Default upstream search query.
///
/// Replies and retweets are excluded so the slideshow only shows original posts.
pub const DEFAULT_SEARCH_QUERY: &str = "@AnthropicAI @Replit @LightspeedIndia -is:reply -is:retweet";

/// Default base URL of the Twitter/X API.
pub const DEFAULT_TWITTER_API_BASE: &str = "https://api.twitter.com";

/// Number of results requested from the upstream search per refresh.
pub const SEARCH_MAX_RESULTS: u8 = 50;

/// Maximum number of posts kept per author in a single response.
pub const MAX_POSTS_PER_AUTHOR: usize = 3;

/// Maximum number of posts returned by the aggregator, and shown in the slideshow.
pub const MAX_MENTIONS: usize = 15;

/// Handles shown under the mention panel heading.
pub const TRACKED_HANDLES: &[&str] = &["AnthropicAI", "Replit", "LightspeedIndia", "devfolio"];
