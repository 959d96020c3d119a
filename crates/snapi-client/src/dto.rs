//! Wire types for SNAPI v4
//!
//! Field names follow the API schema directly; optional fields the API may
//! omit or null out are modeled as `Option` or defaulted collections.

use serde::{Deserialize, Serialize};

/// One page of the article feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedArticlesDto {
    /// Total number of articles matching the query.
    pub count: u64,

    /// URL of the next page, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// URL of the previous page, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,

    /// Articles on this page.
    pub results: Vec<ArticleDto>,
}

/// A single article as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleDto {
    /// Unique article ID, assigned by the API.
    pub id: i64,

    /// Article title, up to 250 characters.
    pub title: String,

    /// Credited authors.
    #[serde(default)]
    pub authors: Vec<AuthorDto>,

    /// URL of the original article.
    pub url: String,

    /// URL of the article's image.
    #[serde(default)]
    pub image_url: Option<String>,

    /// Name of the publishing news site.
    #[serde(default)]
    pub news_site: Option<String>,

    /// Summary text.
    #[serde(default)]
    pub summary: Option<String>,

    /// Publication timestamp, ISO-8601.
    pub published_at: String,

    /// Last-update timestamp, ISO-8601.
    pub updated_at: String,

    /// Whether the API flagged this article as featured.
    #[serde(default)]
    pub featured: bool,

    /// Launches this article relates to.
    #[serde(default)]
    pub launches: Vec<LaunchDto>,

    /// Events this article relates to.
    #[serde(default)]
    pub events: Vec<EventDto>,
}

/// A credited article author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorDto {
    /// Author name.
    pub name: String,

    /// Author's social links.
    #[serde(default)]
    pub socials: Option<SocialsDto>,
}

/// Social links attached to an author.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialsDto {
    /// X (Twitter) profile URL.
    #[serde(default)]
    pub x: Option<String>,

    /// YouTube channel URL.
    #[serde(default)]
    pub youtube: Option<String>,

    /// Instagram profile URL.
    #[serde(default)]
    pub instagram: Option<String>,

    /// LinkedIn profile URL.
    #[serde(default)]
    pub linkedin: Option<String>,

    /// Mastodon profile URL.
    #[serde(default)]
    pub mastodon: Option<String>,

    /// Bluesky profile URL.
    #[serde(default)]
    pub bluesky: Option<String>,
}

/// A launch referenced by an article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchDto {
    /// Launch Library ID of the launch.
    pub launch_id: String,

    /// Provider of the launch data.
    pub provider: String,
}

/// An event referenced by an article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDto {
    /// Launch Library ID of the event.
    pub event_id: i64,

    /// Provider of the event data.
    pub provider: String,
}
