//! Domain model for spaceflight articles

use serde::{Deserialize, Serialize};

/// A spaceflight news article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Unique article ID.
    pub id: i64,

    /// Article title.
    pub title: String,

    /// Credited authors.
    pub authors: Vec<Author>,

    /// URL of the original article.
    pub url: String,

    /// URL of the article's image; empty when the API sent none.
    pub image_url: String,

    /// Name of the publishing news site; empty when the API sent none.
    pub news_site: String,

    /// Summary text; empty when the API sent none.
    pub summary: String,

    /// Publication timestamp, ISO-8601.
    pub published_at: String,

    /// Last-update timestamp, ISO-8601.
    pub updated_at: String,

    /// Whether the API flagged this article as featured.
    pub featured: bool,

    /// Launches this article relates to.
    pub launches: Vec<Launch>,

    /// Events this article relates to.
    pub events: Vec<Event>,
}

/// A credited article author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    /// Author name.
    pub name: String,

    /// Author's social links.
    pub socials: Socials,
}

/// Social links attached to an author. Absent links are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Socials {
    /// X (Twitter) profile URL.
    pub x: String,
    /// YouTube channel URL.
    pub youtube: String,
    /// Instagram profile URL.
    pub instagram: String,
    /// LinkedIn profile URL.
    pub linkedin: String,
    /// Mastodon profile URL.
    pub mastodon: String,
    /// Bluesky profile URL.
    pub bluesky: String,
}

/// A launch referenced by an article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    /// Launch Library ID of the launch.
    pub launch_id: String,
    /// Provider of the launch data.
    pub provider: String,
}

/// An event referenced by an article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Launch Library ID of the event.
    pub event_id: i64,
    /// Provider of the event data.
    pub provider: String,
}

/// One page of articles together with the pagination window it was fetched
/// for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedArticleList {
    /// Number of results requested per page.
    pub limit: u32,
    /// Index of the first result in this page.
    pub offset: u32,
    /// Articles in this page.
    pub results: Vec<Article>,
}
