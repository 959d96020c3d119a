//! DTO to domain conversion
//!
//! Optional wire fields become empty strings in the domain model so screen
//! code never branches on missing presentation data.

use snapi_client::dto::{ArticleDto, AuthorDto, EventDto, LaunchDto, SocialsDto};

use crate::model::{Article, Author, Event, Launch, PaginatedArticleList, Socials};

impl From<ArticleDto> for Article {
    fn from(dto: ArticleDto) -> Self {
        Article {
            id: dto.id,
            title: dto.title,
            authors: dto.authors.into_iter().map(Author::from).collect(),
            url: dto.url,
            image_url: dto.image_url.unwrap_or_default(),
            news_site: dto.news_site.unwrap_or_default(),
            summary: dto.summary.unwrap_or_default(),
            published_at: dto.published_at,
            updated_at: dto.updated_at,
            featured: dto.featured,
            launches: dto.launches.into_iter().map(Launch::from).collect(),
            events: dto.events.into_iter().map(Event::from).collect(),
        }
    }
}

impl From<AuthorDto> for Author {
    fn from(dto: AuthorDto) -> Self {
        Author {
            name: dto.name,
            socials: dto.socials.map(Socials::from).unwrap_or_default(),
        }
    }
}

impl From<SocialsDto> for Socials {
    fn from(dto: SocialsDto) -> Self {
        Socials {
            x: dto.x.unwrap_or_default(),
            youtube: dto.youtube.unwrap_or_default(),
            instagram: dto.instagram.unwrap_or_default(),
            linkedin: dto.linkedin.unwrap_or_default(),
            mastodon: dto.mastodon.unwrap_or_default(),
            bluesky: dto.bluesky.unwrap_or_default(),
        }
    }
}

impl From<LaunchDto> for Launch {
    fn from(dto: LaunchDto) -> Self {
        Launch { launch_id: dto.launch_id, provider: dto.provider }
    }
}

impl From<EventDto> for Event {
    fn from(dto: EventDto) -> Self {
        Event { event_id: dto.event_id, provider: dto.provider }
    }
}

/// Convert a page of DTOs into domain articles.
pub fn to_article_list(dtos: Vec<ArticleDto>) -> Vec<Article> {
    dtos.into_iter().map(Article::from).collect()
}

/// Convert a page of DTOs into a [`PaginatedArticleList`] for the window it
/// was fetched with.
pub fn to_article_page(limit: u32, offset: u32, dtos: Vec<ArticleDto>) -> PaginatedArticleList {
    PaginatedArticleList { limit, offset, results: to_article_list(dtos) }
}
