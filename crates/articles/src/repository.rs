//! Article repository and use cases
//!
//! The repository folds network outcomes into domain results: transport
//! failures that survived the retry budget become [`ArticleError::Offline`],
//! application errors keep their status. Screen code decides what each error
//! means for the user.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use net_client::{FailedOutcome, RetryPolicy};
use snapi_client::{ApiErrorBody, ArticleQuery, SnapiClient};

use crate::mapper::to_article_list;
use crate::model::Article;

/// Errors surfaced by article operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArticleError {
    /// No response could be obtained, even after retrying.
    #[error("network unreachable")]
    Offline,

    /// The API answered but rejected the request.
    #[error("API rejected the request (status {status})")]
    Api {
        /// HTTP status of the rejection.
        status: u16,
    },

    /// The requested article does not exist.
    #[error("article {id} not found")]
    NotFound {
        /// ID that was looked up.
        id: i64,
    },
}

/// Result type for article operations.
pub type Result<T> = std::result::Result<T, ArticleError>;

/// Data access seam for articles.
#[async_trait]
pub trait ArticlesRepository: Send + Sync {
    /// Fetch one page of articles.
    async fn fetch_articles(&self, limit: u32, offset: u32) -> Result<Vec<Article>>;

    /// Fetch a single article by ID.
    async fn get_article(&self, id: i64) -> Result<Article>;
}

/// Repository backed by the SNAPI client, retrying transport failures.
pub struct RemoteArticlesRepository {
    client: Arc<SnapiClient>,
    retry: RetryPolicy,
}

impl RemoteArticlesRepository {
    /// Build a repository over a shared client with the default retry budget.
    pub fn new(client: Arc<SnapiClient>) -> Self {
        Self { client, retry: RetryPolicy::default() }
    }

    /// Override the retry policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    fn to_error(failure: FailedOutcome<ApiErrorBody>) -> ArticleError {
        match failure {
            FailedOutcome::Transport(err) => {
                tracing::warn!(error = %err, "article request failed at the transport level");
                ArticleError::Offline
            }
            FailedOutcome::Application { status, body, .. } => {
                tracing::warn!(
                    status,
                    detail = body.as_ref().map(|b| b.detail.as_str()).unwrap_or(""),
                    "article request rejected"
                );
                ArticleError::Api { status }
            }
        }
    }
}

#[async_trait]
impl ArticlesRepository for RemoteArticlesRepository {
    async fn fetch_articles(&self, limit: u32, offset: u32) -> Result<Vec<Article>> {
        self.client
            .fetch_articles_with_retry(&ArticleQuery::page(limit, offset), &self.retry)
            .await
            .ok()
            .map(|page| to_article_list(page.results))
            .map_err(Self::to_error)
    }

    async fn get_article(&self, id: i64) -> Result<Article> {
        self.client
            .get_article_with_retry(id, &self.retry)
            .await
            .ok()
            .map(Article::from)
            .map_err(|failure| match Self::to_error(failure) {
                ArticleError::Api { status: 404 } => ArticleError::NotFound { id },
                other => other,
            })
    }
}

/// Use case: fetch one page of the article feed.
pub struct FetchArticlesUseCase {
    repository: Arc<dyn ArticlesRepository>,
}

impl FetchArticlesUseCase {
    /// Wrap a repository.
    pub fn new(repository: Arc<dyn ArticlesRepository>) -> Self {
        Self { repository }
    }

    /// Run the use case.
    pub async fn run(&self, limit: u32, offset: u32) -> Result<Vec<Article>> {
        self.repository.fetch_articles(limit, offset).await
    }
}

/// Use case: fetch a single article by ID.
pub struct GetArticleUseCase {
    repository: Arc<dyn ArticlesRepository>,
}

impl GetArticleUseCase {
    /// Wrap a repository.
    pub fn new(repository: Arc<dyn ArticlesRepository>) -> Self {
        Self { repository }
    }

    /// Run the use case.
    pub async fn run(&self, id: i64) -> Result<Article> {
        self.repository.get_article(id).await
    }
}
