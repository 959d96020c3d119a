//! SNAPI v4 endpoints
//!
//! [`SnapiClient`] owns the shared HTTP connection pool and exposes one
//! method per endpoint. Each call resolves to a
//! [`NetworkOutcome`] with [`ApiErrorBody`] as the declared error schema;
//! `*_with_retry` variants re-attempt transport failures under a
//! [`RetryPolicy`].

use serde::{Deserialize, Serialize};

use net_client::{execute_with_retry, CallOptions, HttpClient, NetworkOutcome, RetryPolicy};

use crate::config::ClientConfig;
use crate::dto::{ArticleDto, PaginatedArticlesDto};

/// Error body SNAPI sends with non-2xx responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable description of the rejection.
    pub detail: String,
}

/// Query parameters for the article feed.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleQuery {
    /// Number of results per page.
    pub limit: u32,
    /// Index of the first result to return.
    pub offset: u32,
    /// Free-text search over title and summary, when set.
    pub search: Option<String>,
}

impl Default for ArticleQuery {
    fn default() -> Self {
        Self { limit: 10, offset: 0, search: None }
    }
}

impl ArticleQuery {
    /// Query for one page at the given position.
    pub fn page(limit: u32, offset: u32) -> Self {
        Self { limit, offset, search: None }
    }

    /// Add a free-text search term.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

/// Typed client for the Spaceflight News API.
///
/// # Examples
/// ```no_run
/// use snapi_client::{ArticleQuery, ClientConfig, SnapiClient};
///
/// async fn example() {
///     let client = SnapiClient::new(ClientConfig::default());
///     match client.fetch_articles(&ArticleQuery::page(10, 0)).await.into_body() {
///         Some(page) => println!("got {} articles", page.results.len()),
///         None => println!("feed unavailable"),
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SnapiClient {
    http: HttpClient,
    config: ClientConfig,
}

impl SnapiClient {
    /// Build a client from a configuration.
    ///
    /// The underlying connection pool is created once here and shared by all
    /// calls and clones.
    pub fn new(config: ClientConfig) -> Self {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { http: HttpClient::new(inner), config }
    }

    /// Fetch one page of the article feed.
    pub async fn fetch_articles(
        &self,
        query: &ArticleQuery,
    ) -> NetworkOutcome<PaginatedArticlesDto, ApiErrorBody> {
        let url = format!("{}/v4/articles", self.config.base_url());

        let mut request = self
            .http
            .get(&url)
            .query(&[("limit", query.limit), ("offset", query.offset)]);
        if let Some(search) = &query.search {
            request = request.query(&[("search", search)]);
        }

        tracing::debug!(limit = query.limit, offset = query.offset, "fetching article feed");
        self.http
            .send(
                self.apply_headers(request),
                &CallOptions::with_timeout(self.config.feed_timeout),
            )
            .await
    }

    /// Fetch a single article by ID.
    pub async fn get_article(&self, id: i64) -> NetworkOutcome<ArticleDto, ApiErrorBody> {
        let url = format!("{}/v4/articles/{}", self.config.base_url(), id);

        tracing::debug!(id, "fetching article");
        self.http
            .send(self.apply_headers(self.http.get(&url)), &CallOptions::default())
            .await
    }

    /// Fetch one page of the article feed, retrying transport failures.
    pub async fn fetch_articles_with_retry(
        &self,
        query: &ArticleQuery,
        policy: &RetryPolicy,
    ) -> NetworkOutcome<PaginatedArticlesDto, ApiErrorBody> {
        execute_with_retry(policy, || self.fetch_articles(query)).await
    }

    /// Fetch a single article by ID, retrying transport failures.
    pub async fn get_article_with_retry(
        &self,
        id: i64,
        policy: &RetryPolicy,
    ) -> NetworkOutcome<ArticleDto, ApiErrorBody> {
        execute_with_retry(policy, || self.get_article(id)).await
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn apply_headers(&self, mut request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request = request.header("Accept-Language", &self.config.accept_language);
        for (key, value) in &self.config.default_headers {
            request = request.header(key, value);
        }
        request
    }
}
