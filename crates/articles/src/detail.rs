//! Headless article-detail screen state
//!
//! Loads a single article by ID through the repository. Like the list
//! controller, a new load cancels the in-flight one first.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

use crate::model::Article;
use crate::repository::{ArticleError, GetArticleUseCase};

/// Screen state for the article detail view.
#[derive(Debug, Clone, PartialEq)]
pub enum ArticleDetailState {
    /// The article is being fetched.
    Loading,
    /// The article is available.
    Loaded(Article),
    /// The fetch failed; the screen shows a retry prompt.
    Failed(ArticleError),
}

/// Controller for the article-detail screen.
pub struct ArticleDetailController {
    get_article: Arc<GetArticleUseCase>,
    state: Arc<RwLock<ArticleDetailState>>,
    load_task: Mutex<Option<JoinHandle<()>>>,
}

impl ArticleDetailController {
    /// Create a controller over the lookup use case.
    pub fn new(get_article: GetArticleUseCase) -> Self {
        Self {
            get_article: Arc::new(get_article),
            state: Arc::new(RwLock::new(ArticleDetailState::Loading)),
            load_task: Mutex::new(None),
        }
    }

    /// Snapshot of the current screen state.
    pub async fn state(&self) -> ArticleDetailState {
        self.state.read().await.clone()
    }

    /// Load an article, cancelling any in-flight load.
    pub async fn load(&self, id: i64) {
        let mut guard = self.load_task.lock().await;
        if let Some(prior) = guard.take() {
            prior.abort();
        }

        *self.state.write().await = ArticleDetailState::Loading;

        let get_article = Arc::clone(&self.get_article);
        let state = Arc::clone(&self.state);

        *guard = Some(tokio::spawn(async move {
            let next = match get_article.run(id).await {
                Ok(article) => ArticleDetailState::Loaded(article),
                Err(err) => {
                    tracing::warn!(id, error = %err, "loading the article failed");
                    ArticleDetailState::Failed(err)
                }
            };
            *state.write().await = next;
        }));
    }

    /// The screen left the foreground; cancel the in-flight load.
    pub async fn on_stop(&self) {
        if let Some(task) = self.load_task.lock().await.take() {
            task.abort();
        }
    }

    /// Wait for the in-flight load to settle. Intended for tests and
    /// shutdown paths.
    pub async fn wait_for_load(&self) {
        let task = self.load_task.lock().await.take();
        if let Some(task) = task {
            let _ = task.await;
        }
    }
}
