//! Article browsing for Helios News
//!
//! This crate provides the domain model for spaceflight articles, the
//! repository over the SNAPI client, thin use cases, and headless screen
//! state for the article list and detail views. It models state only; it
//! renders nothing.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod detail;
pub mod list;
pub mod mapper;
pub mod model;
pub mod repository;

pub use detail::{ArticleDetailController, ArticleDetailState};
pub use list::{ArticleListController, ArticleListState, ListAction, ListEvent, ListUiMode, Notice};
pub use model::{Article, Author, Event, Launch, PaginatedArticleList, Socials};
pub use repository::{
    ArticleError, ArticlesRepository, FetchArticlesUseCase, GetArticleUseCase,
    RemoteArticlesRepository,
};
