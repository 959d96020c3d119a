//! Spaceflight News API (SNAPI) client
//!
//! This crate provides a thin typed client for SNAPI v4: endpoint methods for
//! the paginated article feed and single-article lookup, the wire DTOs they
//! decode, and the client configuration. Every call resolves to a
//! [`net_client::NetworkOutcome`] so callers never handle raw HTTP errors.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod config;
pub mod dto;

pub use api::{ApiErrorBody, ArticleQuery, SnapiClient};
pub use config::ClientConfig;
