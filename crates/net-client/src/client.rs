//! HTTP call execution and outcome classification
//!
//! [`HttpClient`] wraps a shared `reqwest::Client` and turns every call's raw
//! result into a [`NetworkOutcome`]. Classification is deterministic and
//! side-effect free: the client never throws, never retries, and never
//! mutates shared state.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::outcome::{NetworkOutcome, OutcomeError};

/// Per-call overrides applied on top of the client-level configuration.
///
/// Replaces annotation-driven timeout metadata with an explicit parameter at
/// the call site. `reqwest` applies a single total deadline per request, so
/// the override is one duration covering connect plus body read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallOptions {
    /// Total request timeout. `None` keeps the client-level timeout.
    pub timeout: Option<Duration>,
}

impl CallOptions {
    /// Options that override the total request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout: Some(timeout) }
    }
}

/// HTTP client that classifies raw call results into [`NetworkOutcome`]s.
///
/// The wrapped `reqwest::Client` holds the shared connection pool; cloning
/// this type is cheap and shares it.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
}

impl HttpClient {
    /// Wrap an already-configured `reqwest::Client`.
    pub fn new(inner: reqwest::Client) -> Self {
        Self { inner }
    }

    /// Start building a GET request.
    pub fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.inner.get(url)
    }

    /// Access the underlying `reqwest::Client`.
    pub fn inner(&self) -> &reqwest::Client {
        &self.inner
    }

    /// Execute a prepared request and classify the raw result.
    ///
    /// The classification is exhaustive and never fails:
    /// 1. a failure before any response was received yields
    ///    [`NetworkOutcome::TransportError`];
    /// 2. a 2xx response whose body decodes as `S` yields
    ///    [`NetworkOutcome::Success`];
    /// 3. everything else yields [`NetworkOutcome::ApplicationError`],
    ///    decoding the error body as `E` when possible. A 2xx body that does
    ///    not match the success schema lands here too, never in `Success`.
    pub async fn send<S, E>(
        &self,
        request: reqwest::RequestBuilder,
        options: &CallOptions,
    ) -> NetworkOutcome<S, E>
    where
        S: DeserializeOwned,
        E: DeserializeOwned,
    {
        let mut request = request;
        if let Some(timeout) = options.timeout {
            request = request.timeout(timeout);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(error = %err, "transport failure before a response was received");
                return NetworkOutcome::TransportError(OutcomeError::Http(err));
            }
        };

        let status = response.status().as_u16();
        let success = response.status().is_success();

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(status, error = %err, "connection lost while reading the body");
                return NetworkOutcome::TransportError(OutcomeError::Http(err));
            }
        };

        if success {
            match serde_json::from_slice::<S>(&bytes) {
                Ok(body) => NetworkOutcome::Success(body),
                Err(err) => {
                    // A 2xx body that misses the success schema is an
                    // application error, never a silent success.
                    tracing::debug!(status, error = %err, "success body failed to decode");
                    NetworkOutcome::ApplicationError {
                        body: None,
                        status,
                        source: Some(OutcomeError::Decode(err)),
                    }
                }
            }
        } else {
            match serde_json::from_slice::<E>(&bytes) {
                Ok(body) => {
                    tracing::debug!(status, "application error with decoded error body");
                    NetworkOutcome::ApplicationError { body: Some(body), status, source: None }
                }
                Err(err) => {
                    tracing::debug!(status, error = %err, "application error, error body undecodable");
                    NetworkOutcome::ApplicationError {
                        body: None,
                        status,
                        source: Some(OutcomeError::Decode(err)),
                    }
                }
            }
        }
    }
}
