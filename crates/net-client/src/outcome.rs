//! Typed network call outcomes
//!
//! Every HTTP call performed through this crate resolves to a
//! [`NetworkOutcome`] instead of a `Result` that callers have to guard with
//! exception-style handling. The three variants are exhaustive: a call either
//! produced a decodable success body, produced a response that could not be
//! interpreted as success, or never produced an interpretable response at all.

use std::fmt;

use thiserror::Error;

/// Underlying cause attached to a failed outcome.
///
/// Keeps the original transport or decode error around so callers can log or
/// inspect it without this crate ever propagating it as a panic or `Err`.
#[derive(Debug, Error)]
pub enum OutcomeError {
    /// The HTTP client failed before or while obtaining a response.
    #[error("transport failure: {0}")]
    Http(#[from] reqwest::Error),

    /// A response body failed to decode against the expected schema.
    #[error("decode failure: {0}")]
    Decode(#[from] serde_json::Error),

    /// A failure described only by a message.
    #[error("{0}")]
    Message(String),
}

impl OutcomeError {
    /// Create a message-only error.
    pub fn message(msg: impl Into<String>) -> Self {
        OutcomeError::Message(msg.into())
    }
}

/// The outcome of a single HTTP call attempt.
///
/// `S` is the expected success body schema, `E` the expected error body
/// schema. Exactly one variant is produced per call, the instance is
/// immutable, and consuming code must handle all three branches.
///
/// # Examples
/// ```
/// use net_client::NetworkOutcome;
///
/// let outcome: NetworkOutcome<u32, String> = NetworkOutcome::Success(7);
/// let doubled = outcome.fold(|n| n * 2, |_| 0);
/// assert_eq!(doubled, 14);
/// ```
#[derive(Debug)]
pub enum NetworkOutcome<S, E> {
    /// The call completed with a 2xx status and the body decoded as `S`.
    Success(S),

    /// A response was received, but with a non-2xx status or a body that
    /// failed to decode against the success schema.
    ApplicationError {
        /// The error body decoded as `E`, when the server sent one that
        /// matched the declared error schema.
        body: Option<E>,
        /// HTTP status code of the received response.
        status: u16,
        /// The decode failure that forced this classification, if any.
        source: Option<OutcomeError>,
    },

    /// No interpretable HTTP response was obtained (DNS, connect, timeout,
    /// TLS, or a failure while the request was being produced).
    TransportError(OutcomeError),
}

/// The failure half of a [`NetworkOutcome`], produced by [`NetworkOutcome::ok`]
/// and handed to the error branch of [`NetworkOutcome::fold`].
#[derive(Debug)]
pub enum FailedOutcome<E> {
    /// Application-level failure: a response was received but not fulfilled.
    Application {
        /// Decoded error body, when available.
        body: Option<E>,
        /// HTTP status code of the received response.
        status: u16,
        /// Decode failure that forced this classification, if any.
        source: Option<OutcomeError>,
    },
    /// Transport-level failure: no interpretable response.
    Transport(OutcomeError),
}

impl<E> FailedOutcome<E> {
    /// HTTP status of the failure, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            FailedOutcome::Application { status, .. } => Some(*status),
            FailedOutcome::Transport(_) => None,
        }
    }

    /// Whether this failure happened before any response was obtained.
    pub fn is_transport(&self) -> bool {
        matches!(self, FailedOutcome::Transport(_))
    }
}

impl<E> fmt::Display for FailedOutcome<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailedOutcome::Application { status, .. } => {
                write!(f, "application error (status {status})")
            }
            FailedOutcome::Transport(err) => write!(f, "{err}"),
        }
    }
}

impl<S, E> NetworkOutcome<S, E> {
    /// Whether this outcome is a [`NetworkOutcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, NetworkOutcome::Success(_))
    }

    /// Whether this outcome is any failure variant.
    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    /// Whether this outcome is eligible for automatic retry.
    ///
    /// Only transport failures qualify; application errors are assumed to be
    /// deterministic and not recoverable by repeating the call.
    pub fn is_retryable(&self) -> bool {
        matches!(self, NetworkOutcome::TransportError(_))
    }

    /// The success body, if this is a success.
    pub fn body(&self) -> Option<&S> {
        match self {
            NetworkOutcome::Success(body) => Some(body),
            _ => None,
        }
    }

    /// Consume the outcome, yielding the success body if there is one.
    pub fn into_body(self) -> Option<S> {
        match self {
            NetworkOutcome::Success(body) => Some(body),
            _ => None,
        }
    }

    /// Split the outcome into a `Result`, bridging to `?`-style call sites.
    pub fn ok(self) -> Result<S, FailedOutcome<E>> {
        match self {
            NetworkOutcome::Success(body) => Ok(body),
            NetworkOutcome::ApplicationError { body, status, source } => {
                Err(FailedOutcome::Application { body, status, source })
            }
            NetworkOutcome::TransportError(err) => Err(FailedOutcome::Transport(err)),
        }
    }

    /// Transform the outcome into `R` by applying exactly one of the two
    /// branch functions.
    pub fn fold<R>(
        self,
        on_success: impl FnOnce(S) -> R,
        on_error: impl FnOnce(FailedOutcome<E>) -> R,
    ) -> R {
        match self.ok() {
            Ok(body) => on_success(body),
            Err(failure) => on_error(failure),
        }
    }

    /// Map the success body, leaving failures untouched.
    pub fn map<T>(self, fn_: impl FnOnce(S) -> T) -> NetworkOutcome<T, E> {
        match self {
            NetworkOutcome::Success(body) => NetworkOutcome::Success(fn_(body)),
            NetworkOutcome::ApplicationError { body, status, source } => {
                NetworkOutcome::ApplicationError { body, status, source }
            }
            NetworkOutcome::TransportError(err) => NetworkOutcome::TransportError(err),
        }
    }

    /// Map the decoded error body, leaving the other variants untouched.
    pub fn map_err_body<T>(self, fn_: impl FnOnce(E) -> T) -> NetworkOutcome<S, T> {
        match self {
            NetworkOutcome::Success(body) => NetworkOutcome::Success(body),
            NetworkOutcome::ApplicationError { body, status, source } => {
                NetworkOutcome::ApplicationError { body: body.map(fn_), status, source }
            }
            NetworkOutcome::TransportError(err) => NetworkOutcome::TransportError(err),
        }
    }

    /// Run an inspector on the success body, returning the outcome for
    /// chaining.
    pub fn on_success(self, fn_: impl FnOnce(&S)) -> Self {
        if let NetworkOutcome::Success(body) = &self {
            fn_(body);
        }
        self
    }

    /// Run an inspector on either failure variant, returning the outcome for
    /// chaining.
    pub fn on_error(self, fn_: impl FnOnce(Option<&E>, Option<u16>)) -> Self {
        match &self {
            NetworkOutcome::ApplicationError { body, status, .. } => {
                fn_(body.as_ref(), Some(*status));
            }
            NetworkOutcome::TransportError(_) => fn_(None, None),
            NetworkOutcome::Success(_) => {}
        }
        self
    }
}
