//! Networking core for Helios News
//!
//! This crate wraps every HTTP call's result in a three-way outcome type
//! (success, application error, transport error), classifies raw responses
//! deterministically, and provides a bounded exponential-backoff retry
//! executor for transport-level failures.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod outcome;
pub mod retry;

pub use client::{CallOptions, HttpClient};
pub use outcome::{FailedOutcome, NetworkOutcome, OutcomeError};
pub use retry::{execute_with_retry, RetryPolicy};
