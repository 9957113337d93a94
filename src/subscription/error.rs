//! Error types for the subscription actor.

use std::time::Duration;
use thiserror::Error;

/// Errors returned to callers of a [`SubscriptionClient`](crate::subscription::SubscriptionClient).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubscriptionError {
    /// The subscription loop has ended and no longer accepts requests.
    #[error("Subscription closed")]
    Closed,

    /// The subscription loop ended before answering the request.
    #[error("Subscription dropped response channel")]
    Dropped,

    /// The period is zero or too large to schedule.
    #[error("Invalid interval: {0:?}")]
    InvalidInterval(Duration),

    /// The request channel capacity is outside `1..=Semaphore::MAX_PERMITS`.
    #[error("Invalid request buffer size: {0}")]
    InvalidBufferSize(usize),
}
