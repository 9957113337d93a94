//! Error types for the payment call.

use thiserror::Error;

/// Errors surfaced by [`PaymentClient::process_payment`](crate::payment::PaymentClient::process_payment).
#[derive(Debug, Error)]
pub enum PaymentError {
    /// The request never got a response (connection refused, DNS, broken body, ...).
    #[error("payment transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The payment server answered with a status of 400 or above.
    #[error("payment server error: {status}")]
    Server { status: u16 },
}

impl PaymentError {
    /// The HTTP status of a server rejection.
    pub fn status(&self) -> Option<u16> {
        match self {
            PaymentError::Server { status } => Some(*status),
            PaymentError::Transport(e) => e.status().map(|s| s.as_u16()),
        }
    }
}
