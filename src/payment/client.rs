//! # Payment Client
//!
//! Thin wrapper around a JSON `POST` of the amount to charge. There is no retry
//! and no authentication; failures go straight back to the caller.

use crate::payment::PaymentError;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

/// Client for an external payment endpoint.
#[derive(Debug, Clone)]
pub struct PaymentClient {
    client: Client,
    endpoint: String,
}

impl PaymentClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    /// Uses an existing `reqwest` client, sharing its connection pool.
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Charges `total` and returns the raw response body.
    ///
    /// The body of the request is the total encoded as a bare JSON number.
    /// Any status below 400 is a success.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn process_payment(&self, total: f64) -> Result<Vec<u8>, PaymentError> {
        debug!("Sending payment");
        let response = self.client.post(&self.endpoint).json(&total).send().await?;

        let status = response.status().as_u16();
        if status >= 400 {
            warn!(status, "Payment rejected");
            return Err(PaymentError::Server { status });
        }

        let body = response.bytes().await?;
        info!(status, bytes = body.len(), "Payment accepted");
        Ok(body.to_vec())
    }
}

/// One-off payment call against `endpoint`.
pub async fn process_payment(endpoint: &str, total: f64) -> Result<Vec<u8>, PaymentError> {
    PaymentClient::new(endpoint).process_payment(total).await
}
