//! # Subscription Client
//!
//! Cloneable handle used by external updaters to read and replace the cart and
//! interval held by a running [`SubscriptionActor`](crate::subscription::SubscriptionActor).

use crate::model::Cart;
use crate::subscription::{SubscriptionError, SubscriptionRequest};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// A type-safe client for interacting with a subscription.
///
/// Calls wait while the subscription is blocked handing a cart to a slow
/// order handler.
#[derive(Clone)]
pub struct SubscriptionClient {
    sender: mpsc::Sender<SubscriptionRequest>,
}

impl SubscriptionClient {
    pub fn new(sender: mpsc::Sender<SubscriptionRequest>) -> Self {
        Self { sender }
    }

    /// Returns a snapshot of the cart that the next tick will fire.
    #[instrument(skip(self))]
    pub async fn get_cart(&self) -> Result<Cart, SubscriptionError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SubscriptionRequest::GetCart { respond_to })
            .await
            .map_err(|_| SubscriptionError::Closed)?;
        response.await.map_err(|_| SubscriptionError::Dropped)?
    }

    /// Replaces the held cart. Carts already fired are not affected.
    #[instrument(skip(self, cart), fields(cases = cart.len()))]
    pub async fn set_cart(&self, cart: Cart) -> Result<(), SubscriptionError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SubscriptionRequest::SetCart { cart, respond_to })
            .await
            .map_err(|_| SubscriptionError::Closed)?;
        response.await.map_err(|_| SubscriptionError::Dropped)?
    }

    #[instrument(skip(self))]
    pub async fn get_interval(&self) -> Result<Duration, SubscriptionError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SubscriptionRequest::GetInterval { respond_to })
            .await
            .map_err(|_| SubscriptionError::Closed)?;
        response.await.map_err(|_| SubscriptionError::Dropped)?
    }

    /// Replaces the interval and restarts the timer with it.
    #[instrument(skip(self))]
    pub async fn set_interval(&self, interval: Duration) -> Result<(), SubscriptionError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SubscriptionRequest::SetInterval {
                interval,
                respond_to,
            })
            .await
            .map_err(|_| SubscriptionError::Closed)?;
        response.await.map_err(|_| SubscriptionError::Dropped)?
    }
}
