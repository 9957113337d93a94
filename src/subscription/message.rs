//! Requests understood by the subscription actor.

use crate::model::Cart;
use crate::subscription::SubscriptionError;
use std::time::Duration;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the subscription.
pub type Response<T> = oneshot::Sender<Result<T, SubscriptionError>>;

/// Reads and replacements of the subscription state.
///
/// Each request is applied between ticks, so a tick always sees either the
/// old or the new value, never a partial update.
#[derive(Debug)]
pub enum SubscriptionRequest {
    GetCart {
        respond_to: Response<Cart>,
    },
    SetCart {
        cart: Cart,
        respond_to: Response<()>,
    },
    GetInterval {
        respond_to: Response<Duration>,
    },
    SetInterval {
        interval: Duration,
        respond_to: Response<()>,
    },
}
