//! Timer-driven subscription that periodically fires a cart as an order.
//!
//! ## Structure
//!
//! - [`actor`] - [`SubscriptionActor`], the event loop owning the cart and interval
//! - [`client`] - [`SubscriptionClient`], the handle external updaters use
//! - [`message`] - [`SubscriptionRequest`] sent from the client to the actor
//! - [`error`] - [`SubscriptionError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use beer_subscription::fixtures::fixture_cart;
//! use beer_subscription::model::{Cart, OrderMessage};
//! use beer_subscription::subscription;
//! use std::time::Duration;
//! use tokio::sync::mpsc;
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (orders, mut inbox) = mpsc::channel(1);
//!     let cancel = CancellationToken::new();
//!     let (actor, client) = subscription::new(
//!         Cart::new(),
//!         Duration::from_millis(10),
//!         orders,
//!         cancel.clone(),
//!     )?;
//!     tokio::spawn(actor.run());
//!
//!     client.set_cart(fixture_cart()).await?;
//!     let fired = inbox.recv().await;
//!     assert_eq!(fired, Some(OrderMessage::Order(fixture_cart())));
//!
//!     cancel.cancel();
//!     Ok(())
//! }
//! ```

pub mod actor;
pub mod client;
pub mod error;
pub mod message;

pub use actor::*;
pub use client::*;
pub use error::*;
pub use message::*;

use crate::model::{Cart, OrderMessage};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Creates a new subscription actor and its client.
pub fn new(
    cart: Cart,
    interval: Duration,
    orders: mpsc::Sender<OrderMessage>,
    cancel: CancellationToken,
) -> Result<(SubscriptionActor, SubscriptionClient), SubscriptionError> {
    SubscriptionActor::new(cart, interval, orders, cancel, 32)
}
