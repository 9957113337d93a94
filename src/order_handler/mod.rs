//! Order handling: the consumer side of the order channel.
//!
//! - [`handler`] - [`OrderHandler`], the consumer loop and ledger owner
//! - [`policy`] - [`OrderPolicy`] validation hook with [`AcceptAll`] and [`RejectEmptyCarts`]
//! - [`error`] - [`OrderError`]
//!
//! ## Usage
//!
//! ```rust
//! use beer_subscription::fixtures::fixture_cart;
//! use beer_subscription::order_handler::OrderHandler;
//! use tokio::sync::mpsc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (orders, inbox) = mpsc::channel(1);
//!     let handle = tokio::spawn(OrderHandler::new(inbox).run());
//!
//!     orders.send(fixture_cart().into()).await.unwrap();
//!     drop(orders);
//!
//!     let ledger = handle.await.unwrap();
//!     assert_eq!(ledger.len(), 1);
//! }
//! ```

pub mod error;
pub mod handler;
pub mod policy;

pub use error::*;
pub use handler::*;
pub use policy::*;
