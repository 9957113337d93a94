//! # System Lifecycle & Orchestration
//!
//! Wires a [`SubscriptionActor`](crate::subscription::SubscriptionActor) to an
//! [`OrderHandler`](crate::order_handler::OrderHandler) through a single order
//! channel and manages both tasks.
//!
//! ## Graceful Shutdown
//!
//! 1. **Cancel the subscription** - the timer loop exits, dropping its sender
//! 2. **Drop remaining senders** - the order channel closes
//! 3. **Handler drains** - carts already queued are still placed
//! 4. **Await completion** - the ledger is returned to the caller
//!
//! No fired cart is lost: cancellation only stops new ticks.

pub mod order_system;
pub mod tracing;

pub use self::order_system::*;
pub use self::tracing::*;
