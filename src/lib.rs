//! # Beer Subscription
//!
//! > **A timer-driven subscription feeding an order handler over one channel.**
//!
//! A [`Cart`](model::Cart) collects priced cases of beer. A
//! [`SubscriptionActor`](subscription::SubscriptionActor) fires a snapshot of
//! its cart into the order channel on every tick, and an
//! [`OrderHandler`](order_handler::OrderHandler) consumes those snapshots and
//! records them as placed orders.
//!
//! ## Concurrency Model
//!
//! - The subscription and the order handler each run in their own Tokio task.
//! - They share nothing but the order channel; messages are delivered FIFO.
//! - The subscription owns its cart and interval. Updaters go through a
//!   [`SubscriptionClient`](subscription::SubscriptionClient), so no lock is involved.
//! - The handler owns the ledger and processes one message at a time.
//! - The channel is bounded: a slow handler makes the subscription wait.
//!
//! ## Module Tour
//!
//! - [`model`] - Beers, cases, carts, order messages and the ledger
//! - [`subscription`] - The producer: timer loop plus client
//! - [`order_handler`] - The consumer: message dispatch, validation policy, ledger
//! - [`payment`] - HTTP boundary charging a total
//! - [`lifecycle`] - Wiring, graceful shutdown and tracing setup
//! - [`config`] - Environment-driven settings
//! - [`fixtures`] - Sample data
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info SUBSCRIPTION_INTERVAL_MS=200 cargo run
//! ```

pub mod config;
pub mod fixtures;
pub mod lifecycle;
pub mod model;
pub mod order_handler;
pub mod payment;
pub mod subscription;
