//! # Observability & Tracing
//!
//! The library never installs a global subscriber. Every component runs inside
//! a [`Span`](tracing::Span) handed to it at construction
//! ([`SubscriptionActor::with_span`](crate::subscription::SubscriptionActor::with_span),
//! [`OrderHandler::with_span`](crate::order_handler::OrderHandler::with_span)),
//! and emits its records through whatever subscriber is current. Binaries call
//! [`setup_tracing`] once; tests install a scoped subscriber with
//! `tracing::subscriber::set_default` to capture or silence output.
//!
//! ## What Gets Traced
//!
//! - **Subscription**: start/stop with the number of carts fired, cart and interval
//!   replacements, each fired cart (debug)
//! - **Order handler**: every placed order with its id and the ledger size,
//!   rejected orders and malformed messages (error)
//! - **Payment**: accepted and rejected payments with the HTTP status
//!
//! ## Usage Examples
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run
//! RUST_LOG=beer_subscription::order_handler=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO subscription: Subscription started interval=1s cases=1
//! INFO order_handler: Order handler started
//! INFO order_handler: Placed order order_id=order_1 size=1
//! INFO subscription: Cart replaced cases=2 subtotal=38.0
//! INFO order_handler: Placed order order_id=order_2 size=2
//! ```

/// Initializes structured logging for the demo binary.
///
/// Filtering follows `RUST_LOG`. The compact format shows the component span
/// inline instead of the module path.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
