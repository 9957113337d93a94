//! Error types for order placement.

use thiserror::Error;

/// Errors that can occur while placing an order.
///
/// The default [`AcceptAll`](crate::order_handler::AcceptAll) policy never
/// produces one; they exist for validating policies.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The cart holds no cases.
    #[error("Cart is empty")]
    EmptyCart,

    /// The order was refused by a validation policy.
    #[error("Order rejected: {0}")]
    Rejected(String),
}
