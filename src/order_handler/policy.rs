//! Validation hook run before a cart is written to the ledger.

use crate::model::Cart;
use crate::order_handler::OrderError;
use async_trait::async_trait;

/// Decides whether a fired cart may be placed as an order.
///
/// The hook is async so that checks against other services (inventory,
/// customer accounts) can be added without changing the handler.
#[async_trait]
pub trait OrderPolicy: Send + Sync + 'static {
    async fn check(&self, cart: &Cart) -> Result<(), OrderError>;
}

/// Accepts every cart, including empty ones and negative totals.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

#[async_trait]
impl OrderPolicy for AcceptAll {
    async fn check(&self, _cart: &Cart) -> Result<(), OrderError> {
        Ok(())
    }
}

/// Refuses carts without any case.
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectEmptyCarts;

#[async_trait]
impl OrderPolicy for RejectEmptyCarts {
    async fn check(&self, cart: &Cart) -> Result<(), OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        Ok(())
    }
}
