//! Messages carried on the order channel.

use crate::model::Cart;
use serde_json::Value;

/// A message sent from a subscription to the order handler.
///
/// The handler matches on the variant, so only `Order` can ever reach the
/// ledger. Payloads that arrive from outside the typed world (JSON from a
/// queue, a webhook, ...) go through [`OrderMessage::from_json`] and end up as
/// `Malformed` when they do not describe a cart.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderMessage {
    /// A cart snapshot to be placed as an order.
    Order(Cart),
    /// A payload that could not be interpreted as a cart.
    Malformed { raw: Value, reason: String },
}

impl OrderMessage {
    /// Decodes a raw JSON payload into a message.
    ///
    /// Only a JSON object can describe a cart; serde would otherwise accept
    /// the positional array form of the struct as well.
    pub fn from_json(raw: Value) -> Self {
        if !raw.is_object() {
            return Self::malformed(raw, "expected a cart object");
        }
        match serde_json::from_value::<Cart>(raw.clone()) {
            Ok(cart) => Self::Order(cart),
            Err(e) => Self::Malformed {
                raw,
                reason: e.to_string(),
            },
        }
    }

    /// Wraps an arbitrary payload as a malformed message.
    pub fn malformed(raw: Value, reason: impl Into<String>) -> Self {
        Self::Malformed {
            raw,
            reason: reason.into(),
        }
    }
}

impl From<Cart> for OrderMessage {
    fn from(cart: Cart) -> Self {
        Self::Order(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Beer, Case};
    use std::sync::Arc;

    #[test]
    fn test_from_json_accepts_cart() {
        let mut cart = Cart::new();
        cart.add_case(Case::new(4, Arc::new(Beer::new("Duvel", "Tripel Hop", 11.0)), 14.0));
        let raw = serde_json::to_value(&cart).unwrap();

        assert_eq!(OrderMessage::from_json(raw), OrderMessage::Order(cart));
    }

    #[test]
    fn test_from_json_rejects_bare_case() {
        let case = Case::new(30, Arc::new(Beer::new("Labatt", "Blue Light", 12.0)), 24.0);
        let raw = serde_json::to_value(&case).unwrap();

        match OrderMessage::from_json(raw.clone()) {
            OrderMessage::Malformed { raw: kept, reason } => {
                assert_eq!(kept, raw);
                assert!(!reason.is_empty());
            }
            other => panic!("expected malformed message, got {other:?}"),
        }
    }

    #[test]
    fn test_from_json_rejects_non_objects() {
        for raw in [serde_json::json!([[]]), serde_json::json!(null), serde_json::json!(14.0)] {
            assert_eq!(
                OrderMessage::from_json(raw.clone()),
                OrderMessage::malformed(raw, "expected a cart object")
            );
        }
    }
}
