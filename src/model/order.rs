use crate::model::Cart;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for placed orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// A cart snapshot accepted by the order handler.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedOrder {
    pub id: OrderId,
    pub cart: Cart,
    pub subtotal: f64,
}

impl PlacedOrder {
    pub fn new(id: OrderId, cart: Cart) -> Self {
        let subtotal = cart.subtotal();
        Self { id, cart, subtotal }
    }
}

/// Append-only log of processed orders, in the order they were placed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderLedger {
    orders: Vec<PlacedOrder>,
}

impl OrderLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, order: PlacedOrder) {
        self.orders.push(order);
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedOrder> {
        self.orders.iter()
    }

    pub fn get(&self, id: OrderId) -> Option<&PlacedOrder> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// Sum of the subtotals of every placed order.
    pub fn total(&self) -> f64 {
        self.orders.iter().map(|order| order.subtotal).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Beer, Case};
    use std::sync::Arc;

    #[test]
    fn test_order_id_display() {
        assert_eq!(OrderId(7).to_string(), "order_7");
    }

    #[test]
    fn test_ledger_total_and_lookup() {
        let beer = Arc::new(Beer::new("Duvel", "Tripel Hop", 11.0));
        let mut ledger = OrderLedger::new();
        for (id, price) in [(1, 14.0), (2, 24.0)] {
            let mut cart = Cart::new();
            cart.add_case(Case::new(4, beer.clone(), price));
            ledger.push(PlacedOrder::new(OrderId(id), cart));
        }

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.total(), 38.0);
        assert_eq!(ledger.get(OrderId(2)).map(|o| o.subtotal), Some(24.0));
        assert!(ledger.get(OrderId(3)).is_none());
    }
}
