//! Cart and its line items.
//!
//! A [`Cart`] is a plain ordered list of [`Case`]s. Prices are stored per case
//! rather than derived from a unit price, so the subtotal is simply the sum of
//! the case prices. Negative prices are accepted (discounts, returns).

use crate::model::Beer;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A cart line item: a number of containers of one beer at a fixed price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub count: u32,
    pub beer: Arc<Beer>,
    pub price: f64,
}

impl Case {
    pub fn new(count: u32, beer: Arc<Beer>, price: f64) -> Self {
        Self { count, beer, price }
    }
}

/// An ordered collection of cases.
///
/// Cloning a cart produces an independent snapshot; the cases share their
/// [`Beer`] with the original.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    cases: Vec<Case>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a case to the cart.
    pub fn add_case(&mut self, case: Case) {
        self.cases.push(case);
    }

    /// Sum of the case prices, in insertion order.
    pub fn subtotal(&self) -> f64 {
        self.cases.iter().map(|case| case.price).sum()
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

impl FromIterator<Case> for Cart {
    fn from_iter<I: IntoIterator<Item = Case>>(iter: I) -> Self {
        Self {
            cases: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_add_case() {
        let mut cart = Cart::new();
        assert!(cart.is_empty());

        let blue_light = Arc::new(Beer::new("Labatt", "Blue Light", 12.0));
        cart.add_case(Case::new(6, blue_light, 10.99));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_subtotal() {
        let duvel_hop = Arc::new(Beer::new("Duvel", "Tripel Hop", 11.0));
        let blue_light = Arc::new(Beer::new("Labatt", "Blue Light", 12.0));

        let cases = [
            ("empty cart", vec![], 0.0),
            (
                "party time",
                vec![
                    Case::new(4, duvel_hop.clone(), 14.99),
                    Case::new(30, blue_light.clone(), 24.99),
                    Case::new(30, blue_light.clone(), 24.99),
                ],
                64.97,
            ),
            (
                "negative",
                vec![
                    Case::new(4, duvel_hop.clone(), -14.0),
                    Case::new(30, blue_light.clone(), 24.0),
                ],
                10.0,
            ),
        ];

        for (name, items, expected) in cases {
            let cart: Cart = items.into_iter().collect();
            let subtotal = cart.subtotal();
            assert!(
                (subtotal - expected).abs() < 1e-9,
                "{name}: expected {expected}, got {subtotal}"
            );
        }
    }

    #[test]
    fn test_subtotal_ignores_count_and_beer() {
        let beer = Arc::new(Beer::new("Duvel", "Tripel Hop", 11.0));
        let mut cart = Cart::new();
        cart.add_case(Case::new(1, beer.clone(), 5.0));
        cart.add_case(Case::new(100, beer, 5.0));
        assert_close(cart.subtotal(), 10.0);
    }

    #[test]
    fn test_empty_cart_subtotal_is_zero() {
        assert_eq!(Cart::new().subtotal(), 0.0);
    }

    #[test]
    fn test_clone_is_a_snapshot() {
        let beer = Arc::new(Beer::new("Duvel", "Tripel Hop", 11.0));
        let mut cart = Cart::new();
        cart.add_case(Case::new(4, beer.clone(), 14.0));

        let snapshot = cart.clone();
        cart.add_case(Case::new(4, beer, 14.0));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(cart.len(), 2);
        assert!(Arc::ptr_eq(&snapshot.cases()[0].beer, &cart.cases()[0].beer));
    }
}
