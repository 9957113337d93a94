//! Plain constructors for sample beers, cases and carts.
//!
//! Used by the demo binary and the tests.

use crate::model::{Beer, Cart, Case};
use std::sync::Arc;

pub fn fixture_beer(brand: &str, name: &str, ounces: f64) -> Arc<Beer> {
    Arc::new(Beer::new(brand, name, ounces))
}

pub fn fixture_case(count: u32, beer: Arc<Beer>, price: f64) -> Case {
    Case::new(count, beer, price)
}

/// A cart holding a single case: four Duvel Tripel Hop at 14.
pub fn fixture_cart() -> Cart {
    let mut cart = Cart::new();
    cart.add_case(fixture_case(4, fixture_beer("Duvel", "Tripel Hop", 11.0), 14.0));
    cart
}
