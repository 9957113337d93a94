//! Payment boundary: charging a cart total against an HTTP endpoint.

pub mod client;
pub mod error;

pub use client::*;
pub use error::*;
