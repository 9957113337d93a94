//! Pure data structures flowing between the subscription and the order handler.

pub mod beer;
pub mod cart;
pub mod message;
pub mod order;

pub use beer::*;
pub use cart::*;
pub use message::*;
pub use order::*;
