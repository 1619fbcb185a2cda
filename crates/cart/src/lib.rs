//! Cart state model.
//!
//! The [`CartStore`] is the single source of truth for product quantities.
//! Cart contents and totals are derived views, recomputed from the product
//! mapping on every read, so there is no cached total that could go stale.

pub mod store;

pub use store::{CartError, CartItem, CartStore, CartTotals};
