//! Responsive layout classification.
//!
//! This crate contains the pure width→tier classifier and the observer that
//! tracks the active tier across viewport resize notifications. Wiring the
//! observer to an actual event source (the browser `resize` event) is the
//! frontend's job; everything here is deterministic and platform-free.

pub mod observer;
pub mod tier;

pub use observer::LayoutObserver;
pub use tier::{LayoutTier, DESKTOP_MIN_WIDTH, TABLET_MIN_WIDTH};
