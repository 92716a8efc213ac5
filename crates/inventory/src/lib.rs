//! Inventory aging domain module.
//!
//! This crate contains the daily aging rules for the catalog, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage).

pub mod catalog;
pub mod category;
pub mod item;
pub mod rule;

pub use catalog::GildedRose;
pub use category::Category;
pub use item::{Item, ItemState};
pub use rule::UpdateRule;
