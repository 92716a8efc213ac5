use serde::{Deserialize, Serialize};

use gildedrose_core::ValueObject;

use crate::category::Category;

/// Per-day mutable state of an item: `(quality, sell_in)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemState {
    pub quality: i32,
    /// Days left to sell. Negative once past due.
    pub sell_in: i32,
}

impl ItemState {
    pub fn new(quality: i32, sell_in: i32) -> Self {
        Self { quality, sell_in }
    }
}

impl ValueObject for ItemState {}

/// An item in the catalog.
///
/// The name is fixed at construction and decides the aging category; only
/// `quality` and `sell_in` change, and only through [`Item::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    sell_in: i32,
    quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    pub fn category(&self) -> Category {
        Category::resolve(&self.name)
    }

    pub fn state(&self) -> ItemState {
        ItemState::new(self.quality, self.sell_in)
    }

    /// Overwrite the mutable pair with the result of a rule transition.
    pub fn apply(&mut self, state: ItemState) {
        self.quality = state.quality;
        self.sell_in = state.sell_in;
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
