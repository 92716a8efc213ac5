use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult};

use crate::category::{AGED_BRIE, BACKSTAGE_PASS, CONJURED, SULFURAS};
use crate::item::Item;
use crate::rule::UpdateRule;

/// The shop's catalog: an ordered sequence of items aged together.
///
/// Items are owned by the catalog for its whole lifetime; aging never adds or
/// removes entries, it only rewrites each item's quality and sell-in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GildedRose {
    items: Vec<Item>,
}

impl GildedRose {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// The five-item catalog the shop opens with.
    pub fn with_default_catalog() -> Self {
        Self::new(vec![
            Item::new(AGED_BRIE, 10, 20),
            Item::new(BACKSTAGE_PASS, 15, 20),
            Item::new(SULFURAS, 0, 80),
            Item::new(CONJURED, 3, 6),
            Item::new("Normal Item", 5, 10),
        ])
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Age every item by one day.
    pub fn advance_one_day(&mut self) {
        let _span = tracing::debug_span!("advance_one_day", items = self.items.len()).entered();

        for item in &mut self.items {
            let category = item.category();
            let before = item.state();
            let after = category.transition(before);
            item.apply(after);

            tracing::trace!(name = item.name(), ?category, ?before, ?after, "item aged");
        }
    }

    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.advance_one_day();
        }
    }

    /// One `name, sell_in, quality` line per item.
    pub fn report(&self) -> String {
        let mut out = String::from("name, sellIn, quality\n");
        for item in &self.items {
            out.push_str(&item.to_string());
            out.push('\n');
        }
        out
    }

    pub fn to_json(&self) -> DomainResult<String> {
        serde_json::to_string(self)
            .map_err(|e| DomainError::invariant(format!("catalog not serializable: {e}")))
    }

    /// Rebuild a catalog from [`GildedRose::to_json`] output.
    ///
    /// Only the shape is checked; field values are taken as-is.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("malformed catalog snapshot: {e}")))
    }
}
