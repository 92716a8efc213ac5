//! Daily aging rules, one per [`Category`].

use gildedrose_core::{MAX_QUALITY, clamp_quality};

use crate::category::Category;
use crate::item::ItemState;

/// One day of aging (pure, deterministic).
///
/// Implementations must not perform IO or keep state between calls; the same
/// input always yields the same output.
pub trait UpdateRule {
    fn transition(&self, state: ItemState) -> ItemState;
}

impl UpdateRule for Category {
    fn transition(&self, state: ItemState) -> ItemState {
        match self {
            Category::Standard => standard(state),
            Category::AgedBrie => aged_brie(state),
            Category::BackstagePass => backstage_pass(state),
            Category::Legendary => state,
            Category::Conjured => conjured(state),
        }
    }
}

// Arithmetic saturates so every rule is total over i32.

fn standard(state: ItemState) -> ItemState {
    let mut quality = state.quality.saturating_sub(1);
    let sell_in = state.sell_in.saturating_sub(1);
    if sell_in < 0 {
        quality = quality.saturating_sub(1);
    }
    ItemState::new(clamp_quality(quality), sell_in)
}

fn aged_brie(state: ItemState) -> ItemState {
    let mut quality = state.quality;
    if quality < MAX_QUALITY {
        quality += 1;
    }
    let sell_in = state.sell_in.saturating_sub(1);
    if sell_in < 0 && quality < MAX_QUALITY {
        quality += 1;
    }
    ItemState::new(clamp_quality(quality), sell_in)
}

/// Branches on the sell-in *before* today's decrement.
fn backstage_pass(state: ItemState) -> ItemState {
    let quality = match state.sell_in {
        s if s > 10 => state.quality.saturating_add(1),
        s if s > 5 => state.quality.saturating_add(2),
        s if s > 0 => state.quality.saturating_add(3),
        // Concert is over: worthless, whatever the prior quality.
        _ => 0,
    };
    ItemState::new(clamp_quality(quality), state.sell_in.saturating_sub(1))
}

fn conjured(state: ItemState) -> ItemState {
    let mut quality = state.quality;
    if quality > 0 {
        quality -= 2;
    }
    let sell_in = state.sell_in.saturating_sub(1);
    if sell_in < 0 && quality > 0 {
        quality -= 2;
    }
    ItemState::new(clamp_quality(quality), sell_in)
}
