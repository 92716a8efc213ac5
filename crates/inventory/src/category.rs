use serde::{Deserialize, Serialize};

/// Name of the cheese whose quality improves with age.
pub const AGED_BRIE: &str = "Aged Brie";

/// Name of the concert pass whose value peaks right before the event.
pub const BACKSTAGE_PASS: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Name of the legendary item that never changes.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// Name of the conjured item that degrades twice as fast.
pub const CONJURED: &str = "Conjured Mana Cake";

/// Aging category of an item (closed set).
///
/// Resolved from the item name by exact, case-sensitive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Default for every name that is not one of the special labels.
    Standard,
    AgedBrie,
    BackstagePass,
    Legendary,
    Conjured,
}

impl Category {
    /// Pick the aging category for an item name.
    ///
    /// Never fails: unknown names are `Standard`.
    pub fn resolve(name: &str) -> Self {
        match name {
            AGED_BRIE => Category::AgedBrie,
            BACKSTAGE_PASS => Category::BackstagePass,
            SULFURAS => Category::Legendary,
            CONJURED => Category::Conjured,
            _ => Category::Standard,
        }
    }

    /// Legendary items are exempt from both aging and the quality bounds.
    pub fn is_legendary(self) -> bool {
        matches!(self, Category::Legendary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_labels_resolve_to_their_category() {
        assert_eq!(Category::resolve(AGED_BRIE), Category::AgedBrie);
        assert_eq!(Category::resolve(BACKSTAGE_PASS), Category::BackstagePass);
        assert_eq!(Category::resolve(SULFURAS), Category::Legendary);
        assert_eq!(Category::resolve(CONJURED), Category::Conjured);
    }

    #[test]
    fn unknown_names_fall_back_to_standard() {
        assert_eq!(Category::resolve("Normal Item"), Category::Standard);
        assert_eq!(Category::resolve("+5 Dexterity Vest"), Category::Standard);
        assert_eq!(Category::resolve(""), Category::Standard);
    }

    #[test]
    fn match_is_exact() {
        assert_eq!(Category::resolve("aged brie"), Category::Standard);
        assert_eq!(Category::resolve("Aged Brie "), Category::Standard);
        assert_eq!(Category::resolve("Conjured Apple"), Category::Standard);
        assert_eq!(
            Category::resolve("Backstage passes to a Metallica concert"),
            Category::Standard
        );
    }

    #[test]
    fn only_sulfuras_is_legendary() {
        assert!(Category::Legendary.is_legendary());
        assert!(!Category::Standard.is_legendary());
        assert!(!Category::AgedBrie.is_legendary());
        assert!(!Category::BackstagePass.is_legendary());
        assert!(!Category::Conjured.is_legendary());
    }
}
