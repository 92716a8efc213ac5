//! Value object trait and the quality bounds shared by every aging rule.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new value from the old one.
///
/// ## Value Object vs owned record
///
/// - **Value Object**: an item's `(quality, sell_in)` pair for a given day
/// - **Owned record**: the catalog item carrying a name plus its current pair
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct ItemState {
///     quality: i32,
///     sell_in: i32,
/// }
///
/// impl ValueObject for ItemState {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Lowest quality a non-legendary item can hold.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality a non-legendary item can hold.
pub const MAX_QUALITY: i32 = 50;

/// Constrain a quality score to `[MIN_QUALITY, MAX_QUALITY]`.
pub fn clamp_quality(quality: i32) -> i32 {
    quality.clamp(MIN_QUALITY, MAX_QUALITY)
}
