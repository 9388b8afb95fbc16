//! Slot layout, image filtering and placeholder replacement

/// Substring filters building the per-group image subsets
pub mod filter;
/// Numbered slots and the markup generated for them
pub mod slots;
/// Whole-document placeholder replacement
pub mod substitutor;
