//! Substring filters splitting the image list into per-group subsets

use crate::io::configuration::{ADDITIONAL_MARKERS, HAND_MARKER, SLOTS_PER_GROUP};
use crate::substitution::slots::{Slot, SlotGroup};

/// Check whether a path belongs to the hand subset
pub fn is_hand_image(path: &str) -> bool {
    path.contains(HAND_MARKER)
}

/// Check whether a path belongs to the additional subset
pub fn is_additional_image(path: &str) -> bool {
    ADDITIONAL_MARKERS.iter().any(|marker| path.contains(marker))
}

/// Ordered image subsets feeding the two slot groups
///
/// Both filters run over the full list, so a path matching both markers
/// appears in both subsets. Each subset keeps at most one image per slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSubsets {
    /// Hand images in list order
    pub hand: Vec<String>,
    /// Collection, polka and inspiration images in list order
    pub additional: Vec<String>,
}

impl ImageSubsets {
    /// Filter an image list into both subsets
    pub fn from_images(images: &[String]) -> Self {
        Self {
            hand: select(images, is_hand_image),
            additional: select(images, is_additional_image),
        }
    }

    /// Subset feeding the given group
    pub fn subset(&self, group: SlotGroup) -> &[String] {
        match group {
            SlotGroup::Hand => &self.hand,
            SlotGroup::Additional => &self.additional,
        }
    }

    /// Image mapped to a slot, if its subset is long enough
    pub fn image_for(&self, slot: Slot) -> Option<&str> {
        self.subset(slot.group())
            .get(slot.subset_index())
            .map(String::as_str)
    }
}

fn select(images: &[String], predicate: fn(&str) -> bool) -> Vec<String> {
    images
        .iter()
        .filter(|path| predicate(path))
        .take(SLOTS_PER_GROUP)
        .cloned()
        .collect()
}
