//! Numbered placeholder slots and the markup generated for them
//!
//! The clock face has 24 slots. Slots 1–12 form the hand group and slots
//! 13–24 the additional group; each group is fed from its own image subset.

use crate::io::configuration::{
    ADDITIONAL_ALT_PREFIX, ADDITIONAL_IMAGE_CLASS, FIRST_ADDITIONAL_SLOT, FIRST_HAND_SLOT,
    HAND_ALT_PREFIX, HAND_IMAGE_CLASS, PLACEHOLDER_PREFIX, PLACEHOLDER_SUFFIX, TOTAL_SLOTS,
};

/// Group a slot belongs to, deciding which image subset feeds it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotGroup {
    /// Slots 1–12, filled from `/hand/` images
    Hand,
    /// Slots 13–24, filled from collection, polka and inspiration images
    Additional,
}

impl SlotGroup {
    /// Number of the first slot in this group
    pub const fn first_slot(self) -> usize {
        match self {
            Self::Hand => FIRST_HAND_SLOT,
            Self::Additional => FIRST_ADDITIONAL_SLOT,
        }
    }

    /// Alt text prefix, completed by the slot number
    pub const fn alt_prefix(self) -> &'static str {
        match self {
            Self::Hand => HAND_ALT_PREFIX,
            Self::Additional => ADDITIONAL_ALT_PREFIX,
        }
    }

    /// Style class of generated image tags
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Hand => HAND_IMAGE_CLASS,
            Self::Additional => ADDITIONAL_IMAGE_CLASS,
        }
    }
}

/// One of the 24 numbered placeholder positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot {
    number: usize,
}

impl Slot {
    /// Create a slot from its 1-based number, `None` outside 1..=24
    pub const fn new(number: usize) -> Option<Self> {
        if number >= FIRST_HAND_SLOT && number <= TOTAL_SLOTS {
            Some(Self { number })
        } else {
            None
        }
    }

    /// All slots in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (FIRST_HAND_SLOT..=TOTAL_SLOTS).map(|number| Self { number })
    }

    /// 1-based slot number as it appears in the placeholder
    pub const fn number(self) -> usize {
        self.number
    }

    /// Group this slot belongs to
    pub const fn group(self) -> SlotGroup {
        if self.number < FIRST_ADDITIONAL_SLOT {
            SlotGroup::Hand
        } else {
            SlotGroup::Additional
        }
    }

    /// Position of the image feeding this slot within its group's subset
    pub const fn subset_index(self) -> usize {
        self.number - self.group().first_slot()
    }

    /// Exact placeholder text this slot replaces
    pub fn placeholder(self) -> String {
        format!("{PLACEHOLDER_PREFIX}{}{PLACEHOLDER_SUFFIX}", self.number)
    }

    /// Image tag for `path`; the path is inserted verbatim
    pub fn image_tag(self, path: &str) -> String {
        let group = self.group();
        format!(
            r#"<img src="{path}" alt="{} {}" class="{}">"#,
            group.alt_prefix(),
            self.number,
            group.css_class()
        )
    }
}
