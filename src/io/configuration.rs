//! Fixed file names, markup fragments and slot layout for the clock face

// Default file locations, resolved against the working directory
/// Image list read when no `--list` is given
pub const DEFAULT_IMAGE_LIST: &str = "image_list.txt";
/// HTML document rewritten when no target is given
pub const DEFAULT_DOCUMENT: &str = "index.html";
/// Extension of documents collected from a directory target
pub const HTML_EXTENSION: &str = "html";

// Slot layout
/// Number of slots in each slot group
pub const SLOTS_PER_GROUP: usize = 12;
/// Total number of placeholder slots
pub const TOTAL_SLOTS: usize = 2 * SLOTS_PER_GROUP;
/// First slot number of the hand group
pub const FIRST_HAND_SLOT: usize = 1;
/// First slot number of the additional group
pub const FIRST_ADDITIONAL_SLOT: usize = FIRST_HAND_SLOT + SLOTS_PER_GROUP;

// Substring markers; matched anywhere in the path, case-sensitive
/// Marker selecting images for the hand group
pub const HAND_MARKER: &str = "/hand/";
/// Markers selecting images for the additional group
pub const ADDITIONAL_MARKERS: [&str; 3] = ["/collection/", "/polka/", "inspo"];

// Markup. Placeholders must match byte for byte to be replaced
/// Opening part of a placeholder, followed by the slot number
pub const PLACEHOLDER_PREFIX: &str = r#"<div class="image-placeholder">IMG "#;
/// Closing part of a placeholder
pub const PLACEHOLDER_SUFFIX: &str = "</div>";
/// Alt text prefix for hand images
pub const HAND_ALT_PREFIX: &str = "Hand Image";
/// Alt text prefix for additional images
pub const ADDITIONAL_ALT_PREFIX: &str = "Additional Image";
/// Style class of hand images
pub const HAND_IMAGE_CLASS: &str = "clock-image";
/// Style class of additional images
pub const ADDITIONAL_IMAGE_CLASS: &str = "additional-clock-image";

// Reporting
/// Printed once a run has finished
pub const COMPLETION_MESSAGE: &str = "Images updated successfully!";
/// Template of the document progress bar
pub const PROGRESS_TEMPLATE: &str = "[{elapsed_precise}] Documents: [{bar:40.cyan/blue}] {pos}/{len} {msg}";
