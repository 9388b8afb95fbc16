//! Fills the numbered image placeholders of an HTML clock face from an image list
//!
//! Image paths are split into a hand subset (slots 1–12) and an additional
//! subset (slots 13–24) by substring markers, then every placeholder with an
//! image available is replaced by an `<img>` tag.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Slot layout, image filtering and placeholder replacement
pub mod substitution;

pub use io::error::{Result, SubstitutionError};
