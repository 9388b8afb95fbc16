//! Literal placeholder replacement over a whole document

use crate::substitution::filter::ImageSubsets;
use crate::substitution::slots::Slot;
use log::debug;

/// What a substitution pass changed in one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionReport {
    /// Slots with at least one placeholder occurrence replaced, ascending
    pub filled: Vec<Slot>,
    /// Slots whose subset had no image available, ascending
    pub unavailable: Vec<Slot>,
    /// Placeholder occurrences replaced across all slots
    pub occurrences: usize,
}

impl SubstitutionReport {
    /// Whether the pass left the document untouched
    pub const fn is_unchanged(&self) -> bool {
        self.occurrences == 0
    }
}

/// Substituted document together with its report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// Document text after all replacements
    pub html: String,
    /// Summary of the replacements performed
    pub report: SubstitutionReport,
}

/// Replace every slot placeholder that has an image available
///
/// Slots are processed in ascending order and every occurrence of a
/// placeholder is replaced. Slots without an image keep their placeholder.
pub fn substitute(html: &str, subsets: &ImageSubsets) -> Substitution {
    let mut document = html.to_owned();
    let mut report = SubstitutionReport::default();

    for slot in Slot::all() {
        let Some(path) = subsets.image_for(slot) else {
            report.unavailable.push(slot);
            continue;
        };

        let placeholder = slot.placeholder();
        let count = document.matches(placeholder.as_str()).count();
        if count == 0 {
            continue;
        }

        document = document.replace(&placeholder, &slot.image_tag(path));
        debug!("Slot {} -> {path} ({count} occurrence(s))", slot.number());
        report.filled.push(slot);
        report.occurrences += count;
    }

    Substitution {
        html: document,
        report,
    }
}
