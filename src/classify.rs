//! Overlap classification of node spans against the selection
//!
//! Each flag is independent; a row shows the union of what it received.

use bitflags::bitflags;

use crate::model::{Selection, Span};

bitflags! {
    /// Visual state flags for one outline row
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct RowFlags: u8 {
        /// Some range covers the whole node
        const FULLY_COVERED = 1 << 0;
        /// A range boundary falls strictly inside the node
        const PARTIAL = 1 << 1;
        /// Some range's head sits exactly on the node's start
        const CURSOR_AT_START = 1 << 2;
    }
}

impl RowFlags {
    /// Style class names for the set flags, in a fixed order
    pub fn class_names(self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.contains(Self::FULLY_COVERED) {
            names.push("selected");
        }
        if self.contains(Self::PARTIAL) {
            names.push("partial");
        }
        if self.contains(Self::CURSOR_AT_START) {
            names.push("cursor");
        }
        names
    }
}

/// Classify a node span against every range of the selection
pub fn classify(span: Span, selection: &Selection) -> RowFlags {
    let mut flags = RowFlags::empty();

    for range in selection {
        let (from, to) = (range.from(), range.to());

        if from <= span.from && to >= span.to {
            flags |= RowFlags::FULLY_COVERED;
        }

        let from_inside = from > span.from && from < span.to;
        let to_inside = to > span.from && to < span.to;
        if from_inside || to_inside {
            flags |= RowFlags::PARTIAL;
        }

        if range.head == span.from {
            flags |= RowFlags::CURSOR_AT_START;
        }
    }

    flags
}
