//! Selection model - anchor/head ranges over character offsets

use super::tree::Span;

/// A selection range with anchor (start) and head (caret end)
///
/// Offsets are absolute character positions in the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SelectionRange {
    /// Where the selection started (fixed point)
    pub anchor: usize,
    /// Where the caret is (moving point)
    pub head: usize,
}

impl SelectionRange {
    /// Create an empty range (a caret) at an offset
    pub const fn caret(offset: usize) -> Self {
        Self {
            anchor: offset,
            head: offset,
        }
    }

    /// Create a range from anchor to head
    pub const fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Smaller end of the range
    pub fn from(&self) -> usize {
        self.anchor.min(self.head)
    }

    /// Larger end of the range
    pub fn to(&self) -> usize {
        self.anchor.max(self.head)
    }

    /// Check if the range is a bare caret
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// Check if the range is reversed (head before anchor)
    pub fn is_reversed(&self) -> bool {
        self.head < self.anchor
    }

    /// Normalized `[from, to)` span of this range
    pub fn span(&self) -> Span {
        Span::new(self.from(), self.to())
    }
}

/// An ordered, non-empty set of selection ranges
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selection {
    ranges: Vec<SelectionRange>,
}

impl Selection {
    /// Selection holding exactly one range
    pub fn single(range: SelectionRange) -> Self {
        Self {
            ranges: vec![range],
        }
    }

    /// A single caret at an offset
    pub fn caret(offset: usize) -> Self {
        Self::single(SelectionRange::caret(offset))
    }

    /// Build a selection from ranges, keeping their order.
    ///
    /// Returns `None` for an empty list: a selection always has at least one range.
    pub fn from_ranges(ranges: Vec<SelectionRange>) -> Option<Self> {
        if ranges.is_empty() {
            None
        } else {
            Some(Self { ranges })
        }
    }

    pub fn ranges(&self) -> &[SelectionRange] {
        &self.ranges
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SelectionRange> {
        self.ranges.iter()
    }

    /// First range in selection order
    pub fn primary(&self) -> SelectionRange {
        self.ranges[0]
    }

    /// Number of ranges, never zero
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::caret(0)
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a SelectionRange;
    type IntoIter = std::slice::Iter<'a, SelectionRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_normalizes_reversed() {
        let r = SelectionRange::new(12, 3);
        assert_eq!(r.from(), 3);
        assert_eq!(r.to(), 12);
        assert!(r.is_reversed());
        assert_eq!(r.span(), Span::new(3, 12));
    }

    #[test]
    fn test_caret_is_empty() {
        let r = SelectionRange::caret(5);
        assert!(r.is_empty());
        assert_eq!(r.from(), 5);
        assert_eq!(r.to(), 5);
    }

    #[test]
    fn test_selection_rejects_empty_list() {
        assert!(Selection::from_ranges(Vec::new()).is_none());
    }

    #[test]
    fn test_selection_keeps_order() {
        let sel = Selection::from_ranges(vec![
            SelectionRange::caret(9),
            SelectionRange::new(1, 2),
        ])
        .unwrap();
        assert_eq!(sel.len(), 2);
        assert_eq!(sel.primary(), SelectionRange::caret(9));
        assert_eq!(sel.ranges()[1], SelectionRange::new(1, 2));
    }
}
