//! Position footer - one location line per selection range

use crate::model::{LineLookup, Selection, SelectionRange};

/// Human-readable location of a range's head: `line L, col C, pos P`
pub fn position_line(range: SelectionRange, lines: &impl LineLookup) -> String {
    let line = lines.line_at(range.head);
    let col = range.head - line.start + 1;
    format!("line {}, col {}, pos {}", line.number, col, range.head)
}

/// Footer lines for the whole selection, in selection order
pub fn position_footer(selection: &Selection, lines: &impl LineLookup) -> Vec<String> {
    selection
        .iter()
        .map(|range| position_line(*range, lines))
        .collect()
}
