//! Cursor translation across reflows.
//!
//! A cursor is mapped from a physical layout to a logical position
//! (logical line index plus cell offset into that line) and back into a
//! physical layout produced at another width. Both layouts must come from
//! the same logical lines.

use super::types::{Attrs, Cursor, CursorState, Line};
use super::wrap::join_lines;

/// A cell offset into a logical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalPos {
    pub line: usize,
    pub offset: usize,
}

/// Where a physical row sits inside its logical line.
#[derive(Debug, Clone, Copy)]
struct RowSpan {
    line: usize,
    start: usize,
    /// Cells contributed to the logical line (pad cells excluded).
    width: usize,
}

fn row_spans(physical: &[Line]) -> Vec<RowSpan> {
    let mut spans = Vec::with_capacity(physical.len());
    let mut line = 0;
    let mut start = 0;

    for row in physical {
        let pads = row
            .iter()
            .rev()
            .take_while(|g| g.attrs.contains(Attrs::PAD))
            .count();
        let width = row.len() - pads;
        spans.push(RowSpan { line, start, width });

        if row.is_wrapped() {
            start += width;
        } else {
            line += 1;
            start = 0;
        }
    }

    spans
}

/// Map a cursor on a physical layout to its logical position.
///
/// Returns `None` if the cursor row is outside the layout.
pub fn to_logical(physical: &[Line], cursor: &Cursor) -> Option<LogicalPos> {
    let span = row_spans(physical).get(cursor.y).copied()?;
    let x = cursor.x + usize::from(cursor.wrap_next());
    Some(LogicalPos {
        line: span.line,
        offset: span.start + x.min(span.width),
    })
}

/// Place a logical position onto a physical layout wrapped at `cols`.
///
/// An offset on an interior soft-wrap boundary lands at column 0 of the
/// following row. An offset just past a full final row lands on the last
/// column with wrap-pending set. Returns `None` if the logical line is not
/// part of the layout.
pub fn to_physical(physical: &[Line], pos: LogicalPos, cols: usize) -> Option<Cursor> {
    let cols = cols.max(1);
    let (y, span) = row_spans(physical)
        .into_iter()
        .enumerate()
        .filter(|(_, span)| span.line == pos.line && span.start <= pos.offset)
        .last()?;

    let col = pos.offset - span.start;
    let mut cursor = Cursor::new(col, y);
    if col >= cols {
        cursor.x = cols - 1;
        if col == cols {
            cursor.state.insert(CursorState::WRAP_NEXT);
        }
    }
    Some(cursor)
}

/// Compute the cursor's position in `new_physical` given its position in
/// `old_physical`.
///
/// A cursor beyond all recorded rows lands at the end of the last logical
/// line's content. The hidden bit of the input cursor is preserved.
pub fn translate_cursor(
    old_physical: &[Line],
    new_physical: &[Line],
    cursor: &Cursor,
    new_cols: usize,
) -> Cursor {
    let hidden = cursor.state & CursorState::HIDDEN;

    let placed = to_logical(old_physical, cursor)
        .and_then(|pos| to_physical(new_physical, pos, new_cols))
        .or_else(|| {
            let logical = join_lines(new_physical);
            let last = logical.len().checked_sub(1)?;
            let pos = LogicalPos {
                line: last,
                offset: logical[last].occupied_len(),
            };
            to_physical(new_physical, pos, new_cols)
        });

    let mut translated = placed.unwrap_or_default();
    translated.state |= hidden;
    translated
}
