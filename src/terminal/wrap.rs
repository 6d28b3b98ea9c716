//! Line wrapping and reflow.
//!
//! Pure functions over glyph lines. A *physical* line is one screen row;
//! a *logical* line is the run of physical lines joined across soft wraps
//! (rows whose last cell carries [`Attrs::WRAP`]). Resizing joins the
//! physical rows back into logical lines and wraps them again at the new
//! width.

use super::types::{Attrs, Glyph, Line};

/// Split one logical line into physical lines of exactly `cols` cells.
///
/// Trailing unoccupied cells are trimmed first unless the last cell is
/// soft-wrapped, in which case every cell is significant. A blank line
/// still yields a single empty physical line. Double-width characters are
/// never split: if one would straddle the last column, that column is
/// filled with a pad cell and the character starts the next line.
pub fn wrap_line(line: &Line, cols: usize) -> Vec<Line> {
    wrap_logical(line, cols, 0)
}

/// Like [`wrap_line`], but never trims the line shorter than `min_len`
/// cells. Used to keep the cursor's line long enough to hold the cursor.
pub(crate) fn wrap_logical(line: &Line, cols: usize, min_len: usize) -> Vec<Line> {
    let cols = cols.max(1);
    let open_ended = line.is_wrapped();
    let length = if open_ended {
        line.len()
    } else {
        line.occupied_len().max(min_len)
    };

    if length == 0 {
        return vec![Line::blank(cols)];
    }

    let mut rows: Vec<Line> = Vec::new();
    let mut row: Vec<Glyph> = Vec::with_capacity(cols);
    let mut i = 0;

    while i < length {
        let mut glyph = line.get(i).copied().unwrap_or_default();
        i += 1;
        glyph.attrs.remove(Attrs::WRAP);

        if glyph.attrs.contains(Attrs::PAD) {
            continue;
        }

        // In a single column the spacer gets a row of its own, so joining
        // the rows again restores the two-cell glyph.
        if glyph.attrs.contains(Attrs::WIDE) && cols >= 2 && row.len() + 2 > cols {
            row.resize(cols, Glyph::pad());
            rows.push(std::mem::replace(&mut row, Vec::with_capacity(cols)).into());
        }

        row.push(glyph);
        if row.len() == cols {
            rows.push(std::mem::replace(&mut row, Vec::with_capacity(cols)).into());
        }
    }

    if !row.is_empty() {
        row.resize(cols, Glyph::default());
        rows.push(row.into());
    }

    if rows.is_empty() {
        return vec![Line::blank(cols)];
    }

    let last = rows.len() - 1;
    for (index, row) in rows.iter_mut().enumerate() {
        if index != last || open_ended {
            if let Some(cell) = row.last_mut() {
                cell.attrs.insert(Attrs::WRAP);
            }
        }
    }

    rows
}

/// Join soft-wrapped physical lines into logical lines.
///
/// Intermediate wrap markers and the pad cells that precede them are
/// dropped. The final input line keeps its wrap marker (if any), since
/// whatever it continued into is not part of the input.
pub fn join_lines(lines: &[Line]) -> Vec<Line> {
    let mut logical = Vec::new();
    let mut current: Option<Vec<Glyph>> = None;
    let last = lines.len().saturating_sub(1);

    for (row, line) in lines.iter().enumerate() {
        let mut segment: Vec<Glyph> = line.to_vec();

        if line.is_wrapped() && row != last {
            if let Some(cell) = segment.last_mut() {
                cell.attrs.remove(Attrs::WRAP);
            }
            while segment
                .last()
                .map(|g| g.attrs.contains(Attrs::PAD))
                .unwrap_or(false)
            {
                segment.pop();
            }
            current.get_or_insert_with(Vec::new).extend(segment);
            continue;
        }

        let mut whole = current.take().unwrap_or_default();
        whole.extend(segment);
        logical.push(Line::from(whole));
    }

    logical
}

/// Re-wrap a sequence of physical lines at a new width.
///
/// Output lines keep the order of the input's logical lines.
pub fn wrap_lines(lines: &[Line], cols: usize) -> Vec<Line> {
    join_lines(lines)
        .iter()
        .flat_map(|line| wrap_line(line, cols))
        .collect()
}

/// [`wrap_lines`] followed by removal of trailing blank lines.
///
/// Interior blank lines are kept.
pub fn reflow(lines: &[Line], cols: usize) -> Vec<Line> {
    let mut wrapped = wrap_lines(lines, cols);
    trim_trailing_blank(&mut wrapped, 0);
    wrapped
}

/// Drop blank lines from the end, never going below `keep` lines.
pub(crate) fn trim_trailing_blank(lines: &mut Vec<Line>, keep: usize) {
    while lines.len() > keep && lines.last().map(Line::is_blank).unwrap_or(false) {
        lines.pop();
    }
}
