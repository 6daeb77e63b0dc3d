/// Physical position of a character on a wrapped line. Both zero-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowCol {
    pub row: usize,
    pub col: usize,
}

/// Maps `offset` within the displayed line to its wrapped row and column.
/// The offset is clamped to `line_len` first.
///
/// # Panics
///
/// If `width` is zero.
pub fn row_col(offset: usize, line_len: usize, width: usize) -> RowCol {
    assert!(width > 0, "terminal width must be at least 1");
    let offset = offset.min(line_len);
    RowCol {
        row: offset / width,
        col: offset % width,
    }
}

/// Signed `(rows, cols)` to travel from `from` to `to`.
pub fn delta(from: usize, to: usize, width: usize) -> (isize, isize) {
    assert!(width > 0, "terminal width must be at least 1");
    delta_between(
        row_col(from, from, width),
        row_col(to, to, width),
    )
}

pub fn delta_between(from: RowCol, to: RowCol) -> (isize, isize) {
    (to.row as isize - from.row as isize,
     to.col as isize - from.col as isize)
}
