use std::ops::Range;

use ndarray::{s, Array2};

use crate::error::DrillError;

/// Extract a rectangular block of `source` covering the given row and
/// column ranges, returned as an owned array.
///
/// The selection is a plain contiguous range slice; ranges that reach past
/// the source shape are rejected instead of panicking.
pub fn block<T>(
    source: &Array2<T>,
    rows: Range<usize>,
    cols: Range<usize>,
) -> Result<Array2<T>, DrillError>
where
    T: Clone,
{
    if rows.end > source.nrows() || cols.end > source.ncols() {
        return Err(DrillError::BlockOutOfBounds {
            row_end: rows.end,
            col_end: cols.end,
            nrows: source.nrows(),
            ncols: source.ncols(),
        });
    }

    Ok(source.slice(s![rows, cols]).to_owned())
}
