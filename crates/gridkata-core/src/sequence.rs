use ndarray::{s, Array1};

use crate::error::DrillError;

/// Build `n` evenly spaced values from `start` to `stop`, both endpoints
/// included.
pub fn evenly_spaced(start: f64, stop: f64, n: usize) -> Array1<f64> {
    Array1::linspace(start, stop, n)
}

/// Overwrite every `stride`-th element of `seq` with `value`, starting at
/// index 0.
///
/// Positions 0, stride, 2*stride, ... are written; everything else is left
/// untouched. A stride of zero is rejected.
pub fn overwrite_strided(
    seq: &mut Array1<f64>,
    stride: usize,
    value: f64,
) -> Result<(), DrillError> {
    if stride == 0 {
        return Err(DrillError::ZeroStride);
    }

    let step = stride as isize;
    seq.slice_mut(s![..;step]).fill(value);
    Ok(())
}
