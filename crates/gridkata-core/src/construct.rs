//! Grid construction via two distinct fill primitives.
//!
//! Both constructors produce the same all-ones grid when `filled_grid` is
//! given `T::one()`; the exercise demonstrates that the dedicated ones-fill
//! and the general constant-fill agree in shape, element type, and values.

use ndarray::Array2;
use num_traits::One;

/// Build a `rows` x `cols` grid filled with ones.
pub fn ones_grid<T>(rows: usize, cols: usize) -> Array2<T>
where
    T: Clone + One,
{
    Array2::ones((rows, cols))
}

/// Build a `rows` x `cols` grid where every element is `value`.
pub fn filled_grid<T>(rows: usize, cols: usize, value: T) -> Array2<T>
where
    T: Clone,
{
    Array2::from_elem((rows, cols), value)
}
