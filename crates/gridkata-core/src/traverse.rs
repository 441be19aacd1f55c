//! Two traversal entry points over a 3-D cube.
//!
//! `nested_order` walks the cube with an explicit loop per axis, outermost
//! axis first; `flat_order` takes a single linear pass over the flattened
//! logical view. Both visit every element exactly once in row-major order
//! (last index fastest), so they yield identical sequences over the same
//! cube.

use ndarray::Array3;

/// Build a zero-filled cube of shape `(side, side, side)`.
///
/// Stands in for the original "empty" cube: the traversal contract only
/// covers element count and visit order, never numeric content.
pub fn zeroed_cube(side: usize) -> Array3<f64> {
    Array3::zeros((side, side, side))
}

/// Build a cube where element `(i, j, k)` equals `i*side^2 + j*side + k`,
/// i.e. its own row-major visit position.
pub fn indexed_cube(side: usize) -> Array3<f64> {
    Array3::from_shape_fn((side, side, side), |(i, j, k)| {
        (i * side * side + j * side + k) as f64
    })
}

/// Collect every element via one explicit loop per axis.
pub fn nested_order<T>(cube: &Array3<T>) -> Vec<T>
where
    T: Copy,
{
    let mut out = Vec::with_capacity(cube.len());
    for plane in cube.outer_iter() {
        for row in plane.outer_iter() {
            for &value in row.iter() {
                out.push(value);
            }
        }
    }
    out
}

/// Collect every element via a single pass over the flattened logical view.
pub fn flat_order<T>(cube: &Array3<T>) -> Vec<T>
where
    T: Copy,
{
    cube.iter().copied().collect()
}
