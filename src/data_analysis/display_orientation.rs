// src/data_analysis/display_orientation.rs

// Matrices are stored with row 0 = far/sky and the last row = near/ground.
// Flipping happens only on the copy handed to the renderer.

use ndarray::{s, Array2};

/// Reverses the row axis of a matrix.
pub fn flip_rows(matrix: &Array2<f64>) -> Array2<f64> {
    matrix.slice(s![..;-1, ..]).to_owned()
}
