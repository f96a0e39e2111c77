//! Dense matrix helpers for assembling banded operators.

use crate::util::*;

/// Place `weights[k]` on the diagonal shifted by `offsets[k]`,
/// i.e. at entries `(i, i + offsets[k])`.
/// Diagonals that fall entirely outside the matrix contribute nothing,
/// shorter diagonals leave the rows near the boundary incomplete.
pub fn banded_matrix(
    offsets: &[i32],
    weights: &Weights,
    size: usize,
) -> OperatorMatrix {
    debug_assert_eq!(offsets.len(), weights.len());
    profiling::scope!("diagonal::banded_matrix");
    let mut result = OperatorMatrix::zeros(size, size);
    for (offset, weight) in offsets.iter().zip(weights.iter()) {
        add_shifted_diagonal(&mut result, *offset, *weight);
    }
    result
}

/// Add `value` along the diagonal shifted by `offset` columns.
pub fn add_shifted_diagonal(
    matrix: &mut OperatorMatrix,
    offset: i32,
    value: f64,
) {
    let size = matrix.nrows().min(matrix.ncols());
    let shift = offset.unsigned_abs() as usize;
    if shift >= size {
        return;
    }
    for i in 0..size - shift {
        if offset >= 0 {
            matrix[(i, i + shift)] += value;
        } else {
            matrix[(i + shift, i)] += value;
        }
    }
}

/// Replace each row by the sum of itself and all rows above it.
/// Same as left multiplying by the lower triangular matrix of ones,
/// without the cubic cost.
pub fn accumulate_rows(matrix: &mut OperatorMatrix) {
    profiling::scope!("diagonal::accumulate_rows");
    for i in 1..matrix.nrows() {
        let previous = matrix.row(i - 1).clone_owned();
        let mut row = matrix.row_mut(i);
        row += previous;
    }
}
