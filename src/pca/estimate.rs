use ndarray::{Array1, ArrayView2};

use crate::error::CcipcaError;

/// Amnesic power iteration over the rows of a residual matrix.
///
/// Folds the observations in arrival order into a single evolving candidate
/// vector. The fold is seeded with row 0; each step keeps the previous
/// candidate with weight `(n - decay)/(n + 1)` and absorbs the new
/// observation, scaled by its projection onto the current unit direction,
/// with weight `(1 + decay)/(n + 1)`. The covariance matrix is never
/// formed; only the candidate and the newest row are needed.
///
/// Returns the unit-length axis together with the candidate's norm before
/// normalization, which serves as the variance estimate along that axis.
///
/// A zero-norm candidate at any normalization point makes the next update
/// undefined and fails with [`CcipcaError::DegenerateDirection`].
pub(crate) fn dominant_axis(
    residual: ArrayView2<f64>,
    decay: f64,
    axis: usize,
) -> Result<(Array1<f64>, f64), CcipcaError> {
    let rows = residual.nrows();
    let mut v = residual.row(0).to_owned();

    for n in 1..rows {
        let norm = v.dot(&v).sqrt();
        if norm == 0.0 {
            return Err(CcipcaError::DegenerateDirection { axis, step: n });
        }
        let x = residual.row(n);
        let projection = v.dot(&x) / norm;

        let n_f = n as f64;
        let keep = (n_f - decay) / (n_f + 1.0);
        let absorb = (1.0 + decay) / (n_f + 1.0);
        v.zip_mut_with(&x, |vi, &xi| *vi = *vi * keep + xi * projection * absorb);
    }

    let norm = v.dot(&v).sqrt();
    if norm == 0.0 {
        return Err(CcipcaError::DegenerateDirection { axis, step: rows });
    }
    Ok((v.mapv(|vi| vi / norm), norm))
}
