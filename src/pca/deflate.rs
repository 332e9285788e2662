use ndarray::{Array2, ArrayView1, ArrayView2};

/// Removes the component along `axis` from every row: `r' = r - (r . u) u`.
///
/// `axis` must be unit length. The result feeds the next estimation pass, so
/// successive axes are found in the subspace orthogonal to everything already
/// discovered. Under nonzero decay the recurrence itself is not an exact
/// Gram-Schmidt sweep; that is a property of the published algorithm and is
/// left as is.
pub(crate) fn deflate(residual: ArrayView2<f64>, axis: ArrayView1<f64>) -> Array2<f64> {
    let mut deflated = residual.to_owned();
    for mut row in deflated.rows_mut() {
        let weight = row.dot(&axis);
        row.zip_mut_with(&axis, |r, &u| *r -= weight * u);
    }
    deflated
}
