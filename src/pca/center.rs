use ndarray::{Array2, ArrayView2, Axis};

/// Subtracts each column's mean from the column, anchoring the dataset at
/// the origin.
pub(crate) fn center_columns(x: ArrayView2<f64>) -> Array2<f64> {
    let mean = x.mean_axis(Axis(0)).expect("Failed to compute mean");
    let mut centered = x.to_owned();
    for mut row in centered.rows_mut() {
        row -= &mean;
    }
    centered
}

/// Centers each observation against the running mean that includes it:
/// row `i` is reduced by `means[i + 1]`, the mean over rows `0..=i`. The
/// off-by-one is intentional; the amnesic formulation centers a row against
/// a mean that has already absorbed it.
pub(crate) fn center_rows(x: ArrayView2<f64>, means: ArrayView2<f64>) -> Array2<f64> {
    debug_assert_eq!(means.nrows(), x.nrows() + 1);
    let mut centered = x.to_owned();
    for (i, mut row) in centered.rows_mut().into_iter().enumerate() {
        row -= &means.row(i + 1);
    }
    centered
}
