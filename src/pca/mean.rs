use ndarray::{Array2, ArrayView2, Axis};

/// Running-mean sequence over the rows of a column-centered matrix.
///
/// Returns an `(n + 1) x d` matrix. Row 0 is the column mean of the input,
/// which anchors the sequence (near zero once the input has been
/// column-centered). Row `i` for i >= 1 follows the amnesic recurrence
/// `m[i] = m[i-1] * i/(i+1) + x[i-1] / i`, so it reflects the observations
/// seen up to and including row `i - 1`.
pub(crate) fn prefix_means(x: ArrayView2<f64>) -> Array2<f64> {
    let (n, d) = x.dim();
    let anchor = x.mean_axis(Axis(0)).expect("Failed to compute mean");

    let mut means = Array2::zeros((n + 1, d));
    means.row_mut(0).assign(&anchor);
    for i in 1..=n {
        let keep = i as f64 / (i as f64 + 1.0);
        let blend = 1.0 / i as f64;
        let next = means.row(i - 1).mapv(|m| m * keep) + x.row(i - 1).mapv(|v| v * blend);
        means.row_mut(i).assign(&next);
    }
    means
}
