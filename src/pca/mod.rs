use log::{debug, warn};
use ndarray::{Array1, Array2, ArrayView2};

use crate::error::CcipcaError;

mod center;
mod deflate;
mod estimate;
mod mean;

/// Builder for a candid covariance-free incremental PCA fit.
///
/// The only knob is the amnesic `decay` parameter `l`: 0 (the default) gives
/// the stationary, equal-weighted case; values between 2 and 4 are typical
/// for nonstationary sources. The range is the caller's responsibility and
/// is not validated.
pub struct CcipcaBuilder {
    decay: f64,
}

impl CcipcaBuilder {
    pub fn new() -> Self {
        CcipcaBuilder { decay: 0.0 }
    }

    pub fn decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    /// Runs the full pipeline over `x` (rows = observations in arrival
    /// order, columns = features) and returns the finished estimator.
    ///
    /// Fails with [`CcipcaError::InvalidShape`] when `x` has fewer than 2
    /// rows or no columns, and with [`CcipcaError::DegenerateDirection`]
    /// when a candidate vector collapses to zero norm; a dataset with fewer
    /// rows than columns exhausts its rank partway through and fails this
    /// way. No partial result is ever exposed.
    pub fn fit(self, x: ArrayView2<f64>) -> Result<Ccipca, CcipcaError> {
        Ccipca::fit(x, self.decay)
    }
}

impl Default for CcipcaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Candid covariance-free incremental PCA.
///
/// Estimates the eigenvectors and eigenvalues of the implicit covariance
/// structure of a dataset one axis at a time, folding observations in
/// arrival order instead of performing a batch eigendecomposition. The
/// covariance matrix is never materialized. Immutable once fitted; a fresh
/// computation requires a fresh [`CcipcaBuilder::fit`] call.
#[derive(Debug)]
pub struct Ccipca {
    decay: f64,
    eigenvectors: Array2<f64>,
    eigenvalues: Array1<f64>,
}

impl Ccipca {
    fn fit(x: ArrayView2<f64>, decay: f64) -> Result<Self, CcipcaError> {
        let (rows, cols) = x.dim();
        if rows < 2 || cols < 1 {
            return Err(CcipcaError::InvalidShape { rows, cols });
        }

        let centered = center::center_columns(x);
        let means = mean::prefix_means(centered.view());
        let mut residual = center::center_rows(centered.view(), means.view());

        let mut eigenvectors = Array2::zeros((cols, cols));
        let mut eigenvalues = Array1::zeros(cols);

        for axis in 0..cols {
            if axis > 0 {
                let found = eigenvectors.column(axis - 1).to_owned();
                residual = deflate::deflate(residual.view(), found.view());
            }
            let (direction, magnitude) = estimate::dominant_axis(residual.view(), decay, axis)?;
            debug!("axis {}: eigenvalue {:.6e}", axis, magnitude);
            eigenvectors.column_mut(axis).assign(&direction);
            eigenvalues[axis] = magnitude;
        }

        if decay == 0.0 {
            for axis in 1..cols {
                if eigenvalues[axis] > eigenvalues[axis - 1] * (1.0 + 1e-9) {
                    warn!(
                        "eigenvalue {} ({:.6e}) exceeds eigenvalue {} ({:.6e}) in stationary mode, estimate may be numerically unstable",
                        axis,
                        eigenvalues[axis],
                        axis - 1,
                        eigenvalues[axis - 1]
                    );
                }
            }
        }

        Ok(Ccipca {
            decay,
            eigenvectors,
            eigenvalues,
        })
    }

    /// The amnesic parameter this estimator was fitted with.
    pub fn decay(&self) -> f64 {
        self.decay
    }

    /// Estimated principal axes, one unit-norm column per feature, ordered
    /// by discovery (column 0 = first/dominant axis found).
    pub fn eigenvectors(&self) -> &Array2<f64> {
        &self.eigenvectors
    }

    /// Variance estimates, parallel to the eigenvector columns. Discovery
    /// order is not guaranteed to be globally descending when `decay != 0`.
    pub fn eigenvalues(&self) -> &Array1<f64> {
        &self.eigenvalues
    }

    /// Element-wise square root of the eigenvalues.
    pub fn standard_deviations(&self) -> Array1<f64> {
        self.eigenvalues.mapv(f64::sqrt)
    }

    /// Share of the total captured variance along each axis.
    pub fn explained_variance_ratio(&self) -> Array1<f64> {
        let total = self.eigenvalues.sum();
        self.eigenvalues.mapv(|v| v / total)
    }

    pub fn cumulative_explained_variance_ratio(&self) -> Array1<f64> {
        let ratios = self.explained_variance_ratio();
        let mut cumulative = Array1::zeros(ratios.len());
        let mut sum = 0.0;
        for (i, &ratio) in ratios.iter().enumerate() {
            sum += ratio;
            cumulative[i] = sum;
        }
        cumulative
    }
}
