use thiserror::Error;

#[derive(Error, Copy, Clone, Debug, PartialEq)]
pub enum CcipcaError {
    #[error("dataset must have at least 2 rows and 1 column, got {rows}x{cols}")]
    InvalidShape { rows: usize, cols: usize },

    #[error("candidate vector collapsed to zero norm while estimating axis {axis} at observation step {step}")]
    DegenerateDirection { axis: usize, step: usize },
}
