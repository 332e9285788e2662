pub mod pca;
mod error;

pub use error::CcipcaError;
pub use pca::Ccipca;
pub use pca::CcipcaBuilder;
