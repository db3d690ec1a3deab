pub mod arch;
pub mod error;
pub mod estimator;
pub mod specs;

pub use error::{MlErr, Result};
pub use estimator::Estimator;
