//! Energy consumption predictions for LLM interactions, served over stdin/stdout as JSON.
//!
//! A request carries either one feature record (`{"features": {...}}`) or a batch of them
//! (`{"batch": [...]}`). Each record is laid out in the order the estimator was trained on,
//! fed to the estimator and the predicted energy, in Joules, is floored at zero.

pub mod artifact;
pub mod config;
pub mod dispatcher;
pub mod envelope;
pub mod error;
pub mod features;
pub mod loader;
pub mod predictor;

pub use config::PredictorConfig;
pub use dispatcher::Dispatcher;
pub use envelope::{Request, Response};
pub use error::{PredictorErr, Result};
pub use loader::ModelLoader;
