pub mod activations;
mod builder;
pub mod layers;
mod model;
mod sequential;

pub use builder::EstimatorBuilder;
pub use model::Model;
pub use sequential::Sequential;
