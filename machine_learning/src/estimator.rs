use std::fmt;

use ndarray::{Array2, ArrayView2};

use crate::{MlErr, Result, arch::Model};

/// A trained model: an architecture together with the parameters it was fitted with.
pub struct Estimator {
    model: Box<dyn Model>,
    params: Vec<f32>,
}

impl Estimator {
    /// Creates a new `Estimator`.
    ///
    /// # Arguments
    /// * `model` - The model's architecture.
    /// * `params` - The trained parameters, exactly `model.size()` of them.
    ///
    /// # Returns
    /// A new `Estimator` or an error if the parameters don't fit the model.
    pub fn new(model: Box<dyn Model>, params: Vec<f32>) -> Result<Self> {
        if params.len() != model.size() {
            return Err(MlErr::SizeMismatch {
                what: "model parameters",
                got: params.len(),
                expected: model.size(),
            });
        }

        Ok(Self { model, params })
    }

    /// Returns the amount of features each sample must have.
    pub fn input_size(&self) -> usize {
        self.model.input_size()
    }

    /// Returns the amount of values predicted for each sample.
    pub fn output_size(&self) -> usize {
        self.model.output_size()
    }

    /// Predicts the outputs for a batch of samples.
    ///
    /// # Arguments
    /// * `x` - The input batch, one sample per row.
    ///
    /// # Returns
    /// One row of predictions per sample or an error if the input doesn't fit the model.
    pub fn predict(&self, x: ArrayView2<f32>) -> Result<Array2<f32>> {
        if x.ncols() != self.input_size() {
            return Err(MlErr::SizeMismatch {
                what: "input features",
                got: x.ncols(),
                expected: self.input_size(),
            });
        }

        self.model.forward(&self.params, x)
    }
}

impl fmt::Debug for Estimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Estimator")
            .field("input_size", &self.input_size())
            .field("output_size", &self.output_size())
            .field("params", &self.params.len())
            .finish()
    }
}
