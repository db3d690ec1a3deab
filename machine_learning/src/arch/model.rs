use ndarray::{Array2, ArrayView2};

use crate::Result;

pub trait Model {
    /// Returns the amount of parameters in the model.
    fn size(&self) -> usize;

    /// Returns the amount of features each input sample must have.
    fn input_size(&self) -> usize;

    /// Returns the amount of values produced for each sample.
    fn output_size(&self) -> usize;

    /// Computes the model's output for a batch of samples.
    ///
    /// # Arguments
    /// * `params` - The model's parameters, exactly `self.size()` of them.
    /// * `x` - The input batch, one sample per row.
    ///
    /// # Returns
    /// The output batch, one row per sample, or an error if the input doesn't fit the model.
    fn forward(&self, params: &[f32], x: ArrayView2<f32>) -> Result<Array2<f32>>;
}
