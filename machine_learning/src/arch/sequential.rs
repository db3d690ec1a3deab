use ndarray::{Array2, ArrayView2};

use super::{Model, layers::Layer};
use crate::{MlErr, Result};

/// A sequential model: information flows forward through its layers, the output of each layer
/// being the input of the next.
#[derive(Clone, Debug)]
pub struct Sequential {
    layers: Vec<Layer>,
}

impl Sequential {
    /// Creates a new `Sequential`.
    ///
    /// # Arguments
    /// * `layers` - The layers the sequential is composed of.
    ///
    /// # Returns
    /// A new `Sequential` instance.
    pub fn new<I>(layers: I) -> Self
    where
        I: IntoIterator<Item = Layer>,
    {
        Self {
            layers: layers.into_iter().collect(),
        }
    }
}

impl Model for Sequential {
    fn size(&self) -> usize {
        self.layers
            .iter()
            .fold(0, |total, layer| total.saturating_add(layer.size()))
    }

    fn input_size(&self) -> usize {
        self.layers.first().map_or(0, |layer| layer.dim().0)
    }

    fn output_size(&self) -> usize {
        self.layers.last().map_or(0, |layer| layer.dim().1)
    }

    fn forward(&self, params: &[f32], x: ArrayView2<f32>) -> Result<Array2<f32>> {
        if params.len() != self.size() {
            return Err(MlErr::SizeMismatch {
                what: "model parameters",
                got: params.len(),
                expected: self.size(),
            });
        }

        let mut rest = params;
        let mut y = x.to_owned();

        for layer in &self.layers {
            let (front, back) = rest.split_at(layer.size());
            y = layer.forward(front, y.view())?;
            rest = back;
        }

        Ok(y)
    }
}
