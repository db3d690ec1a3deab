use ndarray::{linalg, prelude::*};

use crate::{MlErr, Result, arch::activations::ActFn};

/// A fully connected layer computing `act_fn(x · W + b)`.
///
/// The layer doesn't own its parameters, they are handed to it on each forward pass as a flat
/// slice: the `(inputs, outputs)` weight matrix in row-major order followed by the `outputs`
/// biases.
#[derive(Clone, Debug)]
pub struct Dense {
    dim: (usize, usize),
    act_fn: Option<ActFn>,
    size: usize,
}

impl Dense {
    /// Creates a new `Dense` layer.
    ///
    /// # Arguments
    /// * `dim` - The amount of inputs and outputs of the layer.
    /// * `act_fn` - The activation applied to the outputs, `None` for the identity.
    ///
    /// # Returns
    /// A new `Dense` instance.
    pub fn new(dim: (usize, usize), act_fn: Option<ActFn>) -> Self {
        Self {
            dim,
            size: dim.0.saturating_add(1).saturating_mul(dim.1),
            act_fn,
        }
    }

    /// Returns the size of this layer.
    ///
    /// # Returns
    /// The amount of parameters this layer has.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the amount of inputs and outputs of this layer.
    pub fn dim(&self) -> (usize, usize) {
        self.dim
    }

    /// Makes a forward pass through the layer.
    ///
    /// # Arguments
    /// * `params` - The parameters of this layer, exactly `self.size()` of them.
    /// * `x` - The input batch, one sample per row.
    ///
    /// # Returns
    /// The output batch or an error if the input doesn't fit the layer.
    pub fn forward(&self, params: &[f32], x: ArrayView2<f32>) -> Result<Array2<f32>> {
        if x.ncols() != self.dim.0 {
            return Err(MlErr::SizeMismatch {
                what: "layer inputs",
                got: x.ncols(),
                expected: self.dim.0,
            });
        }

        let (w, b) = self.view_params(params)?;
        let mut z = Array2::zeros((x.nrows(), self.dim.1));
        linalg::general_mat_mul(1.0, &x, &w, 0.0, &mut z);
        z += &b;

        if let Some(act_fn) = &self.act_fn {
            z.mapv_inplace(|z| act_fn.f(z));
        }

        Ok(z)
    }

    /// Gives a view of the raw parameter slice as the weights and biases of this layer.
    ///
    /// # Arguments
    /// * `params` - A slice of parameters.
    ///
    /// # Returns
    /// A tuple containing the weights and biases.
    fn view_params<'a>(
        &self,
        params: &'a [f32],
    ) -> Result<(ArrayView2<'a, f32>, ArrayView1<'a, f32>)> {
        if params.len() != self.size {
            return Err(MlErr::SizeMismatch {
                what: "layer parameters",
                got: params.len(),
                expected: self.size,
            });
        }

        let w_size = self.size - self.dim.1;
        let weights = ArrayView2::from_shape(self.dim, &params[..w_size])?;
        let biases = ArrayView1::from_shape(self.dim.1, &params[w_size..])?;
        Ok((weights, biases))
    }
}
