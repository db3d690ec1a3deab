use ndarray::{Array2, ArrayView2};

use super::Dense;
use crate::{Result, arch::activations::ActFn};

/// A layer of a sequential model.
#[derive(Clone, Debug)]
pub enum Layer {
    Dense(Dense),
}

impl Layer {
    pub fn dense(dim: (usize, usize), act_fn: Option<ActFn>) -> Self {
        Self::Dense(Dense::new(dim, act_fn))
    }

    /// Returns the amount of parameters of the layer.
    pub fn size(&self) -> usize {
        match self {
            Self::Dense(l) => l.size(),
        }
    }

    /// Returns the amount of inputs and outputs of the layer.
    pub fn dim(&self) -> (usize, usize) {
        match self {
            Self::Dense(l) => l.dim(),
        }
    }

    pub fn forward(&self, params: &[f32], x: ArrayView2<f32>) -> Result<Array2<f32>> {
        match self {
            Self::Dense(l) => l.forward(params, x),
        }
    }
}
