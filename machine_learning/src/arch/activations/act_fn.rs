use super::{Relu, Sigmoid, Tanh};

/// The activation applied element-wise to the output of a layer.
#[derive(Clone, Debug)]
pub enum ActFn {
    Sigmoid(Sigmoid),
    Relu(Relu),
    Tanh(Tanh),
}

impl ActFn {
    pub fn sigmoid(amp: f32) -> Self {
        Self::Sigmoid(Sigmoid::new(amp))
    }

    pub fn relu() -> Self {
        Self::Relu(Relu)
    }

    pub fn tanh() -> Self {
        Self::Tanh(Tanh)
    }

    pub fn f(&self, x: f32) -> f32 {
        match self {
            Self::Sigmoid(a) => a.f(x),
            Self::Relu(a) => a.f(x),
            Self::Tanh(a) => a.f(x),
        }
    }
}
