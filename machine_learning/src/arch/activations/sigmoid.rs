use std::f32;

/// The logistic function scaled by `amp`.
#[derive(Clone, Debug, Default)]
pub struct Sigmoid {
    amp: f32,
}

impl Sigmoid {
    pub fn new(amp: f32) -> Self {
        Self { amp }
    }

    pub fn f(&self, z: f32) -> f32 {
        self.amp / (1. + (-z).exp())
    }
}
