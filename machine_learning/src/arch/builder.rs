use super::{Model, Sequential, activations::ActFn, layers::Layer};
use crate::{
    MlErr, Result,
    estimator::Estimator,
    specs::{ActFnSpec, LayerSpec, ModelSpec},
};

/// Builds `Estimator`s given a specification and its trained parameters.
#[derive(Default)]
pub struct EstimatorBuilder;

impl EstimatorBuilder {
    /// Creates a new `EstimatorBuilder`.
    pub fn new() -> Self {
        Self
    }

    /// Builds a new `Estimator` following a spec.
    ///
    /// # Arguments
    /// * `spec` - The specification for the model.
    /// * `params` - The trained parameters of the model.
    ///
    /// # Returns
    /// A new `Estimator` or an error if the spec is invalid or the parameters don't fit it.
    pub fn build(&self, spec: &ModelSpec, params: Vec<f32>) -> Result<Estimator> {
        self.validate_model(spec)?;

        let model = self.resolve_model(spec);
        Estimator::new(model, params)
    }

    fn validate_model(&self, spec: &ModelSpec) -> Result<()> {
        let ModelSpec::Sequential { layers } = spec;

        if layers.is_empty() {
            return Err(MlErr::EmptyModel);
        }

        // Every layer holds (n + 1) * m parameters and the whole model must be addressable
        let mut total: usize = 0;
        for (i, LayerSpec::Dense { dim: (n, m), .. }) in layers.iter().enumerate() {
            total = n
                .checked_add(1)
                .and_then(|n| n.checked_mul(*m))
                .and_then(|size| total.checked_add(size))
                .ok_or(MlErr::ModelTooLarge { layer: i })?;
        }

        // Adjacent layers must have compatible dimensions: prev.m == next.n
        for (i, pair) in layers.windows(2).enumerate() {
            let LayerSpec::Dense { dim: (_, prev_m), .. } = pair[0];
            let LayerSpec::Dense { dim: (curr_n, _), .. } = pair[1];

            if prev_m != curr_n {
                return Err(MlErr::LayerDimMismatch {
                    layer: i + 1,
                    got: curr_n,
                    expected: prev_m,
                });
            }
        }

        Ok(())
    }

    fn resolve_model(&self, spec: &ModelSpec) -> Box<dyn Model> {
        match spec {
            ModelSpec::Sequential {
                layers: layer_specs,
            } => {
                let layers = layer_specs.iter().map(|ls| self.resolve_layer(*ls));
                Box::new(Sequential::new(layers))
            }
        }
    }

    fn resolve_layer(&self, spec: LayerSpec) -> Layer {
        match spec {
            LayerSpec::Dense { dim, act_fn } => Layer::dense(dim, self.resolve_act_fn(act_fn)),
        }
    }

    fn resolve_act_fn(&self, spec: Option<ActFnSpec>) -> Option<ActFn> {
        match spec? {
            ActFnSpec::Sigmoid { amp } => Some(ActFn::sigmoid(amp)),
            ActFnSpec::Relu => Some(ActFn::relu()),
            ActFnSpec::Tanh => Some(ActFn::tanh()),
            ActFnSpec::Identity => None,
        }
    }
}
