use serde::{Deserialize, Serialize};

/// The specification for the `ActFn` enum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActFnSpec {
    Sigmoid { amp: f32 },
    Relu,
    Tanh,
    Identity,
}

/// The specification for the `Layer` enum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerSpec {
    Dense {
        dim: (usize, usize),
        #[serde(default)]
        act_fn: Option<ActFnSpec>,
    },
}

/// The specification for the `Model` trait.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelSpec {
    Sequential { layers: Vec<LayerSpec> },
}
