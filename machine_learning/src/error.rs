use std::{
    error::Error,
    fmt::{self, Display},
};

use ndarray::ShapeError;

/// The result type used in the entire machine learning module.
pub type Result<T> = std::result::Result<T, MlErr>;

/// The machine learning module's error type.
#[derive(Debug)]
pub enum MlErr {
    SizeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    LayerDimMismatch {
        layer: usize,
        got: usize,
        expected: usize,
    },
    EmptyModel,
    ModelTooLarge {
        layer: usize,
    },
    Shape(ShapeError),
}

impl Display for MlErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MlErr::SizeMismatch {
                what,
                got,
                expected,
            } => write!(
                f,
                "size mismatch in {what}: got {got}, expected {expected}"
            ),
            MlErr::LayerDimMismatch {
                layer,
                got,
                expected,
            } => write!(
                f,
                "layer {layer}: input size ({got}) does not match previous layer output size ({expected})"
            ),
            MlErr::EmptyModel => write!(f, "model must have at least one layer"),
            MlErr::ModelTooLarge { layer } => {
                write!(f, "layer {layer}: parameter count overflows")
            }
            MlErr::Shape(e) => write!(f, "shape error: {e}"),
        }
    }
}

impl Error for MlErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MlErr::Shape(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ShapeError> for MlErr {
    fn from(value: ShapeError) -> Self {
        Self::Shape(value)
    }
}
