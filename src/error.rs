use std::{error::Error, fmt, io, path::PathBuf};

use machine_learning::MlErr;
use serde_json::Value;

use crate::features::FEATURE_NAMES;

/// The predictor's result type.
pub type Result<T> = std::result::Result<T, PredictorErr>;

/// Failures that abort a whole invocation.
#[derive(Debug)]
pub enum PredictorErr {
    ModelNotFound { path: PathBuf },
    ModelLoad { path: PathBuf, source: LoadErr },
    Io(io::Error),
    InvalidJson(serde_json::Error),
    InvalidFormat(&'static str),
    Prediction(PredictionErr),
}

/// Reasons an existing artifact couldn't be turned into an estimator.
#[derive(Debug)]
pub enum LoadErr {
    Io(io::Error),
    Decode(serde_json::Error),
    Model(MlErr),
    FeatureOrder { got: Vec<String> },
}

/// Reasons a single feature record couldn't be predicted.
#[derive(Debug)]
pub enum PredictionErr {
    NotARecord,
    NonNumeric { feature: &'static str, value: Value },
    Model(MlErr),
    EmptyOutput,
    NonFinite(f32),
}

impl fmt::Display for PredictorErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictorErr::ModelNotFound { path } => {
                write!(f, "model file not found: {}", path.display())
            }
            PredictorErr::ModelLoad { path, source } => {
                write!(f, "model loading failed ({}): {source}", path.display())
            }
            PredictorErr::Io(e) => write!(f, "io error: {e}"),
            PredictorErr::InvalidJson(e) => write!(f, "invalid JSON input: {e}"),
            PredictorErr::InvalidFormat(msg) => write!(f, "invalid format: {msg}"),
            PredictorErr::Prediction(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for LoadErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadErr::Io(e) => write!(f, "io error: {e}"),
            LoadErr::Decode(e) => write!(f, "malformed artifact: {e}"),
            LoadErr::Model(e) => write!(f, "invalid model: {e}"),
            LoadErr::FeatureOrder { got } => {
                write!(
                    f,
                    "artifact expects features {got:?}, requests supply {FEATURE_NAMES:?}"
                )
            }
        }
    }
}

impl fmt::Display for PredictionErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "prediction failed: ")?;

        match self {
            PredictionErr::NotARecord => write!(f, "feature record must be a JSON object"),
            PredictionErr::NonNumeric { feature, value } => {
                write!(f, "feature '{feature}' is not a number: {value}")
            }
            PredictionErr::Model(e) => write!(f, "{e}"),
            PredictionErr::EmptyOutput => write!(f, "model produced no output"),
            PredictionErr::NonFinite(v) => write!(f, "model produced a non-finite output ({v})"),
        }
    }
}

impl Error for PredictorErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PredictorErr::ModelLoad { source, .. } => Some(source),
            PredictorErr::Io(e) => Some(e),
            PredictorErr::InvalidJson(e) => Some(e),
            PredictorErr::Prediction(e) => Some(e),
            _ => None,
        }
    }
}

impl Error for LoadErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadErr::Io(e) => Some(e),
            LoadErr::Decode(e) => Some(e),
            LoadErr::Model(e) => Some(e),
            LoadErr::FeatureOrder { .. } => None,
        }
    }
}

impl Error for PredictionErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PredictionErr::Model(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PredictorErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<PredictionErr> for PredictorErr {
    fn from(value: PredictionErr) -> Self {
        Self::Prediction(value)
    }
}

impl From<io::Error> for LoadErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for LoadErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

impl From<MlErr> for LoadErr {
    fn from(value: MlErr) -> Self {
        Self::Model(value)
    }
}

impl From<MlErr> for PredictionErr {
    fn from(value: MlErr) -> Self {
        Self::Model(value)
    }
}
