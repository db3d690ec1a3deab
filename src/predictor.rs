use machine_learning::Estimator;
use ndarray::Array2;
use serde_json::Value;

use crate::{
    error::PredictionErr,
    features::{self, FEATURE_COUNT, FEATURE_NAMES},
};

/// Predicts the energy, in Joules, consumed by the interaction described by `record`.
///
/// # Arguments
/// * `estimator` - The trained estimator.
/// * `record` - A JSON object mapping feature names to numbers.
///
/// # Returns
/// The prediction floored at zero, or an error if the record can't be fed to the estimator.
pub fn predict(estimator: &Estimator, record: &Value) -> Result<f32, PredictionErr> {
    let Value::Object(record) = record else {
        return Err(PredictionErr::NotARecord);
    };

    let x = to_input(&features::assemble(record))?;
    let y = estimator.predict(x.view())?;
    let energy = y.iter().next().copied().ok_or(PredictionErr::EmptyOutput)?;

    clamp(energy)
}

/// Floors a raw model output at zero.
///
/// NaN and positive infinity have no JSON representation and are rejected.
pub fn clamp(energy: f32) -> Result<f32, PredictionErr> {
    if energy.is_nan() || energy == f32::INFINITY {
        return Err(PredictionErr::NonFinite(energy));
    }

    Ok(energy.max(0.))
}

/// Turns the assembled feature values into a single-sample input batch.
fn to_input(values: &[Value; FEATURE_COUNT]) -> Result<Array2<f32>, PredictionErr> {
    let mut x = Array2::zeros((1, FEATURE_COUNT));

    for ((slot, value), feature) in x.iter_mut().zip(values).zip(FEATURE_NAMES) {
        *slot = numeric(value).ok_or_else(|| PredictionErr::NonNumeric {
            feature,
            value: value.clone(),
        })?;
    }

    Ok(x)
}

/// Numbers pass through, booleans count as `1` and `0`.
fn numeric(value: &Value) -> Option<f32> {
    match value {
        Value::Bool(b) => Some(f32::from(u8::from(*b))),
        _ => value.as_f64().map(|v| v as f32),
    }
}
