//! Mapping of named feature records onto the estimator's input vector.

use serde_json::{Map, Value};

/// Amount of features the estimator consumes.
pub const FEATURE_COUNT: usize = 6;

/// Feature names in the order the estimator was trained on.
// NOTE: the order is fixed by the training run, not by the artifact. Change it only together with
// a regenerated model.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "total_duration",
    "prompt_token_length",
    "response_token_length",
    "response_duration",
    "word_count",
    "reading_time",
];

/// A feature record: feature name to value.
pub type FeatureRecord = Map<String, Value>;

/// Lays a feature record out in the estimator's order.
///
/// Missing features are `0`, unknown names are ignored and values are passed through as they
/// are, so non-numeric values only fail once they reach the estimator.
pub fn assemble(record: &FeatureRecord) -> [Value; FEATURE_COUNT] {
    FEATURE_NAMES.map(|name| record.get(name).cloned().unwrap_or_else(|| Value::from(0)))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: Value) -> FeatureRecord {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn assemble_follows_training_order() {
        let record = record(json!({
            "reading_time": 6,
            "word_count": 5,
            "response_duration": 4,
            "response_token_length": 3,
            "prompt_token_length": 2,
            "total_duration": 1,
        }));

        let values = assemble(&record);

        assert_eq!(values, [json!(1), json!(2), json!(3), json!(4), json!(5), json!(6)]);
    }

    #[test]
    fn assemble_fills_missing_with_zero() {
        let record = record(json!({ "total_duration": 10 }));

        let values = assemble(&record);

        assert_eq!(values[0], json!(10));
        assert!(values[1..].iter().all(|v| *v == json!(0)));
    }

    #[test]
    fn assemble_ignores_unknown_features() {
        let record = record(json!({ "word_count": 7, "temperature": 0.2 }));

        let values = assemble(&record);

        assert_eq!(values.len(), FEATURE_COUNT);
        assert_eq!(values[4], json!(7));
        assert!(!values.contains(&json!(0.2)));
    }

    #[test]
    fn assemble_keeps_non_numeric_values() {
        let record = record(json!({ "total_duration": "not-a-number" }));

        let values = assemble(&record);

        assert_eq!(values[0], json!("not-a-number"));
    }

    #[test]
    fn assemble_empty_record_is_all_zeros() {
        let values = assemble(&FeatureRecord::new());

        assert_eq!(values, [0; FEATURE_COUNT].map(Value::from));
    }
}
