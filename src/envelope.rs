//! JSON documents exchanged over stdin and stdout.

use serde::Serialize;
use serde_json::Value;

use crate::error::{PredictorErr, Result};

/// A parsed request.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// `{"features": {...}}`: one record, any failure is fatal.
    Single(Value),
    /// `{"batch": [{...}, ...]}`: records predicted independently.
    Batch(Vec<Value>),
}

impl Request {
    /// Parses a request document.
    ///
    /// When both `features` and `batch` are present, `features` wins.
    pub fn parse(input: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(input).map_err(PredictorErr::InvalidJson)?;

        let Value::Object(mut envelope) = document else {
            return Err(PredictorErr::InvalidFormat("request must be a JSON object"));
        };

        if let Some(features) = envelope.remove("features") {
            return Ok(Self::Single(features));
        }

        match envelope.remove("batch") {
            Some(Value::Array(items)) => Ok(Self::Batch(items)),
            Some(_) => Err(PredictorErr::InvalidFormat("'batch' must be an array")),
            None => Err(PredictorErr::InvalidFormat("'features' or 'batch' required")),
        }
    }
}

/// The single document written to stdout.
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    success: bool,
    #[serde(flatten)]
    body: ResponseBody,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
enum ResponseBody {
    Energy { energy: f32 },
    Batch { results: Vec<BatchItem>, summary: Summary },
    Error { error: String },
}

/// The outcome of one record of a batch, echoing the record it was computed from.
#[derive(Debug, Clone, Serialize)]
pub struct BatchItem {
    success: bool,
    #[serde(flatten)]
    outcome: ItemOutcome,
    input: Value,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
enum ItemOutcome {
    Energy { energy: f32 },
    Error { error: String },
}

/// Per-batch tally of item outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl Response {
    /// A successful single prediction.
    pub fn energy(energy: f32) -> Self {
        Self {
            success: true,
            body: ResponseBody::Energy { energy },
        }
    }

    /// A processed batch. The batch itself succeeds even if some of its items failed.
    pub fn batch(results: Vec<BatchItem>) -> Self {
        let succeeded = results.iter().filter(|item| item.is_success()).count();
        let summary = Summary {
            total: results.len(),
            succeeded,
            failed: results.len() - succeeded,
        };

        Self {
            success: true,
            body: ResponseBody::Batch { results, summary },
        }
    }

    /// A fatal failure of the whole invocation.
    pub fn failure(err: &PredictorErr) -> Self {
        Self {
            success: false,
            body: ResponseBody::Error {
                error: err.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Returns the batch tally, if this is a batch response.
    pub fn summary(&self) -> Option<Summary> {
        match &self.body {
            ResponseBody::Batch { summary, .. } => Some(*summary),
            _ => None,
        }
    }
}

impl BatchItem {
    /// A record that was predicted.
    pub fn energy(energy: f32, input: Value) -> Self {
        Self {
            success: true,
            outcome: ItemOutcome::Energy { energy },
            input,
        }
    }

    /// A record whose prediction failed.
    pub fn failure(err: &impl ToString, input: Value) -> Self {
        Self {
            success: false,
            outcome: ItemOutcome::Error {
                error: err.to_string(),
            },
            input,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_single_request() {
        let request = Request::parse(r#"{"features": {"total_duration": 10}}"#).unwrap();

        assert_eq!(request, Request::Single(json!({"total_duration": 10})));
    }

    #[test]
    fn parses_batch_request() {
        let request = Request::parse(r#"{"batch": [{"word_count": 1}, {}]}"#).unwrap();

        assert_eq!(
            request,
            Request::Batch(vec![json!({"word_count": 1}), json!({})])
        );
    }

    #[test]
    fn features_take_precedence_over_batch() {
        let request = Request::parse(r#"{"batch": [], "features": {}}"#).unwrap();

        assert_eq!(request, Request::Single(json!({})));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Request::parse("{features").unwrap_err();

        assert!(matches!(err, PredictorErr::InvalidJson(_)));
    }

    #[test]
    fn rejects_unknown_envelope() {
        let err = Request::parse(r#"{"foo": 1}"#).unwrap_err();

        assert!(matches!(err, PredictorErr::InvalidFormat(_)));
        assert!(err.to_string().contains("'features' or 'batch'"));
    }

    #[test]
    fn rejects_non_object_documents() {
        assert!(matches!(
            Request::parse("[1, 2]").unwrap_err(),
            PredictorErr::InvalidFormat(_)
        ));
        assert!(matches!(
            Request::parse(r#"{"batch": {"word_count": 1}}"#).unwrap_err(),
            PredictorErr::InvalidFormat(_)
        ));
    }

    #[test]
    fn serializes_energy_response() {
        let response = serde_json::to_value(Response::energy(1.5)).unwrap();

        assert_eq!(response, json!({"success": true, "energy": 1.5}));
    }

    #[test]
    fn serializes_failure_response() {
        let err = PredictorErr::InvalidFormat("'features' or 'batch' required");

        let response = serde_json::to_value(Response::failure(&err)).unwrap();

        assert_eq!(
            response,
            json!({
                "success": false,
                "error": "invalid format: 'features' or 'batch' required",
            })
        );
    }

    #[test]
    fn serializes_batch_response() {
        let response = Response::batch(vec![
            BatchItem::energy(2.0, json!({"total_duration": 5})),
            BatchItem::failure(&"prediction failed: boom", json!({"total_duration": "x"})),
        ]);

        assert_eq!(
            response.summary(),
            Some(Summary {
                total: 2,
                succeeded: 1,
                failed: 1
            })
        );
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({
                "success": true,
                "results": [
                    {"success": true, "energy": 2.0, "input": {"total_duration": 5}},
                    {
                        "success": false,
                        "error": "prediction failed: boom",
                        "input": {"total_duration": "x"},
                    },
                ],
                "summary": {"total": 2, "succeeded": 1, "failed": 1},
            })
        );
    }
}
