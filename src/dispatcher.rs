use std::io::Read;

use log::{debug, error, info, warn};
use machine_learning::Estimator;
use serde_json::Value;

use crate::{
    envelope::{BatchItem, Request, Response},
    error::Result,
    loader::ModelLoader,
    predictor,
};

/// Serves one request per call against the loader's estimator.
#[derive(Debug)]
pub struct Dispatcher {
    loader: ModelLoader,
}

impl Dispatcher {
    /// Creates a new `Dispatcher`.
    ///
    /// # Arguments
    /// * `loader` - The owner of the estimator, loaded on the first request.
    pub fn new(loader: ModelLoader) -> Self {
        Self { loader }
    }

    /// Returns the loader, e.g. to check whether the estimator is cached.
    pub fn loader(&self) -> &ModelLoader {
        &self.loader
    }

    /// Loads the estimator, reads a whole request from `input` and answers it.
    ///
    /// Fatal failures are turned into an error response, so the returned document is always
    /// ready to be written out.
    pub fn serve<R: Read>(&mut self, input: R) -> Response {
        self.try_serve(input).unwrap_or_else(|e| {
            error!("{e}");
            Response::failure(&e)
        })
    }

    /// Answers an already read request document.
    pub fn serve_str(&mut self, input: &str) -> Response {
        self.serve(input.as_bytes())
    }

    fn try_serve<R: Read>(&mut self, mut input: R) -> Result<Response> {
        let estimator = self.loader.load()?;

        let mut document = String::new();
        input.read_to_string(&mut document)?;

        match Request::parse(&document)? {
            Request::Single(record) => {
                debug!("single prediction");
                let energy = predictor::predict(&estimator, &record)?;
                Ok(Response::energy(energy))
            }
            Request::Batch(records) => {
                debug!(items = records.len(); "batch prediction");
                let response = Self::predict_batch(&estimator, records);
                if let Some(summary) = response.summary() {
                    info!(
                        total = summary.total,
                        succeeded = summary.succeeded,
                        failed = summary.failed;
                        "batch finished"
                    );
                }
                Ok(response)
            }
        }
    }

    fn predict_batch(estimator: &Estimator, records: Vec<Value>) -> Response {
        let results = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| match predictor::predict(estimator, &record) {
                Ok(energy) => BatchItem::energy(energy, record),
                Err(e) => {
                    warn!(item = i; "{e}");
                    BatchItem::failure(&e, record)
                }
            })
            .collect();

        Response::batch(results)
    }
}
