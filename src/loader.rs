use std::{
    fs::File,
    io::BufReader,
    path::PathBuf,
    sync::Arc,
};

use log::{debug, info};
use machine_learning::Estimator;

use crate::{
    artifact::ModelArtifact,
    config::PredictorConfig,
    error::{LoadErr, PredictorErr, Result},
};

/// Owns the estimator for the lifetime of the process.
///
/// The artifact is read lazily on the first call to [`ModelLoader::load`]; every later call hands
/// out the same estimator without touching the disk.
#[derive(Debug)]
pub struct ModelLoader {
    path: PathBuf,
    model: Option<Arc<Estimator>>,
}

impl ModelLoader {
    /// Creates a new loader for the artifact at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            model: None,
        }
    }

    /// Creates a new loader for the artifact configured in `config`.
    pub fn from_config(config: &PredictorConfig) -> Self {
        Self::new(config.model_path())
    }

    /// Returns whether the estimator has already been loaded.
    pub fn is_loaded(&self) -> bool {
        self.model.is_some()
    }

    /// Returns the estimator, reading it from disk if this is the first call.
    ///
    /// # Returns
    /// The cached estimator or an error if the artifact is missing or can't be decoded.
    pub fn load(&mut self) -> Result<Arc<Estimator>> {
        if let Some(model) = &self.model {
            debug!("model cache hit");
            return Ok(Arc::clone(model));
        }

        let model = Arc::new(self.read()?);
        self.model = Some(Arc::clone(&model));
        Ok(model)
    }

    fn read(&self) -> Result<Estimator> {
        if !self.path.exists() {
            return Err(PredictorErr::ModelNotFound {
                path: self.path.clone(),
            });
        }

        info!("loading model from {}", self.path.display());
        let decode = || -> std::result::Result<(Option<String>, Estimator), LoadErr> {
            let reader = BufReader::new(File::open(&self.path)?);
            let artifact = ModelArtifact::from_reader(reader)?;
            let name = artifact.name.clone();
            Ok((name, artifact.into_estimator()?))
        };

        let (name, estimator) = decode().map_err(|source| PredictorErr::ModelLoad {
            path: self.path.clone(),
            source,
        })?;

        info!(
            model = name.as_deref().unwrap_or("unnamed"),
            inputs = estimator.input_size(),
            outputs = estimator.output_size();
            "model loaded"
        );
        Ok(estimator)
    }
}
