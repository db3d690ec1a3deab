use std::{
    env, io,
    path::{Path, PathBuf},
};

/// Directory holding the trained artifacts, relative to the install root.
pub const MODEL_DIR: &str = "data&model";

/// File name of the trained estimator inside [`MODEL_DIR`].
pub const MODEL_FILE: &str = "MLPRegressorDeep_model.json";

/// Immutable settings for a predictor process.
#[derive(Debug, Clone)]
pub struct PredictorConfig {
    model_path: PathBuf,
}

impl PredictorConfig {
    /// Creates a new configuration pointing at an explicit model artifact.
    ///
    /// # Args
    /// * `model_path` - Location of the serialized estimator.
    ///
    /// # Returns
    /// A `PredictorConfig` instance.
    pub fn new(model_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
        }
    }

    /// Resolves the configuration from the location of the running executable.
    ///
    /// The install root is the parent of the directory holding the executable, so
    /// `<root>/bin/energy-predictor` reads `<root>/data&model/MLPRegressorDeep_model.json`.
    ///
    /// # Returns
    /// A `PredictorConfig` or an io error if the executable path can't be determined.
    pub fn from_install_dir() -> io::Result<Self> {
        let exe = env::current_exe()?;
        let root = install_root(&exe).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no install root above {}", exe.display()),
            )
        })?;

        Ok(Self::new(model_path_in(root)))
    }

    /// Returns the path of the model artifact.
    pub fn model_path(&self) -> &Path {
        &self.model_path
    }
}

fn install_root(exe: &Path) -> Option<&Path> {
    exe.parent()?.parent()
}

/// Returns the artifact location under an install root.
pub fn model_path_in(root: &Path) -> PathBuf {
    root.join(MODEL_DIR).join(MODEL_FILE)
}
