use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::Context;
use energy_predictor::{Dispatcher, ModelLoader, PredictorConfig, PredictorErr, Response};
use log::error;

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Serves the request on stdin and reports whether it succeeded.
fn run() -> anyhow::Result<bool> {
    let response = match PredictorConfig::from_install_dir() {
        Ok(config) => {
            let mut dispatcher = Dispatcher::new(ModelLoader::from_config(&config));
            dispatcher.serve(io::stdin().lock())
        }
        Err(e) => {
            error!("cannot locate the install directory: {e}");
            Response::failure(&PredictorErr::Io(e))
        }
    };

    emit(&response)?;
    Ok(response.is_success())
}

fn emit(response: &Response) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, response).context("failed to serialize response")?;
    writeln!(stdout).context("failed to write response")?;
    stdout.flush().context("failed to flush stdout")
}
