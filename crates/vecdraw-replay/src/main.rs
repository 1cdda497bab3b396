//! VecDraw replay driver
//!
//! Replays a scripted pointer session against a fresh canvas and prints the
//! resulting document as JSON.
//!
//! Usage: `vecdraw-replay <script.json> [--config <config.json>]`

mod script;

use script::{ReplayError, Script, replay};
use std::process::ExitCode;
use vecdraw_core::{Canvas, CanvasConfig, ConfigError};

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("usage: vecdraw-replay <script.json> [--config <config.json>]")]
    Usage,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Replay(#[from] ReplayError),
    #[error("Failed to encode document: {0}")]
    Output(#[from] serde_json::Error),
}

struct Args {
    script: String,
    config: Option<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, AppError> {
    let mut script = None;
    let mut config = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config = Some(args.next().ok_or(AppError::Usage)?),
            _ if script.is_none() => script = Some(arg),
            _ => return Err(AppError::Usage),
        }
    }
    Ok(Args {
        script: script.ok_or(AppError::Usage)?,
        config,
    })
}

fn run() -> Result<(), AppError> {
    let args = parse_args(std::env::args().skip(1))?;
    let config = match &args.config {
        Some(path) => CanvasConfig::load(path)?,
        None => CanvasConfig::default(),
    };
    let script = Script::load(&args.script)?;
    log::info!("Replaying {} steps from {}", script.steps.len(), args.script);

    let mut canvas = Canvas::with_config(config);
    replay(&script, &mut canvas)?;

    println!("{}", serde_json::to_string_pretty(&canvas.document())?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
