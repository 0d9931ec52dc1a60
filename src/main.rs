//! Flatland - planar cross-section viewer
//!
//! With no arguments, reads commands from stdin and keeps the live frame in
//! the output directory up to date. With a path argument, plays that RON
//! script and writes its captures instead.

use std::io;
use std::path::Path;
use std::process::ExitCode;

use flatland::config::AppConfig;
use flatland::error::AppError;
use flatland::systems::{explorer_from_config, FrameSink, InteractiveSession, ScriptRunner};
use flatland_core::{IntervalScheduler, ManualScheduler, Script};

fn main() -> ExitCode {
    // Config first so its log level can seed the logger; report failure after
    let loaded = AppConfig::load();
    let log_level = match &loaded {
        Ok(config) => config.debug.log_level.clone(),
        Err(_) => AppConfig::default().debug.log_level,
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting Flatland");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let result = match std::env::args().nth(1) {
        Some(path) => run_script(&config, Path::new(&path)),
        None => run_interactive(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("flatland: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_interactive(config: &AppConfig) -> Result<(), AppError> {
    let explorer = explorer_from_config(config, IntervalScheduler::new())?;
    let sink = FrameSink::from_config(&config.output)?;
    let mut session = InteractiveSession::new(explorer, sink, io::stdout());

    let stdin = io::BufReader::new(io::stdin());
    session.run(stdin)?;
    Ok(())
}

fn run_script(config: &AppConfig, path: &Path) -> Result<(), AppError> {
    let script = Script::load(path)?;
    let explorer = explorer_from_config(config, ManualScheduler::new())?;
    let sink = FrameSink::from_config(&config.output)?;

    let report = ScriptRunner::new(explorer, sink).run(&script)?;
    println!(
        "{}: {} actions, {} ticks, {} captures, ended at {} ({})",
        script.name,
        report.actions,
        report.ticks,
        report.captures,
        report.final_state.position,
        report.final_state.shape
    );
    Ok(())
}
