//! Application systems
//!
//! Host-side systems that drive the explorer: frame output, the interactive
//! session and script playback.

mod frames;
mod script_runner;
mod session;

pub use frames::{FrameError, FrameSink, LIVE_STEM};
pub use script_runner::{ScriptReport, ScriptRunner};
pub use session::{InteractiveSession, SessionSummary};

use flatland_core::{Explorer, Scheduler, SweepConfigError};
use flatland_math::Position;

use crate::config::AppConfig;

/// Build an explorer with the configured sweep and initial view
pub fn explorer_from_config<S: Scheduler>(
    config: &AppConfig,
    scheduler: S,
) -> Result<Explorer<S>, SweepConfigError> {
    let sweep = config.animation.to_sweep_config()?;
    Ok(Explorer::new(scheduler, sweep)?
        .with_shape(config.view.initial_shape)
        .with_position(Position::new(config.view.initial_position)))
}
