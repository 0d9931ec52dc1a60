//! Application-level error type
//!
//! Unifies the errors of the host layers so `main` can report any of them.
//! Bad command text is not here: it is logged and the session carries on.

use std::io;

use flatland_core::{ScriptError, SweepConfigError};

use crate::config::ConfigError;
use crate::systems::FrameError;

/// Unified error type for running the viewer
#[derive(Debug)]
pub enum AppError {
    /// Configuration could not be loaded
    Config(ConfigError),
    /// Animation settings do not form a valid sweep
    Sweep(SweepConfigError),
    /// A session script could not be loaded
    Script(ScriptError),
    /// Frames could not be written
    Frame(FrameError),
    /// Other IO error (stdin, stdout)
    Io(io::Error),
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}

impl From<SweepConfigError> for AppError {
    fn from(e: SweepConfigError) -> Self {
        AppError::Sweep(e)
    }
}

impl From<ScriptError> for AppError {
    fn from(e: ScriptError) -> Self {
        AppError::Script(e)
    }
}

impl From<FrameError> for AppError {
    fn from(e: FrameError) -> Self {
        AppError::Frame(e)
    }
}

impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        AppError::Io(e)
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "{}", e),
            AppError::Sweep(e) => write!(f, "Invalid animation settings: {}", e),
            AppError::Script(e) => write!(f, "{}", e),
            AppError::Frame(e) => write!(f, "{}", e),
            AppError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(e) => Some(e),
            AppError::Sweep(e) => Some(e),
            AppError::Script(e) => Some(e),
            AppError::Frame(e) => Some(e),
            AppError::Io(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_sweep_error_display() {
        let err: AppError = SweepConfigError::ZeroInterval.into();
        assert!(err.to_string().starts_with("Invalid animation settings"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_io_error() {
        let err: AppError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, AppError::Io(_)));
        assert!(err.to_string().contains("closed"));
    }
}
