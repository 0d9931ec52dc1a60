//! Frame output system
//!
//! Writes rendered frames to the output directory. Live frames overwrite a
//! fixed set of `current_*` files so an SVG viewer can keep them open;
//! captures are numbered and never overwritten within a run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use flatland_core::ViewState;
use flatland_render::{Frame, SaveOptions};

use crate::config::OutputConfig;

/// File stem of the live frame
pub const LIVE_STEM: &str = "current";

/// Error writing frames
#[derive(Debug)]
pub enum FrameError {
    /// IO error on a path (directory missing, permission denied, disk full, ...)
    Io { path: PathBuf, source: io::Error },
}

impl std::fmt::Display for FrameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameError::Io { path, source } => {
                write!(f, "Failed to write frame to {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for FrameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FrameError::Io { source, .. } => Some(source),
        }
    }
}

/// Renders snapshots and writes them to disk
pub struct FrameSink {
    directory: PathBuf,
    options: SaveOptions,
    captures: u32,
    live_writes: u64,
}

impl FrameSink {
    /// Create a sink writing into `directory`, creating it if needed
    pub fn new<P: AsRef<Path>>(directory: P, options: SaveOptions) -> Result<Self, FrameError> {
        let directory = directory.as_ref().to_path_buf();
        fs::create_dir_all(&directory).map_err(|source| FrameError::Io {
            path: directory.clone(),
            source,
        })?;
        log::info!("Writing frames to {}", directory.display());

        Ok(Self {
            directory,
            options,
            captures: 0,
            live_writes: 0,
        })
    }

    /// Create a sink from the output section of the configuration
    pub fn from_config(config: &OutputConfig) -> Result<Self, FrameError> {
        Self::new(&config.directory, config.save_options())
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Number of numbered captures written so far
    pub fn captures(&self) -> u32 {
        self.captures
    }

    /// Number of live frame rewrites so far
    pub fn live_writes(&self) -> u64 {
        self.live_writes
    }

    /// Overwrite the live frame with `state`
    pub fn write_live(&mut self, state: &ViewState) -> Result<(), FrameError> {
        self.write(state, LIVE_STEM)?;
        self.live_writes += 1;
        Ok(())
    }

    /// Write a numbered capture `<prefix>_NNNN_*`; returns the files written
    pub fn capture(&mut self, state: &ViewState, prefix: &str) -> Result<Vec<PathBuf>, FrameError> {
        self.captures += 1;
        let stem = format!("{}_{:04}", prefix, self.captures);
        let written = self.write(state, &stem)?;
        log::info!("Captured frame {} ({} at {})", stem, state.shape, state.position);
        Ok(written)
    }

    fn write(&self, state: &ViewState, stem: &str) -> Result<Vec<PathBuf>, FrameError> {
        Frame::render(state)
            .save(&self.directory, stem, self.options)
            .map_err(|source| FrameError::Io {
                path: self.directory.join(stem),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flatland_math::{Position, ShapeKind};

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        let sink = FrameSink::new(&nested, SaveOptions::default()).unwrap();
        assert!(nested.is_dir());
        assert_eq!(sink.directory(), nested.as_path());
    }

    #[test]
    fn test_live_frame_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FrameSink::new(dir.path(), SaveOptions::default()).unwrap();

        sink.write_live(&ViewState::default()).unwrap();
        let state = ViewState {
            shape: ShapeKind::Cube,
            position: Position::new(0.5),
            ..ViewState::default()
        };
        sink.write_live(&state).unwrap();

        assert_eq!(sink.live_writes(), 2);
        let contents = fs::read_to_string(dir.path().join("current_flatland.svg")).unwrap();
        assert!(contents.contains("section cube"));
    }

    #[test]
    fn test_captures_are_numbered() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FrameSink::new(
            dir.path(),
            SaveOptions { per_view: false, composite: true },
        )
        .unwrap();

        sink.capture(&ViewState::default(), "demo").unwrap();
        let written = sink.capture(&ViewState::default(), "demo").unwrap();

        assert_eq!(sink.captures(), 2);
        assert_eq!(written, vec![dir.path().join("demo_0002_composite.svg")]);
        assert!(dir.path().join("demo_0001_composite.svg").exists());
    }

    #[test]
    fn test_error_display_names_path() {
        let err = FrameError::Io {
            path: PathBuf::from("out/current"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("out/current"));
        assert!(msg.contains("denied"));
    }
}
