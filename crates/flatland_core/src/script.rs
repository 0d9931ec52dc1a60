//! Session scripts
//!
//! A [`Script`] is a recorded sequence of user actions, waits and frame
//! captures stored as RON. Playing one back on a manual scheduler produces the
//! same frames every time, which makes scripts handy for demos and for
//! regression checks of the renderers.
//!
//! ```ron
//! Script(
//!     name: "torus sweep",
//!     steps: [
//!         SelectShape(torus),
//!         ToggleAnimation,
//!         Wait(25),
//!         Capture,
//!     ],
//! )
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use flatland_math::{Position, ShapeKind};

use crate::action::Action;

/// One step of a script
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ScriptStep {
    /// Press a shape button
    SelectShape(ShapeKind),
    /// Move the slider
    SetPosition(Position),
    /// Press play/pause
    ToggleAnimation,
    /// Let this many tick intervals pass
    Wait(u32),
    /// Write the current frame
    Capture,
}

impl ScriptStep {
    /// The user action this step performs, if it is one
    pub fn action(&self) -> Option<Action> {
        match *self {
            ScriptStep::SelectShape(shape) => Some(Action::SelectShape(shape)),
            ScriptStep::SetPosition(position) => Some(Action::SetPosition(position)),
            ScriptStep::ToggleAnimation => Some(Action::ToggleAnimation),
            ScriptStep::Wait(_) | ScriptStep::Capture => None,
        }
    }
}

/// A named, replayable sequence of steps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Script name (for logs and output file names)
    pub name: String,
    /// Steps, run in order
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

impl Script {
    /// Create an empty script
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    /// Append a step (builder style)
    pub fn then(mut self, step: ScriptStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Parse a script from RON text
    pub fn from_ron(text: &str) -> Result<Self, ScriptError> {
        Ok(ron::from_str(text)?)
    }

    /// Load a script from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScriptError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron(&contents)
    }

    /// Save a script to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ScriptError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Total number of tick intervals the script waits
    pub fn total_wait_ticks(&self) -> u64 {
        self.steps
            .iter()
            .map(|step| match step {
                ScriptStep::Wait(ticks) => u64::from(*ticks),
                _ => 0,
            })
            .sum()
    }

    /// Number of frames the script captures
    pub fn capture_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step, ScriptStep::Capture))
            .count()
    }
}

/// Error loading or saving a script
#[derive(Debug)]
pub enum ScriptError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax or unknown step)
    Parse(ron::error::SpannedError),
    /// Serialization error
    Serialize(ron::Error),
}

impl From<io::Error> for ScriptError {
    fn from(e: io::Error) -> Self {
        ScriptError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ScriptError {
    fn from(e: ron::error::SpannedError) -> Self {
        ScriptError::Parse(e)
    }
}

impl From<ron::Error> for ScriptError {
    fn from(e: ron::Error) -> Self {
        ScriptError::Serialize(e)
    }
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScriptError::Io(e) => write!(f, "Script IO error: {}", e),
            ScriptError::Parse(e) => write!(f, "Script parse error: {}", e),
            ScriptError::Serialize(e) => write!(f, "Script serialize error: {}", e),
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScriptError::Io(e) => Some(e),
            ScriptError::Parse(e) => Some(e),
            ScriptError::Serialize(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        Script(
            name: "torus sweep",
            steps: [
                SelectShape(torus),
                SetPosition(0.25),
                ToggleAnimation,
                Wait(25),
                Capture,
            ],
        )
    "#;

    #[test]
    fn test_parse_sample() {
        let script = Script::from_ron(SAMPLE).unwrap();
        assert_eq!(script.name, "torus sweep");
        assert_eq!(script.steps.len(), 5);
        assert_eq!(script.steps[0], ScriptStep::SelectShape(ShapeKind::Torus));
        assert_eq!(script.steps[1], ScriptStep::SetPosition(Position::new(0.25)));
        assert_eq!(script.total_wait_ticks(), 25);
        assert_eq!(script.capture_count(), 1);
    }

    #[test]
    fn test_out_of_range_position_is_clamped() {
        let script = Script::from_ron(r#"Script(name: "x", steps: [SetPosition(3.0)])"#).unwrap();
        assert_eq!(script.steps[0], ScriptStep::SetPosition(Position::MAX));
    }

    #[test]
    fn test_unknown_step_is_parse_error() {
        let err = Script::from_ron(r#"Script(name: "x", steps: [Jump])"#).unwrap_err();
        assert!(matches!(err, ScriptError::Parse(_)));
        assert!(err.to_string().contains("parse error"));
    }

    #[test]
    fn test_missing_steps_default_to_empty() {
        let script = Script::from_ron(r#"Script(name: "empty")"#).unwrap();
        assert!(script.steps.is_empty());
    }

    #[test]
    fn test_step_actions() {
        assert_eq!(
            ScriptStep::SelectShape(ShapeKind::Cube).action(),
            Some(Action::SelectShape(ShapeKind::Cube))
        );
        assert_eq!(ScriptStep::ToggleAnimation.action(), Some(Action::ToggleAnimation));
        assert_eq!(ScriptStep::Wait(3).action(), None);
        assert_eq!(ScriptStep::Capture.action(), None);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.ron");
        let script = Script::new("demo")
            .then(ScriptStep::SelectShape(ShapeKind::Cone))
            .then(ScriptStep::Wait(4))
            .then(ScriptStep::Capture);

        script.save(&path).unwrap();
        assert_eq!(Script::load(&path).unwrap(), script);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Script::load("does/not/exist.ron").unwrap_err();
        assert!(matches!(err, ScriptError::Io(_)));
    }
}
