//! Text command mapping from input lines to semantic commands
//!
//! Maps a line typed into the session to a high-level command. Shape buttons,
//! the slider and play/pause become [`Action`]s for the explorer; everything
//! else is a session command (snapshot, help, quit).

use std::fmt;

use flatland_core::Action;
use flatland_math::{Position, ShapeKind};

/// Commands produced by the mapper
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Forward a user action to the explorer
    Apply(Action),
    /// Write a numbered capture of the current frame
    Snapshot,
    /// Print the command summary
    Help,
    /// End the session
    Quit,
}

/// Summary printed for `help`
pub const HELP: &str = "\
Commands:
  sphere | cube | cone | torus   select a shape (or 1-4)
  pos <0..1> | <0..1>            move the shape along the axis (1 alone is a shape)
  play | pause | toggle | p      start or stop the sweep
  snap                           capture the current frame
  help | ?                       show this help
  quit | q                       leave";

/// Why a line could not be mapped
#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    /// The first word is not a known command
    Unknown(String),
    /// A position argument is missing or not a number
    InvalidNumber(String),
    /// A position outside [0, 1]
    OutOfRange(f32),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Unknown(word) => write!(f, "Unknown command '{}' (try 'help')", word),
            CommandError::InvalidNumber(text) => write!(f, "Not a position: '{}'", text),
            CommandError::OutOfRange(value) => {
                write!(f, "Position {} is outside [0, 1]", value)
            }
        }
    }
}

impl std::error::Error for CommandError {}

/// Maps input lines to commands
pub struct CommandMapper;

impl CommandMapper {
    /// Map one line of input
    ///
    /// Returns `Ok(None)` for blank lines and for requests that would not
    /// change anything (`play` while already playing, `pause` while paused).
    pub fn map_line(line: &str, animating: bool) -> Result<Option<Command>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Ok(None);
        };
        let keyword = first.to_ascii_lowercase();

        let command = match keyword.as_str() {
            "quit" | "q" | "exit" => Command::Quit,
            "help" | "?" => Command::Help,
            "snap" | "snapshot" => Command::Snapshot,
            "toggle" | "p" | "space" => Command::Apply(Action::ToggleAnimation),
            "play" => {
                if animating {
                    return Ok(None);
                }
                Command::Apply(Action::ToggleAnimation)
            }
            "pause" | "stop" => {
                if !animating {
                    return Ok(None);
                }
                Command::Apply(Action::ToggleAnimation)
            }
            "pos" | "position" => {
                let argument = words
                    .next()
                    .ok_or_else(|| CommandError::InvalidNumber(String::new()))?;
                Command::Apply(Action::SetPosition(Self::parse_position(argument)?))
            }
            other => {
                if let Ok(shape) = other.parse::<ShapeKind>() {
                    Command::Apply(Action::SelectShape(shape))
                } else if let Some(shape) = other.parse::<usize>().ok().and_then(ShapeKind::from_index) {
                    Command::Apply(Action::SelectShape(shape))
                } else if Self::looks_numeric(other) {
                    // Any other bare number moves the slider; 1-4 were taken above
                    Command::Apply(Action::SetPosition(Self::parse_position(other)?))
                } else {
                    return Err(CommandError::Unknown(first.to_string()));
                }
            }
        };
        Ok(Some(command))
    }

    fn looks_numeric(text: &str) -> bool {
        text.starts_with(|c: char| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'))
    }

    fn parse_position(text: &str) -> Result<Position, CommandError> {
        let value: f32 = text
            .parse()
            .map_err(|_| CommandError::InvalidNumber(text.to_string()))?;
        Position::try_new(value).ok_or(CommandError::OutOfRange(value))
    }
}
