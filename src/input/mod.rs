//! Input handling module
//!
//! Provides mapping from typed lines to semantic commands.

mod command_mapper;

pub use command_mapper::{Command, CommandError, CommandMapper, HELP};
