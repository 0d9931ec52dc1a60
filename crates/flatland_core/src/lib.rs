//! Core types for the Flatland viewer
//!
//! This crate owns everything that changes over time:
//!
//! - [`Explorer`] - The interaction/animation state machine
//! - [`ViewState`] - Read-only snapshot handed to renderers
//! - [`Action`] - Discrete user input (shape buttons, slider, play/pause)
//! - [`SweepConfig`] - The back-and-forth autoplay rule
//! - [`Scheduler`] - Cancellable periodic ticks ([`IntervalScheduler`], [`ManualScheduler`])
//! - [`Script`] - Replayable RON session scripts

mod action;
mod explorer;
pub mod scheduler;
pub mod script;
pub mod sweep;

pub use action::Action;
pub use explorer::{Explorer, ViewState};
pub use scheduler::{IntervalScheduler, ManualScheduler, Scheduler, TickHandle};
pub use script::{Script, ScriptError, ScriptStep};
pub use sweep::{Direction, SweepConfig, SweepConfigError};

// Re-export commonly used types from flatland_math for convenience
pub use flatland_math::{project, CrossSection, PlaneRelation, Position, ShapeKind};
