//! User actions the host delivers to the explorer

use flatland_math::{Position, ShapeKind};
use serde::{Deserialize, Serialize};

/// A discrete user input
///
/// These are the only ways the host can change the explorer's state.
/// Ticks are not actions; they come from the scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// A shape button was pressed
    SelectShape(ShapeKind),
    /// The position slider was moved
    SetPosition(Position),
    /// The play/pause button was pressed
    ToggleAnimation,
}
