//! Normalized position along the axis perpendicular to the plane

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a position lies relative to the plane
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaneRelation {
    Below,
    At,
    Above,
}

impl fmt::Display for PlaneRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlaneRelation::Below => "Below",
            PlaneRelation::At => "At",
            PlaneRelation::Above => "Above",
        };
        f.write_str(label)
    }
}

/// A position in `[0, 1]` along the hidden axis
///
/// `0.5` is the plane itself: a solid at that position is centered on the
/// plane. The value can never leave the unit interval; construction clamps.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct Position(f32);

impl Position {
    /// The plane's own location
    pub const PLANE: Self = Self(0.5);
    /// Lowest possible position
    pub const MIN: Self = Self(0.0);
    /// Highest possible position
    pub const MAX: Self = Self(1.0);

    /// Create a position, clamping into `[0, 1]`
    ///
    /// NaN maps to [`Position::PLANE`].
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::PLANE;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Create a position only if `value` already lies in `[0, 1]`
    pub fn try_new(value: f32) -> Option<Self> {
        (0.0..=1.0).contains(&value).then_some(Self(value))
    }

    /// Raw value in `[0, 1]`
    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Signed distance from the plane, in `[-0.5, 0.5]`
    #[inline]
    pub fn offset_from_plane(self) -> f32 {
        self.0 - Self::PLANE.0
    }

    /// Same position mirrored through the plane (`p -> 1 - p`)
    pub fn mirrored(self) -> Self {
        Self(1.0 - self.0)
    }

    /// Which side of the plane this position is on; exactly `0.5` is [`PlaneRelation::At`]
    pub fn relation(self) -> PlaneRelation {
        if self.0 < Self::PLANE.0 {
            PlaneRelation::Below
        } else if self.0 > Self::PLANE.0 {
            PlaneRelation::Above
        } else {
            PlaneRelation::At
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::PLANE
    }
}

impl From<f32> for Position {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<Position> for f32 {
    fn from(position: Position) -> Self {
        position.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
