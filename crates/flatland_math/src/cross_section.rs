//! Cross-sections of the solids as seen from inside the plane
//!
//! [`project`] is the only place that knows how each solid meets the plane.
//! It is pure and total: every (shape, position) pair yields a section, and
//! sizes are never negative or NaN. Values are in display units for a
//! 300x300 panel centered on the origin.

use crate::{Position, ShapeKind};
use std::f32::consts::PI;

/// Scale applied to the unit-size sphere, cube and cone sections
pub const DISPLAY_SCALE: f32 = 70.0;

/// Separation of the two tube circles when the torus is centered on the plane
pub const TORUS_MAX_SEPARATION: f32 = 80.0;

/// Radius of each tube circle of the torus section
pub const TORUS_TUBE_RADIUS: f32 = 20.0;

/// Distance from the plane beyond which the torus no longer meets it
pub const TORUS_HALF_EXTENT: f32 = 0.4;

/// The 2D shape the plane cuts out of a solid
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CrossSection {
    /// A filled circle centered on the origin
    Disc { radius: f32 },
    /// An axis-aligned square centered on the origin
    Square { size: f32 },
    /// Two circles side by side, centers `distance` apart on the x axis
    TubePair { distance: f32, radius: f32 },
    /// The solid does not meet the plane
    Hidden,
}

impl CrossSection {
    /// Whether there is anything to draw
    ///
    /// A section with a zero-sized parameter is treated like [`CrossSection::Hidden`].
    pub fn is_visible(&self) -> bool {
        match *self {
            CrossSection::Disc { radius } => radius > 0.0,
            CrossSection::Square { size } => size > 0.0,
            CrossSection::TubePair { radius, .. } => radius > 0.0,
            CrossSection::Hidden => false,
        }
    }
}

/// Map a shape at a position to the cross-section seen in the plane
pub fn project(shape: ShapeKind, position: Position) -> CrossSection {
    let p = position.value();
    match shape {
        ShapeKind::Sphere => CrossSection::Disc {
            radius: sanitize((PI * p).sin() * DISPLAY_SCALE),
        },
        ShapeKind::Cube => {
            let ramp = if p < 0.5 { p * 2.0 } else { (1.0 - p) * 2.0 };
            CrossSection::Square {
                size: sanitize(ramp * DISPLAY_SCALE),
            }
        }
        // Grows monotonically with position, unlike the other three.
        ShapeKind::Cone => CrossSection::Disc {
            radius: sanitize(p * DISPLAY_SCALE),
        },
        ShapeKind::Torus => {
            let d = position.offset_from_plane().abs();
            if d > TORUS_HALF_EXTENT {
                return CrossSection::Hidden;
            }
            CrossSection::TubePair {
                distance: sanitize(TORUS_MAX_SEPARATION * (1.0 - d / TORUS_HALF_EXTENT)),
                radius: TORUS_TUBE_RADIUS,
            }
        }
    }
}

/// Clamp a derived size so it is never negative or NaN
#[inline]
fn sanitize(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}
