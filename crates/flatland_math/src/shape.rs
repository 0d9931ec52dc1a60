//! Shape kinds for the solids that pass through the plane
//!
//! A shape kind carries no geometry of its own. It selects the cross-section
//! formula in [`crate::cross_section`] and the visual style used by the renderers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four solids the viewer can show
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// A ball; slices are discs peaking at the plane
    #[default]
    Sphere,
    /// An axis-aligned cube; slices are squares
    Cube,
    /// A cone standing on its base; slices are discs growing with position
    Cone,
    /// A ring; slices are a pair of tube circles or nothing at all
    Torus,
}

impl ShapeKind {
    /// All shapes, in selector order
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Sphere,
        ShapeKind::Cube,
        ShapeKind::Cone,
        ShapeKind::Torus,
    ];

    /// Lowercase name used in commands, configs and file names
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Sphere => "sphere",
            ShapeKind::Cube => "cube",
            ShapeKind::Cone => "cone",
            ShapeKind::Torus => "torus",
        }
    }

    /// Shape for a 1-based selector index (1 = sphere ... 4 = torus)
    pub fn from_index(index: usize) -> Option<Self> {
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when text does not name a shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseShapeError {
    input: String,
}

impl fmt::Display for ParseShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown shape '{}' (expected sphere, cube, cone or torus)",
            self.input
        )
    }
}

impl std::error::Error for ParseShapeError {}

impl FromStr for ShapeKind {
    type Err = ParseShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseShapeError {
                input: trimmed.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Torus".parse::<ShapeKind>(), Ok(ShapeKind::Torus));
        assert_eq!("  cube ".parse::<ShapeKind>(), Ok(ShapeKind::Cube));
    }

    #[test]
    fn test_parse_unknown_shape() {
        let err = "pyramid".parse::<ShapeKind>().unwrap_err();
        assert!(err.to_string().contains("pyramid"));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.to_string().parse::<ShapeKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_from_index() {
        assert_eq!(ShapeKind::from_index(1), Some(ShapeKind::Sphere));
        assert_eq!(ShapeKind::from_index(4), Some(ShapeKind::Torus));
        assert_eq!(ShapeKind::from_index(0), None);
        assert_eq!(ShapeKind::from_index(5), None);
    }

    #[test]
    fn test_default_is_sphere() {
        assert_eq!(ShapeKind::default(), ShapeKind::Sphere);
    }
}
