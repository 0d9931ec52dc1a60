//! Back-and-forth sweep used while autoplay is on
//!
//! Each tick moves the position by a fixed step in the current direction.
//! Reaching either bound clamps to it and reverses the direction, so an
//! animated position never touches 0 or 1.

use flatland_math::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Current sweep direction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Toward 1.0 (above the plane)
    #[default]
    Forward,
    /// Toward 0.0 (below the plane)
    Backward,
}

impl Direction {
    /// +1.0 for forward, -1.0 for backward
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

/// Parameters of the autoplay sweep
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepConfig {
    /// Position change per tick
    pub step: f32,
    /// Lowest position reached while animating
    pub lower: f32,
    /// Highest position reached while animating
    pub upper: f32,
    /// Time between ticks
    pub interval: Duration,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            step: 0.006,
            lower: 0.01,
            upper: 0.99,
            interval: Duration::from_millis(40),
        }
    }
}

impl SweepConfig {
    /// Create a validated sweep configuration
    pub fn new(step: f32, lower: f32, upper: f32, interval: Duration) -> Result<Self, SweepConfigError> {
        let config = Self { step, lower, upper, interval };
        config.validate()?;
        Ok(config)
    }

    /// Check that the bounds are ordered inside `[0, 1]` and the step and interval are usable
    pub fn validate(&self) -> Result<(), SweepConfigError> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(SweepConfigError::InvalidStep(self.step));
        }
        let ordered = self.lower.is_finite()
            && self.upper.is_finite()
            && 0.0 <= self.lower
            && self.lower < self.upper
            && self.upper <= 1.0;
        if !ordered {
            return Err(SweepConfigError::InvalidBounds {
                lower: self.lower,
                upper: self.upper,
            });
        }
        if self.interval.is_zero() {
            return Err(SweepConfigError::ZeroInterval);
        }
        Ok(())
    }

    /// Apply one tick to `position` moving in `direction`
    ///
    /// Returns the new position and the direction for the next tick.
    pub fn advance(&self, position: Position, direction: Direction) -> (Position, Direction) {
        let next = position.value() + direction.sign() * self.step;

        if next >= self.upper {
            (Position::new(self.upper), Direction::Backward)
        } else if next <= self.lower {
            (Position::new(self.lower), Direction::Forward)
        } else {
            (Position::new(next), direction)
        }
    }
}

/// Error for an unusable sweep configuration
#[derive(Debug, Clone, PartialEq)]
pub enum SweepConfigError {
    /// Step is zero, negative or not finite
    InvalidStep(f32),
    /// Bounds are not ordered inside the unit interval
    InvalidBounds { lower: f32, upper: f32 },
    /// Tick interval of zero
    ZeroInterval,
}

impl fmt::Display for SweepConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepConfigError::InvalidStep(step) => {
                write!(f, "Sweep step must be positive, got {}", step)
            }
            SweepConfigError::InvalidBounds { lower, upper } => write!(
                f,
                "Sweep bounds must satisfy 0 <= lower < upper <= 1, got [{}, {}]",
                lower, upper
            ),
            SweepConfigError::ZeroInterval => write!(f, "Sweep tick interval must be non-zero"),
        }
    }
}

impl std::error::Error for SweepConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_page_timing() {
        let config = SweepConfig::default();
        assert_eq!(config.step, 0.006);
        assert_eq!(config.interval, Duration::from_millis(40));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_advance_moves_by_step() {
        let config = SweepConfig::default();
        let (next, dir) = config.advance(Position::PLANE, Direction::Forward);
        assert!((next.value() - 0.506).abs() < 1e-6);
        assert_eq!(dir, Direction::Forward);

        let (next, dir) = config.advance(Position::PLANE, Direction::Backward);
        assert!((next.value() - 0.494).abs() < 1e-6);
        assert_eq!(dir, Direction::Backward);
    }

    #[test]
    fn test_advance_bounces_at_upper() {
        let config = SweepConfig::default();
        let (next, dir) = config.advance(Position::new(0.986), Direction::Forward);
        assert_eq!(next.value(), 0.99);
        assert_eq!(dir, Direction::Backward);
    }

    #[test]
    fn test_advance_bounces_at_lower() {
        let config = SweepConfig::default();
        let (next, dir) = config.advance(Position::new(0.014), Direction::Backward);
        assert_eq!(next.value(), 0.01);
        assert_eq!(dir, Direction::Forward);
    }

    #[test]
    fn test_advance_from_outside_bounds() {
        // A slider can leave the position at 1.0; the next tick pulls it back inside.
        let config = SweepConfig::default();
        let (next, dir) = config.advance(Position::MAX, Direction::Forward);
        assert_eq!(next.value(), 0.99);
        assert_eq!(dir, Direction::Backward);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let base = SweepConfig::default();
        assert_eq!(
            SweepConfig { step: 0.0, ..base }.validate(),
            Err(SweepConfigError::InvalidStep(0.0))
        );
        assert!(matches!(
            SweepConfig { lower: 0.9, upper: 0.1, ..base }.validate(),
            Err(SweepConfigError::InvalidBounds { .. })
        ));
        assert!(matches!(
            SweepConfig { upper: 1.5, ..base }.validate(),
            Err(SweepConfigError::InvalidBounds { .. })
        ));
        assert_eq!(
            SweepConfig { interval: Duration::ZERO, ..base }.validate(),
            Err(SweepConfigError::ZeroInterval)
        );
    }

    #[test]
    fn test_direction_helpers() {
        assert_eq!(Direction::Forward.sign(), 1.0);
        assert_eq!(Direction::Backward.sign(), -1.0);
    }

    #[test]
    fn test_error_display() {
        let msg = SweepConfigError::InvalidBounds { lower: 0.9, upper: 0.1 }.to_string();
        assert!(msg.contains("0.9"));
        assert!(msg.contains("lower < upper"));
    }
}
