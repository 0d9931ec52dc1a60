//! Affine placements for the world and axis views
//!
//! Both views slide the whole solid along a vertical line. Screen y grows
//! downward, so a position above the plane gives a negative offset.

use crate::Position;

/// Vertical travel of the solid in the world view, in display units
pub const WORLD_TRAVEL: f32 = 100.0;

/// Vertical travel of the marker in the axis view, in display units
pub const AXIS_TRAVEL: f32 = 200.0;

/// Translation of the solid in the world view: `-(p - 0.5) * 100`
#[inline]
pub fn world_offset(position: Position) -> f32 {
    -position.offset_from_plane() * WORLD_TRAVEL
}

/// Translation of the marker in the axis view: `-(p - 0.5) * 200`
#[inline]
pub fn axis_offset(position: Position) -> f32 {
    -position.offset_from_plane() * AXIS_TRAVEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_zero_at_plane() {
        assert_eq!(world_offset(Position::PLANE), 0.0);
        assert_eq!(axis_offset(Position::PLANE), 0.0);
    }

    #[test]
    fn test_offsets_at_extremes() {
        assert_eq!(world_offset(Position::MAX), -50.0);
        assert_eq!(world_offset(Position::MIN), 50.0);
        assert_eq!(axis_offset(Position::MAX), -100.0);
        assert_eq!(axis_offset(Position::MIN), 100.0);
    }

    #[test]
    fn test_axis_travels_twice_as_far() {
        let p = Position::new(0.8);
        assert!((axis_offset(p) - 2.0 * world_offset(p)).abs() < 1e-5);
    }
}
