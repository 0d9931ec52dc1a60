//! Axis view: where the solid sits along the hidden axis
//!
//! Only the placement matters here, so every shape is a small marker slid
//! along a vertical line by [`axis_offset`].

use flatland_core::ViewState;
use flatland_math::{axis_offset, ShapeKind};
use svg::node::element::{Circle, Group, Polygon, Rectangle};
use svg::Document;

use super::{background, label, line, standalone, translate_y, CENTER};
use crate::palette::{panel, ShapeStyle};

const MARKER_RADIUS: f32 = 12.0;

/// Build the axis view as a panel group
pub fn panel(state: &ViewState) -> Group {
    Group::new()
        .set("class", "axis-view")
        .add(background(panel::SKY_BACKGROUND))
        .add(line((CENTER, 50.0), (CENTER, 250.0), panel::HIDDEN_AXIS, 2.0))
        .add(marker(state.shape).set("transform", translate_y(axis_offset(state.position))))
        .add(label(10.0, 290.0, "Z-axis (vertical motion)", panel::LABEL))
}

/// Render the axis view as a standalone document
pub fn render(state: &ViewState) -> Document {
    standalone(panel(state))
}

fn marker(shape: ShapeKind) -> Group {
    let style = ShapeStyle::for_shape(shape);
    let group = Group::new().set("class", format!("marker {}", shape));

    match shape {
        ShapeKind::Sphere => group.add(disc(MARKER_RADIUS, style.fill, style.stroke, 2)),
        ShapeKind::Cube => group.add(
            Rectangle::new()
                .set("x", CENTER - MARKER_RADIUS)
                .set("y", CENTER - MARKER_RADIUS)
                .set("width", MARKER_RADIUS * 2.0)
                .set("height", MARKER_RADIUS * 2.0)
                .set("fill", style.fill)
                .set("stroke", style.stroke)
                .set("stroke-width", 2),
        ),
        ShapeKind::Cone => group.add(
            Polygon::new()
                .set("points", "150,138 138,162 162,162")
                .set("fill", style.fill)
                .set("stroke", style.stroke)
                .set("stroke-width", 2),
        ),
        ShapeKind::Torus => group
            .add(disc(MARKER_RADIUS, style.fill, style.stroke, 2))
            .add(disc(MARKER_RADIUS / 2.0, panel::SKY_BACKGROUND, style.stroke, 1)),
    }
}

fn disc(radius: f32, fill: &str, stroke: &str, stroke_width: u32) -> Circle {
    Circle::new()
        .set("cx", CENTER)
        .set("cy", CENTER)
        .set("r", radius)
        .set("fill", fill)
        .set("stroke", stroke)
        .set("stroke-width", stroke_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flatland_math::Position;

    #[test]
    fn test_marker_travels_twice_as_far_as_world() {
        let state = ViewState {
            shape: ShapeKind::Sphere,
            position: Position::MAX,
            ..ViewState::default()
        };
        let svg = render(&state).to_string();
        assert!(svg.contains("translate(0,-100)"));
    }

    #[test]
    fn test_marker_centered_at_plane() {
        let svg = render(&ViewState::default()).to_string();
        assert!(svg.contains("translate(0,0)") || svg.contains("translate(0,-0)"));
        assert!(svg.contains("r=\"12\""));
    }

    #[test]
    fn test_torus_marker_has_hole() {
        let state = ViewState {
            shape: ShapeKind::Torus,
            ..ViewState::default()
        };
        let svg = render(&state).to_string();
        assert!(svg.contains("r=\"6\""));
    }
}
