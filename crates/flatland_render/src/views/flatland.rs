//! Flatland view: what a creature living in the plane sees
//!
//! This is the only view that depends on the per-shape cross-section
//! formulas. It draws exactly what [`ViewState::cross_section`] returns,
//! centered on the panel with no translation, and nothing at all when the
//! section is not visible.

use flatland_core::ViewState;
use flatland_math::CrossSection;
use svg::node::element::{Circle, Group, Rectangle};
use svg::Document;

use super::{background, label, line, standalone, CENTER};
use crate::palette::{panel, ShapeStyle};

const SECTION_OPACITY: f32 = 0.9;

/// Build the flatland view as a panel group
pub fn panel(state: &ViewState) -> Group {
    let view = Group::new()
        .set("class", "flatland-view")
        .add(background(panel::SKY_BACKGROUND))
        .add(line((50.0, CENTER), (250.0, CENTER), panel::GRID, 1.0))
        .add(line((CENTER, 50.0), (CENTER, 250.0), panel::GRID, 1.0));

    let view = match section(state) {
        Some(drawn) => view.add(drawn),
        None => view,
    };

    view.add(label(10.0, 290.0, "X/Y plane (Flatland)", panel::LABEL))
}

/// Render the flatland view as a standalone document
pub fn render(state: &ViewState) -> Document {
    standalone(panel(state))
}

/// The drawn cross-section, or `None` when there is nothing to see
fn section(state: &ViewState) -> Option<Group> {
    let cross_section = state.cross_section();
    if !cross_section.is_visible() {
        return None;
    }

    let style = ShapeStyle::for_shape(state.shape);
    let group = Group::new().set("class", format!("section {}", state.shape));

    let group = match cross_section {
        CrossSection::Disc { radius } => group.add(disc(CENTER, radius, style)),
        CrossSection::Square { size } => group.add(
            Rectangle::new()
                .set("x", CENTER - size / 2.0)
                .set("y", CENTER - size / 2.0)
                .set("width", size)
                .set("height", size)
                .set("fill", style.fill)
                .set("fill-opacity", SECTION_OPACITY)
                .set("stroke", style.stroke)
                .set("stroke-width", 2),
        ),
        CrossSection::TubePair { distance, radius } => group
            .add(disc(CENTER - distance / 2.0, radius, style))
            .add(disc(CENTER + distance / 2.0, radius, style)),
        CrossSection::Hidden => return None,
    };
    Some(group)
}

fn disc(cx: f32, radius: f32, style: ShapeStyle) -> Circle {
    Circle::new()
        .set("cx", cx)
        .set("cy", CENTER)
        .set("r", radius)
        .set("fill", style.fill)
        .set("fill-opacity", SECTION_OPACITY)
        .set("stroke", style.stroke)
        .set("stroke-width", 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flatland_math::{Position, ShapeKind};

    fn state(shape: ShapeKind, p: f32) -> ViewState {
        ViewState {
            shape,
            position: Position::new(p),
            ..ViewState::default()
        }
    }

    #[test]
    fn test_cube_square_centered() {
        let svg = render(&state(ShapeKind::Cube, 0.5)).to_string();
        assert!(svg.contains("x=\"115\""));
        assert!(svg.contains("width=\"70\""));
    }

    #[test]
    fn test_torus_pair_at_plane() {
        let svg = render(&state(ShapeKind::Torus, 0.5)).to_string();
        assert!(svg.contains("cx=\"110\""));
        assert!(svg.contains("cx=\"190\""));
        assert!(svg.contains("r=\"20\""));
    }

    #[test]
    fn test_hidden_torus_draws_nothing() {
        let svg = render(&state(ShapeKind::Torus, 0.05)).to_string();
        assert!(!svg.contains("<circle"));
        assert!(!svg.contains("section"));
    }

    #[test]
    fn test_zero_sized_section_draws_nothing() {
        let svg = render(&state(ShapeKind::Cube, 0.0)).to_string();
        assert!(!svg.contains("section"));

        let svg = render(&state(ShapeKind::Sphere, 0.0)).to_string();
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn test_cone_radius_follows_position() {
        let svg = render(&state(ShapeKind::Cone, 0.5)).to_string();
        assert!(svg.contains("r=\"35\""));
    }
}
