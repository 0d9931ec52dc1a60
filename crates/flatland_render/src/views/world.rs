//! World perspective: the whole solid crossing the plane
//!
//! Shows what an observer outside the plane sees. The solid is drawn at a
//! fixed size and slid vertically by [`world_offset`]; the plane is the red
//! dashed horizontal line.

use flatland_core::ViewState;
use flatland_math::{world_offset, ShapeKind};
use svg::node::element::{Circle, Group, Polygon, Rectangle};
use svg::Document;

use super::{background, label, line, standalone, translate_y, CENTER};
use crate::palette::{panel, ShapeStyle};

/// Radius of the sphere and outer radius of the torus
const BODY_RADIUS: f32 = 30.0;
/// Radius of the torus hole
const HOLE_RADIUS: f32 = 15.0;
const BODY_OPACITY: f32 = 0.7;

/// Build the world view as a panel group
pub fn panel(state: &ViewState) -> Group {
    let plane = line((50.0, CENTER), (250.0, CENTER), panel::PLANE, 2.0)
        .set("stroke-dasharray", "5,3");

    Group::new()
        .set("class", "world-view")
        .add(background(panel::WORLD_BACKGROUND))
        .add(line((50.0, CENTER), (250.0, CENTER), panel::AXIS, 2.0))
        .add(line((CENTER, 50.0), (CENTER, 250.0), panel::AXIS, 2.0))
        .add(plane)
        .add(solid(state.shape).set("transform", translate_y(world_offset(state.position))))
        .add(label(260.0, CENTER, "X", panel::LABEL))
        .add(label(CENTER, 40.0, "Y", panel::LABEL))
        .add(label(
            10.0,
            290.0,
            "3D object intersecting with 2D plane (red line)",
            panel::LABEL,
        ))
}

/// Render the world view as a standalone document
pub fn render(state: &ViewState) -> Document {
    standalone(panel(state))
}

/// The untranslated solid, centered on the panel
fn solid(shape: ShapeKind) -> Group {
    let style = ShapeStyle::for_shape(shape);
    let group = Group::new().set("class", format!("solid {}", shape));

    match shape {
        ShapeKind::Sphere => group.add(
            Circle::new()
                .set("cx", CENTER)
                .set("cy", CENTER)
                .set("r", BODY_RADIUS)
                .set("fill", style.fill)
                .set("fill-opacity", BODY_OPACITY)
                .set("stroke", style.stroke)
                .set("stroke-width", 2),
        ),
        ShapeKind::Cube => group.add(
            Rectangle::new()
                .set("x", CENTER - BODY_RADIUS)
                .set("y", CENTER - BODY_RADIUS)
                .set("width", BODY_RADIUS * 2.0)
                .set("height", BODY_RADIUS * 2.0)
                .set("fill", style.fill)
                .set("fill-opacity", BODY_OPACITY)
                .set("stroke", style.stroke)
                .set("stroke-width", 2),
        ),
        ShapeKind::Cone => group.add(
            Polygon::new()
                .set("points", "150,120 120,180 180,180")
                .set("fill", style.fill)
                .set("fill-opacity", BODY_OPACITY)
                .set("stroke", style.stroke)
                .set("stroke-width", 2),
        ),
        ShapeKind::Torus => group
            .add(
                Circle::new()
                    .set("cx", CENTER)
                    .set("cy", CENTER)
                    .set("r", BODY_RADIUS)
                    .set("fill", style.fill)
                    .set("fill-opacity", BODY_OPACITY)
                    .set("stroke", style.stroke)
                    .set("stroke-width", 2),
            )
            .add(
                Circle::new()
                    .set("cx", CENTER)
                    .set("cy", CENTER)
                    .set("r", HOLE_RADIUS)
                    .set("fill", panel::SKY_BACKGROUND)
                    .set("stroke", style.stroke)
                    .set("stroke-width", 1),
            ),
    }
}
