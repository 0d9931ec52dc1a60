//! The three synchronized views
//!
//! Each view is a pure function of a [`ViewState`](flatland_core::ViewState).
//! `panel` builds the view as a group in panel coordinates (0..300 on both
//! axes) so it can be placed inside a larger page; `render` wraps the same
//! group in a standalone document.

pub mod axis;
pub mod flatland;
pub mod world;

use svg::node::element::{Group, Line, Rectangle, Text};
use svg::Document;

/// Width and height of every panel, in display units
pub const PANEL_SIZE: f32 = 300.0;

/// Center of a panel on both axes
pub const CENTER: f32 = PANEL_SIZE / 2.0;

/// Wrap a panel group in a standalone 300x300 document
pub(crate) fn standalone(panel: Group) -> Document {
    Document::new()
        .set("viewBox", (0.0, 0.0, PANEL_SIZE, PANEL_SIZE))
        .set("width", PANEL_SIZE)
        .set("height", PANEL_SIZE)
        .add(panel)
}

pub(crate) fn background(color: &str) -> Rectangle {
    Rectangle::new()
        .set("width", PANEL_SIZE)
        .set("height", PANEL_SIZE)
        .set("fill", color)
}

pub(crate) fn line(from: (f32, f32), to: (f32, f32), stroke: &str, width: f32) -> Line {
    Line::new()
        .set("x1", from.0)
        .set("y1", from.1)
        .set("x2", to.0)
        .set("y2", to.1)
        .set("stroke", stroke)
        .set("stroke-width", width)
}

pub(crate) fn label(x: f32, y: f32, content: &str, color: &str) -> Text {
    Text::new(content)
        .set("x", x)
        .set("y", y)
        .set("font-size", 12)
        .set("fill", color)
}

/// `translate(0,dy)` for a vertical shift
pub(crate) fn translate_y(dy: f32) -> String {
    format!("translate(0,{})", dy)
}
