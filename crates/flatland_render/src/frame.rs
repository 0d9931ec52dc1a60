//! One rendered frame: all three views from a single snapshot
//!
//! Rendering every view from the same [`ViewState`] keeps them in sync; no
//! view ever sees a position another view has not.

use std::io;
use std::path::{Path, PathBuf};

use flatland_core::ViewState;
use svg::node::element::{Group, Rectangle, Text};
use svg::Document;

use crate::palette::panel;
use crate::views::{self, PANEL_SIZE};

/// Horizontal gap between panels in the composite page
const PANEL_GAP: f32 = 16.0;
/// Height of the header line above the panels
const HEADER_HEIGHT: f32 = 40.0;

/// Which files [`Frame::save`] writes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SaveOptions {
    /// One file per view
    pub per_view: bool,
    /// A single page with all three views side by side
    pub composite: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            per_view: true,
            composite: true,
        }
    }
}

/// The three views rendered from one snapshot
pub struct Frame {
    state: ViewState,
    world: Document,
    axis: Document,
    flatland: Document,
}

impl Frame {
    /// Render all three views from `state`
    pub fn render(state: &ViewState) -> Self {
        Self {
            state: *state,
            world: views::world::render(state),
            axis: views::axis::render(state),
            flatland: views::flatland::render(state),
        }
    }

    /// Snapshot this frame was rendered from
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn world(&self) -> &Document {
        &self.world
    }

    pub fn axis(&self) -> &Document {
        &self.axis
    }

    pub fn flatland(&self) -> &Document {
        &self.flatland
    }

    /// Status line shown above the composite, e.g. `sphere | position 0.62 (Above plane) | Playing`
    pub fn caption(&self) -> String {
        let mode = if self.state.animating { "Playing" } else { "Paused" };
        format!(
            "{} | position {} ({} plane) | {}",
            self.state.shape,
            self.state.position,
            self.state.position.relation(),
            mode
        )
    }

    /// All three views side by side on one page, under a caption
    pub fn composite(&self) -> Document {
        let width = PANEL_SIZE * 3.0 + PANEL_GAP * 2.0;
        let height = PANEL_SIZE + HEADER_HEIGHT;

        let panels = [
            views::world::panel(&self.state),
            views::axis::panel(&self.state),
            views::flatland::panel(&self.state),
        ];

        let mut page = Document::new()
            .set("viewBox", (0.0, 0.0, width, height))
            .set("width", width)
            .set("height", height)
            .add(
                Rectangle::new()
                    .set("width", width)
                    .set("height", height)
                    .set("fill", panel::PAGE),
            )
            .add(
                Text::new(self.caption())
                    .set("x", PANEL_GAP)
                    .set("y", HEADER_HEIGHT * 0.65)
                    .set("font-size", 16)
                    .set("fill", panel::LABEL),
            );

        for (i, view) in panels.into_iter().enumerate() {
            let x = i as f32 * (PANEL_SIZE + PANEL_GAP);
            page = page.add(
                Group::new()
                    .set("transform", format!("translate({},{})", x, HEADER_HEIGHT))
                    .add(view)
                    .add(
                        Rectangle::new()
                            .set("width", PANEL_SIZE)
                            .set("height", PANEL_SIZE)
                            .set("fill", "none")
                            .set("stroke", panel::BORDER),
                    ),
            );
        }
        page
    }

    /// Write the frame into `dir` as `<stem>_world.svg`, `<stem>_axis.svg`,
    /// `<stem>_flatland.svg` and `<stem>_composite.svg`, as selected by `options`
    ///
    /// Returns the paths written.
    pub fn save<P: AsRef<Path>>(
        &self,
        dir: P,
        stem: &str,
        options: SaveOptions,
    ) -> io::Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        let mut written = Vec::new();

        if options.per_view {
            for (suffix, document) in [
                ("world", &self.world),
                ("axis", &self.axis),
                ("flatland", &self.flatland),
            ] {
                let path = dir.join(format!("{}_{}.svg", stem, suffix));
                svg::save(&path, document)?;
                written.push(path);
            }
        }

        if options.composite {
            let path = dir.join(format!("{}_composite.svg", stem));
            svg::save(&path, &self.composite())?;
            written.push(path);
        }

        log::trace!("Saved frame '{}' ({} files)", stem, written.len());
        Ok(written)
    }
}
