//! Flatland Rendering Library
//!
//! This crate turns a [`ViewState`](flatland_core::ViewState) snapshot into
//! SVG documents, one per view.
//!
//! ## Key Components
//!
//! - [`views::world`] - The solid crossing the plane, seen from outside
//! - [`views::axis`] - The solid's placement along the hidden axis
//! - [`views::flatland`] - The cross-section seen from inside the plane
//! - [`Frame`] - All three views from one snapshot, plus a composite page
//! - [`ShapeStyle`] - Per-shape colors shared by every view

pub mod frame;
pub mod palette;
pub mod views;

pub use frame::{Frame, SaveOptions};
pub use palette::ShapeStyle;
