//! Flatland Mathematics Library
//!
//! This crate provides the pure geometry behind the Flatland views: which
//! solid is shown, where it sits along the hidden axis, and what a creature
//! living in the plane sees of it.
//!
//! ## Core Types
//!
//! - [`ShapeKind`] - The four solids that can pass through the plane
//! - [`Position`] - Normalized location along the axis (0.5 = the plane)
//! - [`CrossSection`] - What the plane cuts out of a solid at a position
//!
//! ## Functions
//!
//! - [`project`] - Map (shape, position) to a drawable cross-section
//! - [`world_offset`] / [`axis_offset`] - Placements for the other two views

pub mod shape;
pub mod position;
pub mod cross_section;
pub mod placement;

pub use shape::{ShapeKind, ParseShapeError};
pub use position::{Position, PlaneRelation};
pub use cross_section::{project, CrossSection, DISPLAY_SCALE};
pub use placement::{axis_offset, world_offset};
