//! Flatland - a viewer for planar cross-sections of solids
//!
//! Library half of the `flatland` binary, exposed so integration tests can
//! reach the configuration and host systems.

pub mod config;
pub mod error;
pub mod input;
pub mod systems;
