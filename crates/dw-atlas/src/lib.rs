//! Coordinate worms and overhead minimaps for dogworld.
//!
//! A worm walks outward from a room through its compass exits, giving every
//! room it reaches a grid position. The same walk drives two consumers:
//! [`reset_zone_coordinates`] writes those positions back onto the rooms,
//! and [`render_map`] rasterizes them into a small character-centered
//! viewport.

/// Walk and map configuration.
pub mod config;
/// Error types for the atlas crate.
pub mod error;
/// The character-centered overhead map.
pub mod minimap;
/// Zone-wide coordinate resets.
pub mod reset;
/// Map glyphs.
pub mod symbols;
/// Depth-first coordinate assignment over a room graph.
pub mod worm;

/// Re-exports of [`config::MapConfig`] and [`config::WalkConfig`].
pub use config::{MapConfig, WalkConfig};
/// Re-exports of [`error::AtlasError`] and [`error::AtlasResult`].
pub use error::{AtlasError, AtlasResult};
/// Re-exports of the minimap types.
pub use minimap::{MapGrid, Viewer, render_map};
/// Re-exports of the reset entry points.
pub use reset::{ResetOptions, reset_zone_coordinates, reset_zone_coordinates_with};
/// Re-exports of the worm types.
pub use worm::{Walk, Worm, WormVisitor};
