//! Core world model for dogworld: rooms, exits, and the room graph.
//!
//! The game server owns persistence; this crate is the in-process view of
//! it that the coordinate worms and the minimap work against. A [`World`]
//! can be built programmatically or loaded from a JSON [`WorldDocument`].

/// Compass directions and exit-label normalization.
pub mod direction;
/// JSON authoring format for worlds.
pub mod document;
/// Error types used throughout the crate.
pub mod error;
/// Directed exits between rooms.
pub mod exit;
/// The read/write seam the traversal algorithms are written against.
pub mod graph;
/// Room entities, their metadata, and terrain tags.
pub mod room;
/// The world model that owns rooms and exits.
pub mod world;

/// Re-export direction types.
pub use direction::{Compass, Coordinates, Direction};
/// Re-export the document format.
pub use document::WorldDocument;
/// Re-export error types.
pub use error::{DwError, DwResult};
/// Re-export exit types.
pub use exit::{Exit, ExitId};
/// Re-export graph traits.
pub use graph::{RoomGraph, RoomGraphMut, ZoneField};
/// Re-export room types.
pub use room::{Room, RoomId, RoomInfo, SectorType, Setting};
/// Re-export world model types.
pub use world::{World, WorldMeta};
