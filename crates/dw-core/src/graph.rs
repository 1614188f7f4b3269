//! The seam between the traversal algorithms and the object store.
//!
//! Persistence belongs to the game server. Anything that can answer these
//! questions about rooms can be walked, mapped, and re-coordinated;
//! [`World`](crate::World) is the in-process implementation.

use serde::{Deserialize, Serialize};

use crate::direction::Coordinates;
use crate::error::DwResult;
use crate::room::{RoomId, SectorType, Setting};

/// Read access to a graph of rooms connected by labelled exits.
pub trait RoomGraph {
    /// Returns true if the room exists.
    fn contains(&self, room: RoomId) -> bool;

    /// The room's stored coordinates.
    fn coordinates(&self, room: RoomId) -> Option<Coordinates>;

    /// Indoor or outdoor.
    fn setting(&self, room: RoomId) -> Option<Setting>;

    /// The room's terrain tag.
    fn sector(&self, room: RoomId) -> Option<SectorType>;

    /// The room's explicit map glyph, if one was set.
    fn symbol(&self, room: RoomId) -> Option<char>;

    /// Outgoing exits as `(label, destination)` pairs, in creation order.
    ///
    /// Labels are returned as stored; callers normalize them.
    fn exits(&self, room: RoomId) -> Vec<(String, RoomId)>;
}

/// Write access needed by coordinate resets.
pub trait RoomGraphMut: RoomGraph {
    /// Overwrite the room's stored coordinates.
    fn set_coordinates(&mut self, room: RoomId, coordinates: Coordinates) -> DwResult<()>;

    /// Copy one metadata field from `from` onto `to`.
    fn copy_field(&mut self, from: RoomId, to: RoomId, field: ZoneField) -> DwResult<()>;
}

/// Room metadata a zone-wide reset can propagate from its start room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneField {
    /// The zone label.
    Zone,
    /// Indoor/outdoor.
    Setting,
    /// The non-combat flag.
    NonCombat,
    /// The terrain tag.
    Sector,
}

impl ZoneField {
    /// Parse a field name as typed by a builder.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().replace('-', "_").as_str() {
            "zone" => Some(Self::Zone),
            "setting" | "outdoor" => Some(Self::Setting),
            "non_combat" | "noncombat" => Some(Self::NonCombat),
            "sector" | "sector_type" => Some(Self::Sector),
            _ => None,
        }
    }
}
