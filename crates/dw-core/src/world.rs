use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::direction::{Coordinates, Direction};
use crate::error::{DwError, DwResult};
use crate::exit::{Exit, ExitId};
use crate::graph::{RoomGraph, RoomGraphMut, ZoneField};
use crate::room::{Room, RoomId, SectorType, Setting, check_symbol};

/// Metadata about the world itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldMeta {
    /// Display name of the world.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
}

impl WorldMeta {
    /// Metadata with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }
}

/// The world model. Owns all rooms and exits.
#[derive(Debug, Clone)]
pub struct World {
    /// World-level metadata.
    pub meta: WorldMeta,
    rooms: HashMap<RoomId, Room>,
    exits: HashMap<ExitId, Exit>,

    // Indexes
    by_name_lower: HashMap<String, RoomId>,
    exits_from: HashMap<RoomId, Vec<ExitId>>,
}

impl World {
    /// An empty world.
    pub fn new(meta: WorldMeta) -> Self {
        Self {
            meta,
            rooms: HashMap::new(),
            exits: HashMap::new(),
            by_name_lower: HashMap::new(),
            exits_from: HashMap::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Room CRUD
    // -----------------------------------------------------------------------

    /// Add a room to the world. Returns the room's ID.
    ///
    /// Fails on a duplicate name or a symbol the map cannot draw.
    pub fn add_room(&mut self, room: Room) -> DwResult<RoomId> {
        if let Some(symbol) = room.symbol {
            check_symbol(symbol)?;
        }
        let name_lower = room.name.to_lowercase();
        if self.by_name_lower.contains_key(&name_lower) {
            return Err(DwError::DuplicateName(room.name.clone()));
        }

        let id = room.id;
        self.by_name_lower.insert(name_lower, id);
        self.rooms.insert(id, room);
        Ok(id)
    }

    /// Get a reference to a room by ID.
    pub fn get_room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    /// Find a room by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&Room> {
        self.by_name_lower
            .get(&name.to_lowercase())
            .and_then(|id| self.rooms.get(id))
    }

    /// Find a room ID by name (case-insensitive).
    pub fn find_id_by_name(&self, name: &str) -> Option<RoomId> {
        self.by_name_lower.get(&name.to_lowercase()).copied()
    }

    /// The room's name, or its short ID if it is unknown.
    pub fn room_name(&self, id: RoomId) -> String {
        self.rooms
            .get(&id)
            .map(|r| r.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    // -----------------------------------------------------------------------
    // Exit CRUD
    // -----------------------------------------------------------------------

    /// Add an exit between two existing rooms.
    pub fn add_exit(&mut self, exit: Exit) -> DwResult<ExitId> {
        if !self.rooms.contains_key(&exit.source) {
            return Err(DwError::RoomNotFound(exit.source));
        }
        if !self.rooms.contains_key(&exit.destination) {
            return Err(DwError::RoomNotFound(exit.destination));
        }

        let id = exit.id;
        self.exits_from.entry(exit.source).or_default().push(id);
        self.exits.insert(id, exit);
        Ok(id)
    }

    /// Connect two rooms both ways: `direction` from `from`, its opposite back.
    pub fn dig(
        &mut self,
        from: RoomId,
        direction: Direction,
        to: RoomId,
    ) -> DwResult<(ExitId, ExitId)> {
        if !self.rooms.contains_key(&to) {
            return Err(DwError::RoomNotFound(to));
        }
        let there = self.add_exit(Exit::new(from, direction.as_str(), to))?;
        let back = self.add_exit(Exit::new(to, direction.opposite().as_str(), from))?;
        Ok((there, back))
    }

    /// All exits leading out of a room, in creation order.
    pub fn exits_from(&self, room: RoomId) -> Vec<&Exit> {
        self.exits_from
            .get(&room)
            .map(|ids| ids.iter().filter_map(|id| self.exits.get(id)).collect())
            .unwrap_or_default()
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Get all rooms.
    pub fn all_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Get all exits.
    pub fn all_exits(&self) -> impl Iterator<Item = &Exit> {
        self.exits.values()
    }

    /// All rooms whose zone label matches (case-insensitive).
    pub fn zone_rooms(&self, zone: &str) -> Vec<&Room> {
        let zone_lower = zone.to_lowercase();
        self.rooms
            .values()
            .filter(|r| {
                r.info
                    .zone
                    .as_ref()
                    .is_some_and(|z| z.to_lowercase() == zone_lower)
            })
            .collect()
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of exits.
    pub fn exit_count(&self) -> usize {
        self.exits.len()
    }
}

impl RoomGraph for World {
    fn contains(&self, room: RoomId) -> bool {
        self.rooms.contains_key(&room)
    }

    fn coordinates(&self, room: RoomId) -> Option<Coordinates> {
        self.rooms.get(&room).map(|r| r.coordinates)
    }

    fn setting(&self, room: RoomId) -> Option<Setting> {
        self.rooms.get(&room).map(|r| r.info.setting)
    }

    fn sector(&self, room: RoomId) -> Option<SectorType> {
        self.rooms.get(&room).map(|r| r.sector)
    }

    fn symbol(&self, room: RoomId) -> Option<char> {
        self.rooms.get(&room).and_then(|r| r.symbol)
    }

    fn exits(&self, room: RoomId) -> Vec<(String, RoomId)> {
        self.exits_from(room)
            .into_iter()
            .map(|e| (e.label.clone(), e.destination))
            .collect()
    }
}

impl RoomGraphMut for World {
    fn set_coordinates(&mut self, room: RoomId, coordinates: Coordinates) -> DwResult<()> {
        let room = self
            .rooms
            .get_mut(&room)
            .ok_or(DwError::RoomNotFound(room))?;
        room.coordinates = coordinates;
        Ok(())
    }

    fn copy_field(&mut self, from: RoomId, to: RoomId, field: ZoneField) -> DwResult<()> {
        let source = self.rooms.get(&from).ok_or(DwError::RoomNotFound(from))?;
        let zone = source.info.zone.clone();
        let setting = source.info.setting;
        let non_combat = source.info.non_combat;
        let sector = source.sector;

        let target = self.rooms.get_mut(&to).ok_or(DwError::RoomNotFound(to))?;
        match field {
            ZoneField::Zone => target.info.zone = zone,
            ZoneField::Setting => target.info.setting = setting,
            ZoneField::NonCombat => target.info.non_combat = non_combat,
            ZoneField::Sector => target.sector = sector,
        }
        Ok(())
    }
}
