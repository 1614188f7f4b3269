//! JSON authoring format for worlds.
//!
//! Rooms are listed by unique name and exits refer to rooms by name, so a
//! builder can write a zone by hand. Loading resolves names to IDs;
//! saving writes rooms sorted by name for stable diffs, each room's exits
//! in the order they were created.

use serde::{Deserialize, Serialize};

use crate::direction::Coordinates;
use crate::error::{DwError, DwResult};
use crate::exit::Exit;
use crate::room::{Room, RoomInfo, SectorType};
use crate::world::{World, WorldMeta};

/// A whole world as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldDocument {
    /// World-level metadata.
    pub world: WorldMeta,
    /// Rooms, by unique name.
    #[serde(default)]
    pub rooms: Vec<RoomEntry>,
    /// Exits between named rooms.
    #[serde(default)]
    pub exits: Vec<ExitEntry>,
}

/// One room in a [`WorldDocument`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomEntry {
    /// Unique room name.
    pub name: String,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// X coordinate.
    #[serde(default)]
    pub x: i64,
    /// Y coordinate.
    #[serde(default)]
    pub y: i64,
    /// Terrain tag.
    #[serde(default)]
    pub sector: SectorType,
    /// Explicit map glyph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<char>,
    /// Meters above sea level.
    #[serde(default)]
    pub elevation: i64,
    /// Zone, setting, and combat flags.
    #[serde(default)]
    pub info: RoomInfo,
}

/// One exit in a [`WorldDocument`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitEntry {
    /// Name of the room the exit leads out of.
    pub from: String,
    /// Name of the room the exit leads into.
    pub to: String,
    /// Exit label, usually a compass direction.
    #[serde(alias = "direction")]
    pub label: String,
    /// Alternative names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl WorldDocument {
    /// Parse a document from JSON text.
    pub fn from_json(text: &str) -> DwResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Render the document as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> DwResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resolve room names and build a [`World`].
    pub fn into_world(self) -> DwResult<World> {
        let mut world = World::new(self.world);

        for entry in self.rooms {
            let mut room = Room::new(entry.name);
            room.description = entry.description;
            room.coordinates = Coordinates::new(entry.x, entry.y);
            room.sector = entry.sector;
            room.symbol = entry.symbol;
            room.elevation = entry.elevation;
            room.info = entry.info;
            world.add_room(room)?;
        }

        for entry in self.exits {
            let from = world
                .find_id_by_name(&entry.from)
                .ok_or_else(|| DwError::InvalidReference(entry.from.clone()))?;
            let to = world
                .find_id_by_name(&entry.to)
                .ok_or_else(|| DwError::InvalidReference(entry.to.clone()))?;
            let mut exit = Exit::new(from, entry.label, to);
            exit.aliases = entry.aliases;
            world.add_exit(exit)?;
        }

        tracing::debug!(
            rooms = world.room_count(),
            exits = world.exit_count(),
            "loaded world document"
        );
        Ok(world)
    }

    /// Capture a world as a document.
    pub fn from_world(world: &World) -> Self {
        let mut rooms: Vec<&Room> = world.all_rooms().collect();
        rooms.sort_by(|a, b| a.name.cmp(&b.name));

        // Exit order per room is walk order; it must survive a save.
        let exits: Vec<ExitEntry> = rooms
            .iter()
            .flat_map(|room| {
                world.exits_from(room.id).into_iter().map(move |exit| ExitEntry {
                    from: room.name.clone(),
                    to: world.room_name(exit.destination),
                    label: exit.label.clone(),
                    aliases: exit.aliases.clone(),
                })
            })
            .collect();

        Self {
            world: world.meta.clone(),
            rooms: rooms
                .into_iter()
                .map(|room| RoomEntry {
                    name: room.name.clone(),
                    description: room.description.clone(),
                    x: room.coordinates.x,
                    y: room.coordinates.y,
                    sector: room.sector,
                    symbol: room.symbol,
                    elevation: room.elevation,
                    info: room.info.clone(),
                })
                .collect(),
            exits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::RoomGraph;
    use crate::room::Setting;

    const HAMLET: &str = r#"{
        "world": { "name": "Hamlet" },
        "rooms": [
            { "name": "Square", "x": 0, "y": 0, "sector": "crossroads",
              "info": { "zone": "Hamlet", "setting": "outdoor" } },
            { "name": "Smithy", "x": 1, "y": 0, "sector": "inside", "symbol": "S" },
            { "name": "Well" }
        ],
        "exits": [
            { "from": "Square", "to": "Smithy", "direction": "east" },
            { "from": "Smithy", "to": "Square", "label": "west" },
            { "from": "Square", "to": "Well", "label": "climb down", "aliases": ["down"] }
        ]
    }"#;

    #[test]
    fn load_resolves_names() {
        let world = WorldDocument::from_json(HAMLET)
            .unwrap()
            .into_world()
            .unwrap();
        assert_eq!(world.room_count(), 3);
        assert_eq!(world.exit_count(), 3);

        let square = world.find_by_name("square").unwrap();
        assert_eq!(square.info.setting, Setting::Outdoor);
        assert_eq!(square.sector, SectorType::Crossroads);

        let smithy = world.find_id_by_name("Smithy").unwrap();
        assert_eq!(world.symbol(smithy), Some('S'));
        assert_eq!(world.coordinates(smithy), Some(Coordinates::new(1, 0)));
    }

    #[test]
    fn unknown_room_reference_fails() {
        let text = r#"{
            "world": { "name": "Broken" },
            "rooms": [ { "name": "A" } ],
            "exits": [ { "from": "A", "to": "B", "label": "east" } ]
        }"#;
        let result = WorldDocument::from_json(text).unwrap().into_world();
        assert!(matches!(result, Err(DwError::InvalidReference(name)) if name == "B"));
    }

    #[test]
    fn undrawable_symbols_fail() {
        for symbol in [r"\n", " ", "-", "|"] {
            let text = format!(
                r#"{{ "world": {{ "name": "Broken" }}, "rooms": [ {{ "name": "A", "symbol": "{symbol}" }} ] }}"#
            );
            let result = WorldDocument::from_json(&text).unwrap().into_world();
            assert!(
                matches!(result, Err(DwError::Validation(_))),
                "symbol {symbol:?} accepted"
            );
        }
    }

    #[test]
    fn duplicate_room_names_fail() {
        let text = r#"{
            "world": { "name": "Broken" },
            "rooms": [ { "name": "A" }, { "name": "a" } ]
        }"#;
        let result = WorldDocument::from_json(text).unwrap().into_world();
        assert!(matches!(result, Err(DwError::DuplicateName(_))));
    }

    #[test]
    fn save_and_reload_keeps_rooms_and_exits() {
        let world = WorldDocument::from_json(HAMLET)
            .unwrap()
            .into_world()
            .unwrap();
        let text = WorldDocument::from_world(&world).to_json_pretty().unwrap();
        let reloaded = WorldDocument::from_json(&text)
            .unwrap()
            .into_world()
            .unwrap();

        assert_eq!(reloaded.room_count(), 3);
        assert_eq!(reloaded.exit_count(), 3);
        let well = reloaded.find_id_by_name("Well").unwrap();
        let square = reloaded.find_id_by_name("Square").unwrap();
        let down = reloaded
            .exits_from(square)
            .into_iter()
            .find(|e| e.destination == well)
            .unwrap();
        assert_eq!(down.label, "climb down");
        assert_eq!(down.aliases, vec!["down".to_string()]);
    }

    #[test]
    fn exit_order_survives_save_and_reload() {
        let text = r#"{
            "world": { "name": "Fork" },
            "rooms": [ { "name": "A" }, { "name": "B" }, { "name": "C" } ],
            "exits": [
                { "from": "A", "to": "C", "label": "north" },
                { "from": "C", "to": "B", "label": "east" },
                { "from": "A", "to": "B", "label": "east" },
                { "from": "A", "to": "C", "label": "climb" }
            ]
        }"#;
        let world = WorldDocument::from_json(text).unwrap().into_world().unwrap();
        let saved = WorldDocument::from_world(&world).to_json_pretty().unwrap();
        let reloaded = WorldDocument::from_json(&saved)
            .unwrap()
            .into_world()
            .unwrap();

        let a = reloaded.find_id_by_name("A").unwrap();
        let labels: Vec<String> = reloaded
            .exits(a)
            .into_iter()
            .map(|(label, _)| label)
            .collect();
        assert_eq!(labels, vec!["north", "east", "climb"]);
    }

    #[test]
    fn saved_rooms_are_sorted_by_name() {
        let world = WorldDocument::from_json(HAMLET)
            .unwrap()
            .into_world()
            .unwrap();
        let doc = WorldDocument::from_world(&world);
        let names: Vec<&str> = doc.rooms.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Smithy", "Square", "Well"]);
    }
}
