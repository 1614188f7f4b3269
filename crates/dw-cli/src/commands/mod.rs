pub mod look;
pub mod map;
pub mod reset;
pub mod roll;
pub mod rooms;

use std::path::Path;

use dw_core::{RoomId, World, WorldDocument};
use dw_mechanics::Resolver;

/// Read and resolve a world file.
fn load_world(path: &Path) -> Result<World, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    WorldDocument::from_json(&text)
        .and_then(WorldDocument::into_world)
        .map_err(|e| format!("{}: {e}", path.display()))
}

/// Write a world back as pretty JSON.
fn save_world(world: &World, path: &Path) -> Result<(), String> {
    let text = WorldDocument::from_world(world)
        .to_json_pretty()
        .map_err(|e| e.to_string())?;
    std::fs::write(path, text + "\n").map_err(|e| format!("cannot write {}: {e}", path.display()))
}

/// Look a room up by name.
fn find_room(world: &World, name: &str) -> Result<RoomId, String> {
    world
        .find_id_by_name(name)
        .ok_or_else(|| format!("room not found: \"{name}\""))
}

/// A seeded resolver if a seed was given.
fn resolver(seed: Option<u64>) -> Resolver {
    match seed {
        Some(seed) => Resolver::seeded(seed),
        None => Resolver::new(),
    }
}
