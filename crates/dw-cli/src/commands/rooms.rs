use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use dw_core::Room;

pub fn run(world_path: &Path, zone: Option<&str>) -> Result<(), String> {
    let world = super::load_world(world_path)?;

    let mut rooms: Vec<&Room> = match zone {
        Some(zone) => world.zone_rooms(zone),
        None => world.all_rooms().collect(),
    };

    if rooms.is_empty() {
        println!("  No rooms found.");
        return Ok(());
    }

    rooms.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Coordinates", "Zone", "Sector", "Setting"]);

    for room in &rooms {
        table.add_row(vec![
            room.name.clone(),
            room.coordinates.to_string(),
            room.info.zone.clone().unwrap_or_else(|| "-".to_string()),
            room.sector.to_string(),
            room.info.setting.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} rooms", rooms.len());

    Ok(())
}
