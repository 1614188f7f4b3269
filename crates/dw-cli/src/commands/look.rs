use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use dw_atlas::{MapConfig, Viewer, render_map};

pub fn run(world_path: &Path, room_name: &str) -> Result<(), String> {
    let world = super::load_world(world_path)?;
    let here = super::find_room(&world, room_name)?;
    let room = world
        .get_room(here)
        .ok_or_else(|| format!("room not found: \"{room_name}\""))?;

    let viewer = Viewer::in_room(&world, here).map_err(|e| e.to_string())?;
    let grid = render_map(&world, &viewer, &MapConfig::default()).map_err(|e| e.to_string())?;

    let zone = room.info.zone.as_deref().unwrap_or("no zone");
    println!("  {} [{}]", room.name.bold(), zone.dimmed());
    println!();

    // Left: description and exits.
    let mut left = String::new();
    if room.description.is_empty() {
        left.push_str("You see nothing special.");
    } else {
        for line in room.description.lines() {
            left.push_str(line.trim());
            left.push('\n');
        }
    }

    let exits = world.exits_from(here);
    if !exits.is_empty() {
        left.push_str("\nExits:\n");
        for exit in exits {
            let label = exit
                .direction()
                .map(|d| d.to_string())
                .unwrap_or_else(|| exit.label.clone());
            left.push_str(&format!("  {label} -> {}\n", world.room_name(exit.destination)));
        }
    }

    // Right: the map and where this room sits on the grid.
    let right = format!("{grid}\nMAP COORDINATES:\n  {}", room.coordinates);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec![left.trim_end().to_string(), right]);
    println!("{table}");

    Ok(())
}
