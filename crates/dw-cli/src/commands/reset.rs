use std::path::Path;

use colored::Colorize;
use dw_atlas::{ResetOptions, reset_zone_coordinates_with};
use dw_core::ZoneField;

pub fn run(
    world_path: &Path,
    room_name: &str,
    propagate: &[String],
    output: Option<&Path>,
) -> Result<(), String> {
    let mut world = super::load_world(world_path)?;
    let start = super::find_room(&world, room_name)?;

    let mut options = ResetOptions::default();
    for name in propagate {
        let field = ZoneField::parse(name).ok_or_else(|| {
            format!("unknown field: \"{name}\" (expected zone, setting, non-combat, or sector)")
        })?;
        options = options.with_field(field);
    }

    let count =
        reset_zone_coordinates_with(&mut world, start, &options).map_err(|e| e.to_string())?;

    let path = output.unwrap_or(world_path);
    super::save_world(&world, path)?;

    println!(
        "  Reset coordinates of {} room{} from {}.",
        count,
        if count == 1 { "" } else { "s" },
        world.room_name(start).bold(),
    );
    println!("  Wrote {}", path.display());

    Ok(())
}
