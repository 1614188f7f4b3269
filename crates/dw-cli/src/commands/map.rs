use std::path::Path;

use dw_atlas::{MapConfig, Viewer, render_map};

pub fn run(world_path: &Path, room: &str, width: usize, height: usize) -> Result<(), String> {
    let world = super::load_world(world_path)?;
    let here = super::find_room(&world, room)?;

    let viewer = Viewer::in_room(&world, here).map_err(|e| e.to_string())?;
    let config = MapConfig::default().with_width(width).with_height(height);
    let grid = render_map(&world, &viewer, &config).map_err(|e| e.to_string())?;

    print!("{grid}");
    Ok(())
}
