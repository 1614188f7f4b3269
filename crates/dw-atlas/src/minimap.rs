//! The character-centered overhead map.

use std::fmt;

use dw_core::{Coordinates, Direction, RoomGraph, RoomId, Setting};

use crate::config::{MAP_STEP, MapConfig, WalkConfig};
use crate::error::{AtlasError, AtlasResult};
use crate::symbols::{self, BLANK, CONNECTOR_EW, CONNECTOR_NS, SELF_INDOOR, SELF_OUTDOOR};
use crate::worm::{Worm, WormVisitor};

/// Who the map is drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewer {
    /// The room the viewer stands in; drawn at the center.
    pub location: RoomId,
    /// Picks the self-marker glyph.
    pub setting: Setting,
}

impl Viewer {
    /// A viewer at `location`.
    pub fn new(location: RoomId, setting: Setting) -> Self {
        Self { location, setting }
    }

    /// A viewer standing in `room`, indoors or outdoors as the room is.
    pub fn in_room<G: RoomGraph + ?Sized>(graph: &G, room: RoomId) -> AtlasResult<Self> {
        let setting = graph
            .setting(room)
            .ok_or(AtlasError::StartNotFound(room))?;
        Ok(Self::new(room, setting))
    }

    fn marker(&self) -> char {
        if self.setting.is_outdoor() {
            SELF_OUTDOOR
        } else {
            SELF_INDOOR
        }
    }
}

/// A rendered map: `height` rows of `width` single-glyph cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapGrid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl MapGrid {
    fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![BLANK; width * height],
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The glyph at `(row, col)`, or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        if row < self.height && col < self.width {
            self.cells.get(row * self.width + col).copied()
        } else {
            None
        }
    }

    /// Rows from north to south.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.width.max(1))
    }

    fn set(&mut self, row: usize, col: usize, glyph: char) {
        if row < self.height && col < self.width {
            self.cells[row * self.width + col] = glyph;
        }
    }
}

impl fmt::Display for MapGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (i, glyph) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{glyph}")?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Draws rooms and connectors as the worm reaches them.
struct Painter<'g, G: RoomGraph + ?Sized> {
    graph: &'g G,
    viewer: Viewer,
    grid: MapGrid,
    center: (i64, i64),
}

impl<G: RoomGraph + ?Sized> Painter<'_, G> {
    /// Grid cell for walk coordinates: north is up, east is right.
    fn cell_of(&self, at: Coordinates) -> Option<(usize, usize)> {
        let (cy, cx) = self.center;
        let row = usize::try_from(cy - at.y).ok()?;
        let col = usize::try_from(cx + at.x).ok()?;
        (row < self.grid.height && col < self.grid.width).then_some((row, col))
    }

    /// Room glyphs only go on cells a whole number of map steps from the center.
    fn is_room_cell(&self, (row, col): (usize, usize)) -> bool {
        let (cy, cx) = self.center;
        (row as i64 - cy) % MAP_STEP == 0 && (col as i64 - cx) % MAP_STEP == 0
    }

    fn glyph(&self, room: RoomId) -> char {
        if room == self.viewer.location {
            return self.viewer.marker();
        }
        self.graph.symbol(room).unwrap_or_else(|| {
            symbols::sector_symbol(self.graph.sector(room).unwrap_or_default())
        })
    }
}

impl<G: RoomGraph + ?Sized> WormVisitor for Painter<'_, G> {
    fn enter(&mut self, room: RoomId, at: Coordinates) {
        let Some(cell) = self.cell_of(at) else {
            return;
        };
        let (cy, cx) = self.center;
        let is_center = cell == (cy as usize, cx as usize);
        // Inconsistent exits can land another room on the viewer's cell.
        if is_center && room != self.viewer.location {
            return;
        }
        if self.is_room_cell(cell) {
            let glyph = self.glyph(room);
            self.grid.set(cell.0, cell.1, glyph);
        }
    }

    fn step(
        &mut self,
        _from: RoomId,
        from_at: Coordinates,
        to_at: Coordinates,
        direction: Direction,
    ) -> bool {
        let Some(to) = self.cell_of(to_at) else {
            return false;
        };
        let Some(from) = self.cell_of(from_at) else {
            return true;
        };
        if self.is_room_cell(from) && self.is_room_cell(to) {
            let glyph = if direction.is_horizontal() {
                CONNECTOR_EW
            } else {
                CONNECTOR_NS
            };
            self.grid
                .set((from.0 + to.0) / 2, (from.1 + to.1) / 2, glyph);
        }
        true
    }
}

/// Render the overhead map around a viewer.
///
/// The viewer's room sits at the center cell; rooms reachable through
/// north, south, east, and west exits are drawn two cells apart with a
/// connector between them, out to [`MapConfig::radius`] exits. Rooms are
/// only read.
pub fn render_map<G: RoomGraph + ?Sized>(
    graph: &G,
    viewer: &Viewer,
    config: &MapConfig,
) -> AtlasResult<MapGrid> {
    config.validate()?;

    let (row, col) = config.center();
    let painter = Painter {
        graph,
        viewer: *viewer,
        grid: MapGrid::blank(config.width, config.height),
        center: (row as i64, col as i64),
    };

    let (walk, painter) = Worm::walk(
        graph,
        viewer.location,
        Coordinates::new(0, 0),
        WalkConfig::map(config.radius()),
        painter,
    )?;

    tracing::debug!(
        viewer = %viewer.location,
        rooms = walk.len(),
        width = config.width,
        height = config.height,
        "rendered minimap"
    );
    Ok(painter.grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dw_core::{Exit, Room, SectorType, World, WorldMeta};

    fn world() -> World {
        World::new(WorldMeta::new("Map Test"))
    }

    fn lines(grid: &MapGrid) -> Vec<String> {
        grid.to_string().lines().map(str::to_string).collect()
    }

    #[test]
    fn lone_room_is_just_the_marker() {
        let mut w = world();
        let here = w.add_room(Room::new("Here")).unwrap();
        let viewer = Viewer::in_room(&w, here).unwrap();

        let grid = render_map(&w, &viewer, &MapConfig::default()).unwrap();
        let text = grid.to_string();

        assert_eq!(text.lines().count(), 21);
        assert!(text.ends_with('\n'));
        for line in text.lines() {
            assert_eq!(line.chars().count(), 21 * 2 - 1);
        }
        assert_eq!(grid.cell(10, 10), Some(SELF_INDOOR));
        assert_eq!(text.chars().filter(|c| !c.is_whitespace()).count(), 1);
    }

    #[test]
    fn outdoor_viewer_gets_outdoor_marker() {
        let mut w = world();
        let here = w.add_room(Room::new("Field").outdoor()).unwrap();
        let viewer = Viewer::in_room(&w, here).unwrap();

        let grid = render_map(&w, &viewer, &MapConfig::square(5)).unwrap();
        assert_eq!(grid.cell(2, 2), Some(SELF_OUTDOOR));
    }

    #[test]
    fn east_neighbour_with_connector() {
        let mut w = world();
        let here = w.add_room(Room::new("Here")).unwrap();
        let east = w
            .add_room(Room::new("Woods").with_sector(SectorType::Forest))
            .unwrap();
        w.dig(here, Direction::East, east).unwrap();

        let grid = render_map(&w, &Viewer::in_room(&w, here).unwrap(), &MapConfig::square(5)).unwrap();
        assert_eq!(lines(&grid)[2], "    & - ¡");
    }

    #[test]
    fn north_neighbour_is_above() {
        let mut w = world();
        let here = w.add_room(Room::new("Here")).unwrap();
        let north = w.add_room(Room::new("Up North")).unwrap();
        w.dig(here, Direction::North, north).unwrap();

        let grid = render_map(&w, &Viewer::in_room(&w, here).unwrap(), &MapConfig::square(5)).unwrap();
        assert_eq!(grid.cell(0, 2), Some('.'));
        assert_eq!(grid.cell(1, 2), Some(CONNECTOR_NS));
        assert_eq!(grid.cell(2, 2), Some(SELF_INDOOR));
    }

    #[test]
    fn explicit_symbol_wins_over_sector() {
        let mut w = world();
        let here = w.add_room(Room::new("Here")).unwrap();
        let shop = w
            .add_room(Room::new("Shop").with_sector(SectorType::Inside).with_symbol('$'))
            .unwrap();
        let hall = w
            .add_room(Room::new("Hall").with_sector(SectorType::Inside))
            .unwrap();
        w.dig(here, Direction::West, shop).unwrap();
        w.dig(here, Direction::South, hall).unwrap();

        let grid = render_map(&w, &Viewer::in_room(&w, here).unwrap(), &MapConfig::square(5)).unwrap();
        assert_eq!(grid.cell(2, 0), Some('$'));
        assert_eq!(grid.cell(2, 1), Some(CONNECTOR_EW));
        assert_eq!(grid.cell(4, 2), Some('#'));
    }

    #[test]
    fn diagonals_and_odd_labels_are_not_drawn() {
        let mut w = world();
        let here = w.add_room(Room::new("Here")).unwrap();
        let ne = w.add_room(Room::new("Tower")).unwrap();
        let shop = w.add_room(Room::new("Shop")).unwrap();
        w.dig(here, Direction::Northeast, ne).unwrap();
        w.add_exit(Exit::new(here, "enter shop", shop)).unwrap();

        let grid = render_map(&w, &Viewer::in_room(&w, here).unwrap(), &MapConfig::default()).unwrap();
        let text = grid.to_string();
        assert_eq!(text.chars().filter(|c| !c.is_whitespace()).count(), 1);
    }

    #[test]
    fn radius_limits_what_is_shown() {
        let mut w = world();
        let rooms: Vec<RoomId> = (0..5)
            .map(|i| w.add_room(Room::new(format!("R{i}"))).unwrap())
            .collect();
        for pair in rooms.windows(2) {
            w.dig(pair[0], Direction::East, pair[1]).unwrap();
        }

        // 9 columns: radius 2, so R0 plus two rooms east.
        let config = MapConfig::square(9);
        let grid = render_map(&w, &Viewer::in_room(&w, rooms[0]).unwrap(), &config).unwrap();
        assert_eq!(lines(&grid)[4], "        & - . - .");
    }

    #[test]
    fn rendering_leaves_rooms_untouched() {
        let mut w = world();
        let here = w.add_room(Room::new("Here").at(40, 2)).unwrap();
        let east = w.add_room(Room::new("East").at(-7, 9)).unwrap();
        w.dig(here, Direction::East, east).unwrap();

        render_map(&w, &Viewer::in_room(&w, here).unwrap(), &MapConfig::default()).unwrap();
        assert_eq!(w.coordinates(here), Some(Coordinates::new(40, 2)));
        assert_eq!(w.coordinates(east), Some(Coordinates::new(-7, 9)));
    }

    #[test]
    fn wide_viewport_keeps_its_shape() {
        let mut w = world();
        let here = w.add_room(Room::new("Here")).unwrap();
        let east = w.add_room(Room::new("East")).unwrap();
        let north = w.add_room(Room::new("North")).unwrap();
        w.dig(here, Direction::East, east).unwrap();
        w.dig(here, Direction::North, north).unwrap();

        let config = MapConfig::square(21).with_height(9);
        let grid = render_map(&w, &Viewer::in_room(&w, here).unwrap(), &config).unwrap();
        let rows = lines(&grid);

        assert_eq!(rows.len(), 9);
        assert!(rows.iter().all(|row| row.chars().count() == 41));
        assert_eq!(grid.cell(4, 10), Some(SELF_INDOOR));
        assert_eq!(grid.cell(4, 11), Some(CONNECTOR_EW));
        assert_eq!(grid.cell(3, 10), Some(CONNECTOR_NS));
        assert_eq!(grid.cell(2, 10), Some('.'));
    }

    #[test]
    fn bad_dimensions_rejected() {
        let mut w = world();
        let here = w.add_room(Room::new("Here")).unwrap();
        let viewer = Viewer::in_room(&w, here).unwrap();
        let result = render_map(&w, &viewer, &MapConfig::square(20));
        assert!(matches!(result, Err(AtlasError::InvalidDimensions { .. })));
    }

    #[test]
    fn missing_viewer_room_rejected() {
        let w = world();
        assert!(Viewer::in_room(&w, RoomId::new()).is_err());
        let viewer = Viewer::new(RoomId::new(), Setting::Indoor);
        let result = render_map(&w, &viewer, &MapConfig::default());
        assert!(matches!(result, Err(AtlasError::StartNotFound(_))));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn shape_and_connectors_hold_on_random_graphs(
                edges in proptest::collection::vec((0usize..10, 0usize..10, 0usize..4), 0..40),
                width in proptest::sample::select(vec![1usize, 5, 9, 11, 21]),
                height in proptest::sample::select(vec![1usize, 3, 9, 13, 21]),
            ) {
                let mut w = world();
                let rooms: Vec<RoomId> = (0..10)
                    .map(|i| w.add_room(Room::new(format!("N{i}"))).unwrap())
                    .collect();
                for (from, to, dir) in edges {
                    let label = Direction::PLANAR[dir].as_str();
                    w.add_exit(Exit::new(rooms[from], label, rooms[to])).unwrap();
                }

                let config = MapConfig::square(width).with_height(height);
                let grid = render_map(&w, &Viewer::in_room(&w, rooms[0]).unwrap(), &config).unwrap();
                let text = grid.to_string();

                prop_assert_eq!(text.lines().count(), height);
                for line in text.lines() {
                    prop_assert_eq!(line.chars().count(), width * 2 - 1);
                }
                prop_assert_eq!((grid.width(), grid.height()), (width, height));
                let (cy, cx) = config.center();
                prop_assert_eq!(grid.cell(cy, cx), Some(SELF_INDOOR));

                for row in 0..height {
                    for col in 0..width {
                        let glyph = grid.cell(row, col).unwrap();
                        let dr = row.abs_diff(cy);
                        let dc = col.abs_diff(cx);
                        let room_cell = dr % 2 == 0 && dc % 2 == 0;
                        if glyph == CONNECTOR_EW {
                            prop_assert!(dr % 2 == 0 && dc % 2 == 1);
                            prop_assert!(col >= 1);
                            prop_assert_ne!(grid.cell(row, col - 1), Some(BLANK));
                            prop_assert_ne!(grid.cell(row, col + 1), Some(BLANK));
                        } else if glyph == CONNECTOR_NS {
                            prop_assert!(dr % 2 == 1 && dc % 2 == 0);
                            prop_assert!(row >= 1);
                            prop_assert_ne!(grid.cell(row - 1, col), Some(BLANK));
                            prop_assert_ne!(grid.cell(row + 1, col), Some(BLANK));
                        } else if glyph != BLANK {
                            prop_assert!(room_cell);
                        }
                    }
                }
            }
        }
    }
}
