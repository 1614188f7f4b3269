use std::fmt;

use serde::{Deserialize, Serialize};

/// An integer grid position.
///
/// East is +X and north is +Y. Coordinates are plain values: moving
/// through an exit produces a new value rather than mutating a cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinates {
    /// Position along the west-east axis.
    pub x: i64,
    /// Position along the south-north axis.
    pub y: i64,
}

impl Coordinates {
    /// Create a coordinate pair.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The coordinates reached by moving `step` units in `direction`.
    ///
    /// Returns `None` for directions without a planar component (up, down)
    /// and for moves that would leave the `i64` range.
    pub fn offset(self, direction: Direction, step: i64) -> Option<Self> {
        let (dx, dy) = direction.delta()?;
        Some(Self {
            x: self.x.checked_add(dx.checked_mul(step)?)?,
            y: self.y.checked_add(dy.checked_mul(step)?)?,
        })
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A compass direction an exit can be labelled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// +Y
    North,
    /// -Y
    South,
    /// +X
    East,
    /// -X
    West,
    /// +X +Y
    Northeast,
    /// -X +Y
    Northwest,
    /// +X -Y
    Southeast,
    /// -X -Y
    Southwest,
    /// Vertical; no planar offset.
    Up,
    /// Vertical; no planar offset.
    Down,
}

impl Direction {
    /// The eight planar directions, cardinals first.
    pub const PLANAR: [Direction; 8] = [
        Self::North,
        Self::East,
        Self::South,
        Self::West,
        Self::Northeast,
        Self::Southeast,
        Self::Southwest,
        Self::Northwest,
    ];

    /// Parse a free-form exit label.
    ///
    /// Labels are trimmed and case-normalized. Full names and the usual
    /// abbreviations are accepted; anything else (e.g. "enter building")
    /// is not a direction.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();
        match label.as_str() {
            "north" | "n" => Some(Self::North),
            "south" | "s" => Some(Self::South),
            "east" | "e" => Some(Self::East),
            "west" | "w" => Some(Self::West),
            "northeast" | "north-east" | "north east" | "ne" => Some(Self::Northeast),
            "northwest" | "north-west" | "north west" | "nw" => Some(Self::Northwest),
            "southeast" | "south-east" | "south east" | "se" => Some(Self::Southeast),
            "southwest" | "south-west" | "south west" | "sw" => Some(Self::Southwest),
            "up" | "u" => Some(Self::Up),
            "down" | "d" => Some(Self::Down),
            _ => None,
        }
    }

    /// Unit offset on the grid, or `None` for up/down.
    pub fn delta(self) -> Option<(i64, i64)> {
        match self {
            Self::North => Some((0, 1)),
            Self::South => Some((0, -1)),
            Self::East => Some((1, 0)),
            Self::West => Some((-1, 0)),
            Self::Northeast => Some((1, 1)),
            Self::Northwest => Some((-1, 1)),
            Self::Southeast => Some((1, -1)),
            Self::Southwest => Some((-1, -1)),
            Self::Up | Self::Down => None,
        }
    }

    /// Returns true for north, south, east, and west.
    pub fn is_cardinal(self) -> bool {
        matches!(self, Self::North | Self::South | Self::East | Self::West)
    }

    /// Returns true for any direction that moves across the grid.
    pub fn is_planar(self) -> bool {
        self.delta().is_some()
    }

    /// Returns true for east and west.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::East | Self::West)
    }

    /// The direction leading back.
    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
            Self::Northeast => Self::Southwest,
            Self::Northwest => Self::Southeast,
            Self::Southeast => Self::Northwest,
            Self::Southwest => Self::Northeast,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// The canonical lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Northeast => "northeast",
            Self::Northwest => "northwest",
            Self::Southeast => "southeast",
            Self::Southwest => "southwest",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which directions a traversal follows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compass {
    /// North, south, east, west.
    Cardinal,
    /// The cardinals plus the four diagonals.
    #[default]
    Full,
}

impl Compass {
    /// Returns true if a walk using this compass follows `direction`.
    pub fn follows(self, direction: Direction) -> bool {
        match self {
            Self::Cardinal => direction.is_cardinal(),
            Self::Full => direction.is_planar(),
        }
    }
}
