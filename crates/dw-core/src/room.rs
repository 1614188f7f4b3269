use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::direction::Coordinates;
use crate::error::{DwError, DwResult};

/// Unique identifier for every room in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub Uuid);

impl RoomId {
    /// Generate a new random room ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RoomId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Whether a room is under a roof.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Setting {
    /// Inside a building, cave, ship, etc.
    #[default]
    Indoor,
    /// Open sky.
    Outdoor,
}

impl Setting {
    /// Returns true for outdoor rooms.
    pub fn is_outdoor(self) -> bool {
        self == Self::Outdoor
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Indoor => write!(f, "indoor"),
            Self::Outdoor => write!(f, "outdoor"),
        }
    }
}

/// Terrain or category tag of a room, used to pick a map glyph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectorType {
    /// Nothing is known about the room.
    #[default]
    Unknown,
    /// Any indoor space.
    Inside,
    /// A maintained road.
    Road,
    /// Where roads meet.
    Crossroads,
    /// A foot trail.
    Trail,
    /// Temperate grassland.
    Plains,
    /// Temperate woodland.
    Forest,
    /// Dense tropical growth.
    Jungle,
    /// Mountains and hills.
    Mountains,
    /// Desert and badlands.
    Desert,
    /// Boreal forest.
    Taiga,
    /// Frozen plain.
    Tundra,
    /// Wetland.
    Swamp,
    /// Tropical grassland.
    Savannah,
    /// Beach or coast.
    Shore,
    /// Open water.
    Water,
    /// Cultivated land.
    Fields,
    /// Built-up area.
    City,
}

impl SectorType {
    /// All sector types, in declaration order.
    pub const ALL: [SectorType; 18] = [
        Self::Unknown,
        Self::Inside,
        Self::Road,
        Self::Crossroads,
        Self::Trail,
        Self::Plains,
        Self::Forest,
        Self::Jungle,
        Self::Mountains,
        Self::Desert,
        Self::Taiga,
        Self::Tundra,
        Self::Swamp,
        Self::Savannah,
        Self::Shore,
        Self::Water,
        Self::Fields,
        Self::City,
    ];

    /// The snake_case tag used in world documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Inside => "inside",
            Self::Road => "road",
            Self::Crossroads => "crossroads",
            Self::Trail => "trail",
            Self::Plains => "plains",
            Self::Forest => "forest",
            Self::Jungle => "jungle",
            Self::Mountains => "mountains",
            Self::Desert => "desert",
            Self::Taiga => "taiga",
            Self::Tundra => "tundra",
            Self::Swamp => "swamp",
            Self::Savannah => "savannah",
            Self::Shore => "shore",
            Self::Water => "water",
            Self::Fields => "fields",
            Self::City => "city",
        }
    }
}

impl fmt::Display for SectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectorType {
    type Err = DwError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|sector| sector.as_str() == tag)
            .ok_or_else(|| DwError::Validation(format!("unknown sector type: \"{s}\"")))
    }
}

/// Glyphs the minimap draws between rooms; a room cannot use them.
pub const CONNECTOR_GLYPHS: [char; 2] = ['-', '|'];

/// Check that `symbol` can stand for a room in a one-glyph map cell.
///
/// Control characters, whitespace, and connector glyphs would break the
/// grid, so they are rejected.
pub fn check_symbol(symbol: char) -> DwResult<()> {
    if symbol.is_control() || symbol.is_whitespace() || CONNECTOR_GLYPHS.contains(&symbol) {
        return Err(DwError::Validation(format!(
            "invalid map symbol {symbol:?}: must be a visible, non-connector glyph"
        )));
    }
    Ok(())
}

/// Builder-editable info block of a room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomInfo {
    /// Zone the room belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    /// Indoor or outdoor.
    #[serde(default)]
    pub setting: Setting,
    /// Combat is not allowed here.
    #[serde(default)]
    pub non_combat: bool,
}

/// A room. Every place a character can stand is a Room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier for this room.
    pub id: RoomId,
    /// Display name (title) of the room.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Grid position of the room.
    pub coordinates: Coordinates,
    /// Zone, setting, and combat flags.
    pub info: RoomInfo,
    /// Terrain tag used for the fallback map glyph.
    pub sector: SectorType,
    /// Explicit map glyph, overriding the sector glyph.
    pub symbol: Option<char>,
    /// Meters above sea level.
    pub elevation: i64,
}

impl Room {
    /// Create a new room with a random ID at the origin.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: RoomId::new(),
            name: name.into(),
            description: String::new(),
            coordinates: Coordinates::default(),
            info: RoomInfo::default(),
            sector: SectorType::default(),
            symbol: None,
            elevation: 0,
        }
    }

    /// Set the starting coordinates.
    pub fn at(mut self, x: i64, y: i64) -> Self {
        self.coordinates = Coordinates::new(x, y);
        self
    }

    /// Set the sector type.
    pub fn with_sector(mut self, sector: SectorType) -> Self {
        self.sector = sector;
        self
    }

    /// Mark the room as outdoor.
    pub fn outdoor(mut self) -> Self {
        self.info.setting = Setting::Outdoor;
        self
    }

    /// Assign the room to a zone.
    pub fn in_zone(mut self, zone: impl Into<String>) -> Self {
        self.info.zone = Some(zone.into());
        self
    }

    /// Set an explicit map glyph.
    pub fn with_symbol(mut self, symbol: char) -> Self {
        self.symbol = Some(symbol);
        self
    }
}
