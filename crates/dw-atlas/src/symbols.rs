//! Minimap glyphs.

use dw_core::SectorType;

/// The viewer's own cell when standing indoors.
pub const SELF_INDOOR: char = '&';
/// The viewer's own cell when standing outdoors.
pub const SELF_OUTDOOR: char = '@';
/// An empty cell.
pub const BLANK: char = ' ';
/// Connector between rooms joined east-west.
pub const CONNECTOR_EW: char = '-';
/// Connector between rooms joined north-south.
pub const CONNECTOR_NS: char = '|';

/// The glyph for a room of the given terrain.
pub fn sector_symbol(sector: SectorType) -> char {
    match sector {
        SectorType::Unknown => '.',
        SectorType::Inside => '#',
        SectorType::Road => '═',
        SectorType::Crossroads => '╬',
        SectorType::Trail => '╌',
        SectorType::Plains => '■',
        SectorType::Forest => '¡',
        SectorType::Jungle => '▓',
        SectorType::Mountains => '^',
        SectorType::Desert => '°',
        SectorType::Taiga => '¶',
        SectorType::Tundra => '≡',
        SectorType::Swamp => '§',
        SectorType::Savannah => '░',
        SectorType::Shore => '▄',
        SectorType::Water => '█',
        SectorType::Fields => '▒',
        SectorType::City => '©',
    }
}
