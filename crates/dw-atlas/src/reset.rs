//! Zone-wide coordinate resets.
//!
//! A reset walks every room reachable from a start room and writes the
//! walk's coordinates back onto them, optionally copying zone metadata
//! from the start room along the way.

use dw_core::{RoomGraphMut, RoomId, ZoneField};

use crate::config::WalkConfig;
use crate::error::{AtlasError, AtlasResult};
use crate::worm::Worm;

/// Options for a zone-wide coordinate reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetOptions {
    /// Metadata copied from the start room onto every other room reached.
    pub propagate: Vec<ZoneField>,
    /// How the worm walks.
    pub config: WalkConfig,
}

impl ResetOptions {
    /// Also copy `field` from the start room.
    pub fn with_field(mut self, field: ZoneField) -> Self {
        if !self.propagate.contains(&field) {
            self.propagate.push(field);
        }
        self
    }

    /// Replace the walk configuration.
    pub fn with_config(mut self, config: WalkConfig) -> Self {
        self.config = config;
        self
    }
}

/// Re-derive the coordinates of every room reachable from `start`.
///
/// The start room keeps its current coordinates; everything else is placed
/// one unit per compass exit away from it. Returns the number of rooms
/// written, the start room included.
pub fn reset_zone_coordinates<G: RoomGraphMut + ?Sized>(
    graph: &mut G,
    start: RoomId,
) -> AtlasResult<usize> {
    reset_zone_coordinates_with(graph, start, &ResetOptions::default())
}

/// [`reset_zone_coordinates`] with explicit options.
pub fn reset_zone_coordinates_with<G: RoomGraphMut + ?Sized>(
    graph: &mut G,
    start: RoomId,
    options: &ResetOptions,
) -> AtlasResult<usize> {
    let origin = graph
        .coordinates(start)
        .ok_or(AtlasError::StartNotFound(start))?;
    let walk = Worm::coordinates(&*graph, start, origin, options.config.clone())?;

    for (room, at) in walk.iter() {
        graph.set_coordinates(room, at)?;
        if room == start {
            continue;
        }
        for field in &options.propagate {
            graph.copy_field(start, room, *field)?;
        }
    }

    tracing::info!(
        %start,
        %origin,
        rooms = walk.len(),
        "zone coordinates reset"
    );
    Ok(walk.len())
}
