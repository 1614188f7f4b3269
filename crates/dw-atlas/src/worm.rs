//! The coordinate worm.
//!
//! An ephemeral depth-first walker: it starts at one room, follows compass
//! exits, and records where each newly reached room sits relative to the
//! start. What happens at each room and edge is up to a [`WormVisitor`].

use std::collections::HashMap;

use dw_core::{Coordinates, Direction, RoomGraph, RoomId};

use crate::config::WalkConfig;
use crate::error::{AtlasError, AtlasResult};

/// Hooks a [`Worm`] calls while it walks.
///
/// Both methods have no-op defaults; `()` is the visitor that only collects
/// coordinates.
pub trait WormVisitor {
    /// A room was reached for the first time and recorded at `at`.
    fn enter(&mut self, room: RoomId, at: Coordinates) {
        let _ = (room, at);
    }

    /// The worm is about to move from `from` through `direction`.
    ///
    /// Called before the destination is recorded. Returning `false` prunes
    /// the edge: the destination is left unrecorded and may still be reached
    /// by another path.
    fn step(
        &mut self,
        from: RoomId,
        from_at: Coordinates,
        to_at: Coordinates,
        direction: Direction,
    ) -> bool {
        let _ = (from, from_at, to_at, direction);
        true
    }
}

impl WormVisitor for () {}

/// Coordinates assigned by one walk.
#[derive(Debug, Clone)]
pub struct Walk {
    /// The room the walk started from.
    pub start: RoomId,
    coordinates: HashMap<RoomId, Coordinates>,
    order: Vec<RoomId>,
}

impl Walk {
    fn new(start: RoomId) -> Self {
        Self {
            start,
            coordinates: HashMap::new(),
            order: Vec::new(),
        }
    }

    fn record(&mut self, room: RoomId, at: Coordinates) {
        self.coordinates.insert(room, at);
        self.order.push(room);
    }

    /// Number of rooms visited, the start included.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if nothing was visited.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Where the walk placed a room.
    pub fn get(&self, room: RoomId) -> Option<Coordinates> {
        self.coordinates.get(&room).copied()
    }

    /// Returns true if the walk reached the room.
    pub fn contains(&self, room: RoomId) -> bool {
        self.coordinates.contains_key(&room)
    }

    /// Rooms in the order they were first reached.
    pub fn order(&self) -> &[RoomId] {
        &self.order
    }

    /// `(room, coordinates)` pairs in visit order.
    pub fn iter(&self) -> impl Iterator<Item = (RoomId, Coordinates)> + '_ {
        self.order
            .iter()
            .filter_map(|room| self.get(*room).map(|at| (*room, at)))
    }
}

/// One room being expanded: its qualifying exits and how far through
/// them the worm has got.
struct Frame {
    room: RoomId,
    exits: Vec<(Direction, RoomId)>,
    next: usize,
    depth: usize,
}

/// A depth-first walker that gives rooms grid coordinates.
///
/// The worm only lives for one walk. Exits are taken in the graph's order;
/// labels that are not compass directions followed by the configured
/// [`Compass`](dw_core::Compass) are ignored. A room already recorded is
/// never entered again, so the first path to reach a room decides its
/// coordinates and cycles terminate.
pub struct Worm<'g, G: RoomGraph + ?Sized, V: WormVisitor> {
    graph: &'g G,
    config: WalkConfig,
    visitor: V,
    walk: Walk,
    stack: Vec<Frame>,
}

impl<'g, G: RoomGraph + ?Sized, V: WormVisitor> Worm<'g, G, V> {
    /// Prepare a worm at `start`, placing that room at `origin`.
    pub fn new(
        graph: &'g G,
        start: RoomId,
        origin: Coordinates,
        config: WalkConfig,
        visitor: V,
    ) -> AtlasResult<Self> {
        config.validate()?;
        if !graph.contains(start) {
            return Err(AtlasError::StartNotFound(start));
        }

        let mut worm = Self {
            graph,
            config,
            visitor,
            walk: Walk::new(start),
            stack: Vec::new(),
        };
        worm.walk.record(start, origin);
        worm.visitor.enter(start, origin);
        worm.push(start, 0);
        Ok(worm)
    }

    /// Walk until every reachable branch is exhausted or out of depth.
    ///
    /// Returns the coordinates and the visitor.
    pub fn run(mut self) -> (Walk, V) {
        while let Some(frame) = self.stack.last_mut() {
            let Some(&(direction, destination)) = frame.exits.get(frame.next) else {
                self.stack.pop();
                continue;
            };
            frame.next += 1;
            let from = frame.room;
            let depth = frame.depth + 1;

            if self.walk.contains(destination) {
                continue;
            }

            // The cursor always comes from the recorded position of the room
            // being expanded, never from the last room the worm stood in.
            let Some(here) = self.walk.get(from) else {
                continue;
            };
            let Some(there) = here.offset(direction, self.config.step) else {
                continue;
            };

            if !self.visitor.step(from, here, there, direction) {
                tracing::trace!(%from, %destination, %direction, "edge pruned");
                continue;
            }

            self.walk.record(destination, there);
            self.visitor.enter(destination, there);
            self.push(destination, depth);
        }

        tracing::debug!(
            start = %self.walk.start,
            rooms = self.walk.len(),
            "worm finished"
        );
        (self.walk, self.visitor)
    }

    /// Walk a graph in one call with a visitor.
    pub fn walk(
        graph: &'g G,
        start: RoomId,
        origin: Coordinates,
        config: WalkConfig,
        visitor: V,
    ) -> AtlasResult<(Walk, V)> {
        Ok(Self::new(graph, start, origin, config, visitor)?.run())
    }

    fn push(&mut self, room: RoomId, depth: usize) {
        if self.config.max_depth.is_some_and(|max| depth >= max) {
            return;
        }

        let compass = self.config.compass;
        let exits = self
            .graph
            .exits(room)
            .into_iter()
            .filter_map(|(label, destination)| {
                let direction = Direction::parse(&label)?;
                compass.follows(direction).then_some((direction, destination))
            })
            .collect();

        self.stack.push(Frame {
            room,
            exits,
            next: 0,
            depth,
        });
    }
}

impl<'g, G: RoomGraph + ?Sized> Worm<'g, G, ()> {
    /// Assign coordinates without a visitor.
    pub fn coordinates(
        graph: &'g G,
        start: RoomId,
        origin: Coordinates,
        config: WalkConfig,
    ) -> AtlasResult<Walk> {
        Ok(Self::new(graph, start, origin, config, ())?.run().0)
    }
}
