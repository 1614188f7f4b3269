use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::direction::Direction;
use crate::room::RoomId;

/// Unique identifier for an exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExitId(pub Uuid);

impl ExitId {
    /// Generates a new random exit identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ExitId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A directed passage from one room to another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exit {
    /// Unique identifier for this exit.
    pub id: ExitId,
    /// The room the exit leads out of.
    pub source: RoomId,
    /// The room the exit leads into.
    pub destination: RoomId,
    /// Free-form label players type to use the exit ("east", "enter shop").
    pub label: String,
    /// Alternative names for the exit.
    pub aliases: Vec<String>,
}

impl Exit {
    /// Creates a new exit from `source` to `destination` with the given label.
    pub fn new(source: RoomId, label: impl Into<String>, destination: RoomId) -> Self {
        Self {
            id: ExitId::new(),
            source,
            destination,
            label: label.into(),
            aliases: Vec::new(),
        }
    }

    /// The compass direction of this exit, if its label names one.
    pub fn direction(&self) -> Option<Direction> {
        Direction::parse(&self.label)
    }
}
