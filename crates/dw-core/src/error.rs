use crate::room::RoomId;

/// Alias for `Result<T, DwError>`.
pub type DwResult<T> = Result<T, DwError>;

/// Errors that can occur when manipulating a world.
#[derive(Debug, thiserror::Error)]
pub enum DwError {
    /// The requested room ID does not exist in the world.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    /// A room with the same name already exists.
    #[error("room already exists: \"{0}\"")]
    DuplicateName(String),

    /// A named reference could not be resolved to an existing room.
    #[error("invalid reference: room \"{0}\" not found")]
    InvalidReference(String),

    /// A generic validation error with a descriptive message.
    #[error("validation error: {0}")]
    Validation(String),

    /// A world document could not be parsed or written.
    #[error("world document error: {0}")]
    Document(#[from] serde_json::Error),
}
