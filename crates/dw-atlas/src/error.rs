use dw_core::{DwError, RoomId};

/// Alias for `Result<T, AtlasError>`.
pub type AtlasResult<T> = Result<T, AtlasError>;

/// Errors raised at the boundary of the atlas operations.
///
/// Graph anomalies (unknown exit labels, rooms reached twice at different
/// offsets) are not errors; the walk skips them.
#[derive(Debug, thiserror::Error)]
pub enum AtlasError {
    /// The walk was asked to start from a room that does not exist.
    #[error("start room not found: {0}")]
    StartNotFound(RoomId),

    /// Map dimensions must be odd so the viewer has a center cell.
    #[error("invalid map dimensions {width}x{height}: both must be odd and between 1 and {max}")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
        /// Largest accepted dimension.
        max: usize,
    },

    /// The walk step must be positive.
    #[error("invalid walk step: {0}")]
    InvalidStep(i64),

    /// The underlying world rejected a write.
    #[error(transparent)]
    Core(#[from] DwError),
}
