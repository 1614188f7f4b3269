//! Error types for the resolver.

/// Errors raised when a roll is requested with inputs it cannot honour.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// Step numbers run from 1 to the supported maximum.
    #[error("invalid step {step}: must be between 1 and {max}")]
    InvalidStep {
        /// The rejected step.
        step: i64,
        /// Largest supported step.
        max: u32,
    },

    /// Distribution rolls need a positive, finite mean.
    #[error("invalid mean {0}: must be positive and finite")]
    InvalidMean(f64),

    /// The named shape is not one of the known spreads.
    #[error("unknown shape: {0}")]
    UnknownShape(String),

    /// Resolver settings that would make rolls meaningless.
    #[error("invalid resolver config: {0}")]
    InvalidConfig(String),

    /// The normal distribution rejected its parameters.
    #[error("invalid distribution: {0}")]
    Distribution(#[from] rand_distr::NormalError),
}

/// Convenience result type for resolver operations.
pub type MechResult<T> = Result<T, MechError>;
