//! Error types for the relative pointing pipeline.

use super::domain::FieldOfView;

/// Result type for relative pointing operations
pub type RelposResult<T> = Result<T, RelposError>;

/// Error type for relative pointing operations
#[derive(Debug, thiserror::Error)]
pub enum RelposError {
    #[error("{0} data is unavailable")]
    EmptySeries(FieldOfView),

    #[error("{field} data spans more than one date: {first:06} and {other:06}")]
    MultiDayInput {
        field: FieldOfView,
        first: u32,
        other: u32,
    },

    #[error("time range do not match: JFoV date {jfov:06}, FFoV date {ffov:06}")]
    NoOverlap { jfov: u32, ffov: u32 },

    #[error("no any data matches condition")]
    NoMatches,

    #[error("samples out of time order at index {index}: {previous:.2}s then {current:.2}s")]
    UnorderedSeries {
        index: usize,
        previous: f64,
        current: f64,
    },

    #[error("{field} list mixes cameras: expected G{expected}, found G{found}")]
    MixedCameras {
        field: FieldOfView,
        expected: String,
        found: String,
    },

    #[error("time of day out of range: {0}")]
    InvalidTimeOfDay(f64),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl RelposError {
    /// Whether the error aborts the run. Only an empty match set ends normally.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, RelposError::NoMatches)
    }
}
