//! Core domain models for relative pointing.
//!
//! This module defines the typed records handed between the parsing layer and
//! the matching/projection algorithms: pointing samples, per-camera time
//! series, matched pairs and the final per-pair results.

pub mod domain;
pub mod error;

pub use domain::{
    AngularSample, CameraId, FieldOfView, MatchedPair, RelativeResult, TimeSeries,
    SECONDS_PER_DAY,
};
pub use error::{RelposError, RelposResult};
