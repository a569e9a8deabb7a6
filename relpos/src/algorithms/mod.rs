//! Relative pointing algorithms.
//!
//! # Components
//!
//! - [`matching`]: Nearest-in-time pairing of JFoV and FFoV samples
//! - [`relative`]: Rotation and tilt of a JFoV pointing in the FFoV frame
//! - [`statistics`]: Summary statistics with rotation unwrapping
//!
//! # Example
//!
//! ```
//! use gwac_relpos::algorithms::{compute_statistics, find_matches, relative, ReferenceAngles};
//! use gwac_relpos::core::{AngularSample, CameraId, FieldOfView, TimeSeries};
//! use qtty::Degrees;
//!
//! let at = |ra: f64, dec: f64, t: f64| {
//!     AngularSample::new(Degrees::new(ra), Degrees::new(dec), t, "img.fit", 171028).unwrap()
//! };
//! let jfov = TimeSeries::new(CameraId::parse("041").unwrap(), FieldOfView::Jfov,
//!     vec![at(150.0, 31.0, 100.0)]).unwrap();
//! let ffov = TimeSeries::new(CameraId::parse("040").unwrap(), FieldOfView::Ffov,
//!     vec![at(150.0, 30.0, 102.0)]).unwrap();
//!
//! let results: Vec<_> = find_matches(&jfov, &ffov, 10.0)
//!     .unwrap()
//!     .iter()
//!     .map(|pair| relative::compute(pair, &ReferenceAngles::default()))
//!     .collect();
//! let stats = compute_statistics(&results).unwrap();
//! assert!((stats.tilt_mean - 1.0).abs() < 1e-9);
//! ```

pub mod matching;
pub mod relative;
pub mod statistics;

pub use matching::{find_matches, DEFAULT_MAX_GAP_SECONDS};
pub use relative::{rotation_residual, ReferenceAngles};
pub use statistics::{compute_statistics, unwrap_rotations, Statistics};
