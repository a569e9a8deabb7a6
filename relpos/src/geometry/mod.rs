//! Spherical coordinate geometry.
//!
//! - [`spherical`]: spherical/Cartesian conversion and rotation into a frame
//!   whose pole is a given direction.

pub mod spherical;

pub use spherical::{rotate_to_frame, to_cartesian, to_spherical, SphericalPoint};
