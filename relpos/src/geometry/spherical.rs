//! Spherical/Cartesian conversion and active frame rotation.
//!
//! Longitudes and latitudes are in radians; latitude is measured from the
//! equatorial plane, not from the pole. Longitudes returned by
//! [`to_spherical`] are normalized into `[0, 2π)`.
//!
//! [`rotate_to_frame`] re-expresses a direction in the frame whose pole sits at
//! `(pole_lon, pole_lat)`. The rotation first turns the frame by `-pole_lon`
//! about the z axis, bringing the pole into the XZ plane, then by
//! `-(π/2 - pole_lat)` about the new y axis, bringing it onto +z:
//!
//! ```text
//! | sinβ0·cosα0   sinβ0·sinα0   -cosβ0 |
//! |    -sinα0        cosα0         0   |
//! | cosβ0·cosα0   cosβ0·sinα0    sinβ0 |
//! ```

use std::f64::consts::TAU;

use nalgebra::{Matrix3, Vector3};
use qtty::Radians;

/// A direction and distance in spherical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalPoint {
    pub radius: f64,
    pub longitude: Radians,
    pub latitude: Radians,
}

/// Convert spherical coordinates to a Cartesian vector.
///
/// # Examples
///
/// ```
/// use gwac_relpos::geometry::to_cartesian;
/// use qtty::Radians;
///
/// let v = to_cartesian(1.0, Radians::new(0.0), Radians::new(std::f64::consts::FRAC_PI_2));
/// assert!((v.z - 1.0).abs() < 1e-12);
/// ```
pub fn to_cartesian(radius: f64, longitude: Radians, latitude: Radians) -> Vector3<f64> {
    let (sin_lon, cos_lon) = longitude.sin_cos();
    let (sin_lat, cos_lat) = latitude.sin_cos();
    Vector3::new(
        radius * cos_lat * cos_lon,
        radius * cos_lat * sin_lon,
        radius * sin_lat,
    )
}

/// Convert a Cartesian vector to spherical coordinates.
pub fn to_spherical(v: &Vector3<f64>) -> SphericalPoint {
    let mut longitude = v.y.atan2(v.x);
    if longitude < 0.0 {
        longitude += TAU;
        // tiny negatives round up to a full turn
        if longitude >= TAU {
            longitude = 0.0;
        }
    }
    SphericalPoint {
        radius: v.norm(),
        longitude: Radians::new(longitude),
        latitude: Radians::new(v.z.atan2(v.x.hypot(v.y))),
    }
}

/// Rotation matrix taking the direction `(pole_lon, pole_lat)` onto +z.
fn frame_rotation(pole_lon: Radians, pole_lat: Radians) -> Matrix3<f64> {
    let (sa, ca) = pole_lon.sin_cos();
    let (sb, cb) = pole_lat.sin_cos();
    Matrix3::new(
        sb * ca, sb * sa, -cb, //
        -sa, ca, 0.0, //
        cb * ca, cb * sa, sb,
    )
}

/// Re-express the unit direction `(lon, lat)` in the frame whose pole is
/// `(pole_lon, pole_lat)`. Returns the new `(longitude, latitude)`.
///
/// A pole of `(0, π/2)` is the identity. When the point coincides with the pole
/// the result has latitude `π/2` and its longitude is numerically undefined.
pub fn rotate_to_frame(
    pole_lon: Radians,
    pole_lat: Radians,
    lon: Radians,
    lat: Radians,
) -> (Radians, Radians) {
    let rotated = frame_rotation(pole_lon, pole_lat) * to_cartesian(1.0, lon, lat);
    let point = to_spherical(&rotated);
    (point.longitude, point.latitude)
}
