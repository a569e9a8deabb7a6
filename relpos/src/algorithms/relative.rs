//! Relative pointing of a JFoV sample in the frame of its matched FFoV sample.

use qtty::{Degree, Degrees, Radian};
use serde::{Deserialize, Serialize};

use crate::core::domain::{MatchedPair, RelativeResult};
use crate::geometry::rotate_to_frame;

/// Mount-specific baseline the computed angles are compared against.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceAngles {
    /// Baseline rotation in degrees
    pub rotation_deg: f64,
    /// Baseline tilt in degrees
    pub tilt_deg: f64,
}

impl ReferenceAngles {
    pub fn new(rotation_deg: f64, tilt_deg: f64) -> Self {
        Self {
            rotation_deg,
            tilt_deg,
        }
    }
}

/// Project the JFoV pointing of `pair` into the frame whose pole is the FFoV
/// pointing and derive rotation, tilt and residuals against `reference`.
///
/// Tilt is reported as `90° - latitude` in the FFoV frame, i.e. the angular
/// distance between the two field centers.
pub fn compute(pair: &MatchedPair<'_>, reference: &ReferenceAngles) -> RelativeResult {
    let (jfov, ffov) = (pair.jfov, pair.ffov);

    let (lon, lat) = rotate_to_frame(
        ffov.ra().to::<Radian>(),
        ffov.dec().to::<Radian>(),
        jfov.ra().to::<Radian>(),
        jfov.dec().to::<Radian>(),
    );

    let rotation = lon.to::<Degree>().wrap_pos().value();
    let tilt = 90.0 - lat.to::<Degree>().value();

    RelativeResult {
        jfov_ra: jfov.ra().value(),
        jfov_dec: jfov.dec().value(),
        jfov_source_id: jfov.source_id().to_string(),
        ffov_ra: ffov.ra().value(),
        ffov_dec: ffov.dec().value(),
        ffov_source_id: ffov.source_id().to_string(),
        rotation,
        tilt,
        rotation_residual: rotation_residual(reference.rotation_deg, rotation),
        tilt_residual: reference.tilt_deg - tilt,
    }
}

/// `reference - rotation`, wrapped into `(-180, 180]`.
///
/// # Examples
///
/// ```
/// use gwac_relpos::algorithms::relative::rotation_residual;
/// assert_eq!(rotation_residual(0.0, 350.0), 10.0);
/// assert_eq!(rotation_residual(350.0, 0.0), -10.0);
/// ```
pub fn rotation_residual(reference_deg: f64, rotation_deg: f64) -> f64 {
    Degrees::new(reference_deg - rotation_deg).wrap_signed().value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::AngularSample;
    use proptest::prelude::*;

    fn sample(ra: f64, dec: f64, name: &str) -> AngularSample {
        AngularSample::new(Degrees::new(ra), Degrees::new(dec), 3600.0, name, 171028).unwrap()
    }

    #[test]
    fn test_residual_wraps_forward() {
        assert_eq!(rotation_residual(0.0, 350.0), 10.0);
    }

    #[test]
    fn test_residual_boundaries() {
        assert_eq!(rotation_residual(180.0, 0.0), 180.0);
        assert_eq!(rotation_residual(0.0, 180.0), 180.0);
        assert_eq!(rotation_residual(90.0, 90.0), 0.0);
    }

    #[test]
    fn test_identical_pointings_collapse_to_pole() {
        // JFoV on top of the FFoV center: tilt vanishes, rotation is not defined
        let j = sample(10.0, 20.0, "j");
        let f = sample(10.0, 20.0, "f");
        let pair = MatchedPair::new(&j, &f, 0);
        let result = compute(&pair, &ReferenceAngles::default());
        assert!(result.tilt.abs() < 1e-6);
        assert!((0.0..360.0).contains(&result.rotation));
    }

    #[test]
    fn test_offset_along_declination() {
        // JFoV one degree north of the FFoV center on the same meridian
        let j = sample(150.0, 31.0, "j");
        let f = sample(150.0, 30.0, "f");
        let pair = MatchedPair::new(&j, &f, 0);
        let result = compute(&pair, &ReferenceAngles::new(170.0, 2.0));
        assert!((result.tilt - 1.0).abs() < 1e-9);
        assert!((result.rotation - 180.0).abs() < 1e-6);
        assert!((result.rotation_residual + 10.0).abs() < 1e-6);
        assert!((result.tilt_residual - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_offset_along_right_ascension() {
        // JFoV east of the FFoV center on the equator lands at rotation 90
        let j = sample(12.0, 0.0, "j");
        let f = sample(10.0, 0.0, "f");
        let pair = MatchedPair::new(&j, &f, 0);
        let result = compute(&pair, &ReferenceAngles::default());
        assert!((result.tilt - 2.0).abs() < 1e-9);
        assert!((result.rotation - 90.0).abs() < 1e-9);
        assert!((result.rotation_residual + 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_result_carries_source_records() {
        let j = sample(1.5, 2.5, "G041_objt_171028T01000000.fit");
        let f = sample(3.5, 4.5, "G040_objt_171028T01000100.fit");
        let pair = MatchedPair::new(&j, &f, 7);
        let result = compute(&pair, &ReferenceAngles::default());
        assert_eq!(result.jfov_ra, 1.5);
        assert_eq!(result.jfov_dec, 2.5);
        assert_eq!(result.jfov_source_id, "G041_objt_171028T01000000.fit");
        assert_eq!(result.ffov_ra, 3.5);
        assert_eq!(result.ffov_dec, 4.5);
        assert_eq!(result.ffov_source_id, "G040_objt_171028T01000100.fit");
    }

    proptest! {
        #[test]
        fn prop_residual_in_half_open_range(reference in 0.0..360.0f64, rotation in 0.0..360.0f64) {
            let r = rotation_residual(reference, rotation);
            prop_assert!(r > -180.0 && r <= 180.0, "residual {} out of range", r);
            // Wrapping only ever shifts by whole turns
            let turns = (reference - rotation - r) / 360.0;
            prop_assert!((turns - turns.round()).abs() < 1e-9);
        }

        #[test]
        fn prop_angles_in_range(
            ra0 in 0.0..360.0f64, dec0 in -89.0..89.0f64,
            dra in -5.0..5.0f64, ddec in -5.0..5.0f64,
        ) {
            let dec = (dec0 + ddec).clamp(-90.0, 90.0);
            let j = sample((ra0 + dra).rem_euclid(360.0), dec, "j");
            let f = sample(ra0, dec0, "f");
            let pair = MatchedPair::new(&j, &f, 0);
            let result = compute(&pair, &ReferenceAngles::default());
            prop_assert!((0.0..360.0).contains(&result.rotation));
            prop_assert!(result.tilt >= -1e-9 && result.tilt <= 180.0 + 1e-9);
        }
    }
}
