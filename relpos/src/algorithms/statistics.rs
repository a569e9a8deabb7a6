use qtty::Degrees;
use serde::{Deserialize, Serialize};

use crate::core::domain::RelativeResult;

/// Aggregate rotation and tilt statistics over a result list.
///
/// Rotation minimum, maximum and mean are reported in `[0, 360)`; the
/// rotation standard deviation is computed on the unwrapped sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub rotation_min: f64,
    pub rotation_max: f64,
    pub rotation_mean: f64,
    pub rotation_stdev: f64,
    pub tilt_min: f64,
    pub tilt_max: f64,
    pub tilt_mean: f64,
    pub tilt_stdev: f64,
}

/// Min, max, mean and population standard deviation of a sample
#[derive(Debug, Clone, Copy, PartialEq)]
struct Summary {
    min: f64,
    max: f64,
    mean: f64,
    stdev: f64,
}

fn summarize(values: &[f64]) -> Option<Summary> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    Some(Summary {
        min,
        max,
        mean,
        stdev: variance.sqrt(),
    })
}

/// Remove 0°/360° jumps from a rotation sequence.
///
/// The first value seeds the sequence. Every following value is shifted by
/// ±360 when it lies more than 180° away from the previous unwrapped value.
///
/// # Examples
///
/// ```
/// use gwac_relpos::algorithms::statistics::unwrap_rotations;
/// assert_eq!(unwrap_rotations(&[359.0, 1.0, 358.0]), vec![359.0, 361.0, 358.0]);
/// ```
pub fn unwrap_rotations(rotations: &[f64]) -> Vec<f64> {
    let mut unwrapped = Vec::with_capacity(rotations.len());
    let Some(&seed) = rotations.first() else {
        return unwrapped;
    };

    let mut previous = seed;
    for &rotation in rotations {
        let delta = rotation - previous;
        previous = if delta > 180.0 {
            rotation - 360.0
        } else if delta < -180.0 {
            rotation + 360.0
        } else {
            rotation
        };
        unwrapped.push(previous);
    }

    unwrapped
}

/// Compute summary statistics; `None` for an empty result list.
pub fn compute_statistics(results: &[RelativeResult]) -> Option<Statistics> {
    let rotations: Vec<f64> = results.iter().map(|r| r.rotation).collect();
    let tilts: Vec<f64> = results.iter().map(|r| r.tilt).collect();

    let rotation = summarize(&unwrap_rotations(&rotations))?;
    let tilt = summarize(&tilts)?;
    let rewrap = |deg: f64| Degrees::new(deg).wrap_pos().value();

    Some(Statistics {
        rotation_min: rewrap(rotation.min),
        rotation_max: rewrap(rotation.max),
        rotation_mean: rewrap(rotation.mean),
        rotation_stdev: rotation.stdev,
        tilt_min: tilt.min,
        tilt_max: tilt.max,
        tilt_mean: tilt.mean,
        tilt_stdev: tilt.stdev,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(rotation: f64, tilt: f64) -> RelativeResult {
        RelativeResult {
            jfov_ra: 0.0,
            jfov_dec: 0.0,
            jfov_source_id: "j".to_string(),
            ffov_ra: 0.0,
            ffov_dec: 0.0,
            ffov_source_id: "f".to_string(),
            rotation,
            tilt,
            rotation_residual: 0.0,
            tilt_residual: 0.0,
        }
    }

    #[test]
    fn test_empty_has_no_statistics() {
        assert!(compute_statistics(&[]).is_none());
        assert!(unwrap_rotations(&[]).is_empty());
    }

    #[test]
    fn test_single_result() {
        let stats = compute_statistics(&[result(123.0, 4.0)]).unwrap();
        assert_eq!(stats.rotation_min, 123.0);
        assert_eq!(stats.rotation_max, 123.0);
        assert_eq!(stats.rotation_mean, 123.0);
        assert_eq!(stats.rotation_stdev, 0.0);
        assert_eq!(stats.tilt_mean, 4.0);
        assert_eq!(stats.tilt_stdev, 0.0);
    }

    #[test]
    fn test_wraparound_mean() {
        // Naive averaging of 358 and 2 would give 180
        let stats = compute_statistics(&[result(358.0, 1.0), result(2.0, 3.0)]).unwrap();
        assert!(stats.rotation_mean.abs() < 1e-9 || (stats.rotation_mean - 360.0).abs() < 1e-9);
        assert!((stats.rotation_stdev - 2.0).abs() < 1e-9);
        assert_eq!(stats.rotation_min, 358.0);
        assert_eq!(stats.rotation_max, 2.0);
        assert_eq!(stats.tilt_min, 1.0);
        assert_eq!(stats.tilt_max, 3.0);
        assert_eq!(stats.tilt_mean, 2.0);
        assert_eq!(stats.tilt_stdev, 1.0);
    }

    #[test]
    fn test_mean_rewrapped_from_negative() {
        let stats = compute_statistics(&[result(1.0, 0.0), result(355.0, 0.0), result(357.0, 0.0)])
            .unwrap();
        // unwrapped: 1, -5, -3 -> mean -7/3
        assert!((stats.rotation_mean - (360.0 - 7.0 / 3.0)).abs() < 1e-9);
        assert!((stats.rotation_min - 355.0).abs() < 1e-9);
        assert!((stats.rotation_max - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_unwrap_half_turn_threshold() {
        // A jump of exactly 180 is kept
        assert_eq!(unwrap_rotations(&[10.0, 190.0]), vec![10.0, 190.0]);
        assert_eq!(unwrap_rotations(&[10.0, 190.5]), vec![10.0, -169.5]);
        assert_eq!(unwrap_rotations(&[190.5, 10.0]), vec![190.5, 370.0]);
        assert_eq!(unwrap_rotations(&[350.0, 10.0, 30.0]), vec![350.0, 370.0, 390.0]);
    }

    #[test]
    fn test_population_stdev() {
        let stats = compute_statistics(&[
            result(10.0, 2.0),
            result(20.0, 4.0),
            result(30.0, 4.0),
            result(40.0, 4.0),
            result(50.0, 5.0),
            result(60.0, 5.0),
            result(70.0, 7.0),
            result(80.0, 9.0),
        ])
        .unwrap();
        assert!((stats.tilt_mean - 5.0).abs() < 1e-12);
        assert!((stats.tilt_stdev - 2.0).abs() < 1e-12);
        assert!((stats.rotation_mean - 45.0).abs() < 1e-12);
    }
}
