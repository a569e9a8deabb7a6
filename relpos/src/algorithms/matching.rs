//! Nearest-in-time matching of JFoV samples against the FFoV stream.
//!
//! Both streams are sorted by time of day, so the distance from a JFoV time
//! to successive FFoV samples falls and then rises. A single cursor walks the
//! FFoV stream forward across all JFoV samples; it never rewinds, which keeps
//! the whole scan at O(n_jfov + n_ffov) and guarantees that successive matches
//! never go back in FFoV time.

use log::debug;

use crate::core::domain::{AngularSample, FieldOfView, MatchedPair, TimeSeries};
use crate::core::error::{RelposError, RelposResult};

/// Largest accepted time difference between matched samples, in seconds
pub const DEFAULT_MAX_GAP_SECONDS: f64 = 10.0;

/// Pair every JFoV sample with its nearest FFoV sample.
///
/// JFoV samples whose nearest FFoV sample is more than `max_gap_seconds` away
/// are dropped. An empty JFoV series yields no pairs; an empty FFoV series
/// with JFoV samples to match is a precondition violation.
///
/// # Examples
///
/// ```
/// use gwac_relpos::algorithms::matching::find_matches;
/// use gwac_relpos::core::{AngularSample, CameraId, FieldOfView, TimeSeries};
/// use qtty::Degrees;
///
/// let sample = |t: f64| AngularSample::new(Degrees::new(0.0), Degrees::new(0.0), t, "x", 171028).unwrap();
/// let jfov = TimeSeries::new(CameraId::parse("041").unwrap(), FieldOfView::Jfov, vec![sample(3661.0)]).unwrap();
/// let ffov = TimeSeries::new(CameraId::parse("040").unwrap(), FieldOfView::Ffov,
///     vec![sample(3650.0), sample(3665.0)]).unwrap();
///
/// let pairs = find_matches(&jfov, &ffov, 10.0).unwrap();
/// assert_eq!(pairs.len(), 1);
/// assert_eq!(pairs[0].ffov_index, 1);
/// ```
pub fn find_matches<'a>(
    jfov: &'a TimeSeries,
    ffov: &'a TimeSeries,
    max_gap_seconds: f64,
) -> RelposResult<Vec<MatchedPair<'a>>> {
    if jfov.is_empty() {
        return Ok(Vec::new());
    }
    if ffov.is_empty() {
        return Err(RelposError::EmptySeries(FieldOfView::Ffov));
    }

    let reference = ffov.samples();
    let mut pairs = Vec::new();
    let mut cursor = 0;

    for sample in jfov.samples() {
        let t = sample.time_of_day();
        let (nearest, gap) = scan_nearest(reference, cursor, t);

        if gap > max_gap_seconds {
            debug!(
                "{} dropped: nearest FFoV sample {} is {:.2}s away",
                sample.source_id(),
                reference[nearest].source_id(),
                gap
            );
            continue;
        }

        cursor = nearest;
        pairs.push(MatchedPair::new(sample, &reference[nearest], nearest));
    }

    Ok(pairs)
}

/// Walk forward from `from` while the distance to `t` does not grow.
///
/// Returns the last index reached and its distance. Equal distances keep the
/// scan going so that duplicated timestamps cannot hide a closer sample.
fn scan_nearest(samples: &[AngularSample], from: usize, t: f64) -> (usize, f64) {
    let mut best = from;
    let mut best_distance = (t - samples[from].time_of_day()).abs();

    for (index, sample) in samples.iter().enumerate().skip(from + 1) {
        let distance = (t - sample.time_of_day()).abs();
        if distance > best_distance {
            break;
        }
        best = index;
        best_distance = distance;
    }

    (best, best_distance)
}
