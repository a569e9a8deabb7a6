//! Precondition checks run once on the two input series before matching.
//!
//! Rules, in the order they are reported:
//! - both series hold at least one sample
//! - each series covers a single calendar date
//! - both series cover the same date

use crate::core::domain::{AngularSample, TimeSeries};
use crate::core::error::{RelposError, RelposResult};

/// Whether every sample of `series` shares the date of its first sample.
pub fn validate_single_day(series: &TimeSeries) -> bool {
    first_foreign_date(series).is_none()
}

/// Whether two series cover the same calendar date.
///
/// Only dates are compared; same-day series with disjoint time spans pass
/// here and end up with no matches.
pub fn overlaps(a: &TimeSeries, b: &TimeSeries) -> bool {
    match (a.calendar_date(), b.calendar_date()) {
        (Some(first), Some(second)) => first == second,
        _ => false,
    }
}

/// Validate a JFoV/FFoV series pair.
pub fn check_preconditions(jfov: &TimeSeries, ffov: &TimeSeries) -> RelposResult<()> {
    for series in [jfov, ffov] {
        if series.is_empty() {
            return Err(RelposError::EmptySeries(series.field()));
        }
    }

    for series in [jfov, ffov] {
        if let (Some(first), Some(other)) = (series.calendar_date(), first_foreign_date(series)) {
            return Err(RelposError::MultiDayInput {
                field: series.field(),
                first,
                other,
            });
        }
    }

    if !overlaps(jfov, ffov) {
        return Err(RelposError::NoOverlap {
            jfov: jfov.calendar_date().unwrap_or_default(),
            ffov: ffov.calendar_date().unwrap_or_default(),
        });
    }

    Ok(())
}

fn first_foreign_date(series: &TimeSeries) -> Option<u32> {
    let first = series.calendar_date()?;
    series
        .samples()
        .iter()
        .map(AngularSample::calendar_date)
        .find(|&date| date != first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::{CameraId, FieldOfView};
    use qtty::Degrees;

    fn series(field: FieldOfView, dates: &[u32]) -> TimeSeries {
        let camera = match field {
            FieldOfView::Jfov => "041",
            FieldOfView::Ffov => "040",
        };
        let samples = dates
            .iter()
            .enumerate()
            .map(|(i, &date)| {
                AngularSample::new(Degrees::new(0.0), Degrees::new(0.0), i as f64, "x", date)
                    .unwrap()
            })
            .collect();
        TimeSeries::new(CameraId::parse(camera).unwrap(), field, samples).unwrap()
    }

    #[test]
    fn test_single_day() {
        assert!(validate_single_day(&series(FieldOfView::Jfov, &[171028, 171028])));
        assert!(validate_single_day(&series(FieldOfView::Jfov, &[])));
        assert!(!validate_single_day(&series(FieldOfView::Jfov, &[171028, 171029])));
    }

    #[test]
    fn test_overlaps_compares_dates() {
        let j = series(FieldOfView::Jfov, &[171028]);
        assert!(overlaps(&j, &series(FieldOfView::Ffov, &[171028])));
        assert!(!overlaps(&j, &series(FieldOfView::Ffov, &[171029])));
        assert!(!overlaps(&j, &series(FieldOfView::Ffov, &[])));
    }

    #[test]
    fn test_preconditions_pass() {
        let j = series(FieldOfView::Jfov, &[171028, 171028]);
        let f = series(FieldOfView::Ffov, &[171028]);
        assert!(check_preconditions(&j, &f).is_ok());
    }

    #[test]
    fn test_empty_series_reported_first() {
        let j = series(FieldOfView::Jfov, &[171028]);
        let f = series(FieldOfView::Ffov, &[]);
        let err = check_preconditions(&j, &f).unwrap_err();
        assert!(matches!(err, RelposError::EmptySeries(FieldOfView::Ffov)));
        assert_eq!(err.to_string(), "FFoV data is unavailable");

        let j = series(FieldOfView::Jfov, &[]);
        let err = check_preconditions(&j, &f).unwrap_err();
        assert!(matches!(err, RelposError::EmptySeries(FieldOfView::Jfov)));
    }

    #[test]
    fn test_multi_day_before_overlap() {
        let j = series(FieldOfView::Jfov, &[171028]);
        let f = series(FieldOfView::Ffov, &[171027, 171028]);
        match check_preconditions(&j, &f) {
            Err(RelposError::MultiDayInput { field, first, other }) => {
                assert_eq!(field, FieldOfView::Ffov);
                assert_eq!(first, 171027);
                assert_eq!(other, 171028);
            }
            other => panic!("expected MultiDayInput, got {:?}", other),
        }
    }

    #[test]
    fn test_no_overlap() {
        let j = series(FieldOfView::Jfov, &[171028]);
        let f = series(FieldOfView::Ffov, &[171029]);
        let err = check_preconditions(&j, &f).unwrap_err();
        assert!(matches!(err, RelposError::NoOverlap { jfov: 171028, ffov: 171029 }));
        assert!(err.is_fatal());
    }
}
