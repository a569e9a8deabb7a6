//! Domain models for pointing samples, per-camera time series and match results.
//!
//! A GWAC mount carries a wide-field reference camera (FFoV) and narrow-field
//! cameras (JFoV). Each camera produces its own stream of solved pointings;
//! this module holds those streams as immutable, validated values.

use std::fmt;

use chrono::NaiveDate;
use qtty::Degrees;
use serde::{Deserialize, Serialize};

use super::error::{RelposError, RelposResult};

/// Number of seconds in a civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Which field of view a camera stream belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldOfView {
    /// Narrow field camera whose offset is measured.
    Jfov,
    /// Wide field reference camera.
    Ffov,
}

impl FieldOfView {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldOfView::Jfov => "JFoV",
            FieldOfView::Ffov => "FFoV",
        }
    }
}

impl fmt::Display for FieldOfView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Camera label as written in the FITS filename (e.g. `"041"`).
///
/// The label is kept verbatim for output file naming; the numeric value drives
/// the JFoV/FFoV classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CameraId {
    label: String,
    number: u32,
}

impl CameraId {
    /// Parse a camera label. Returns `None` unless the label is all ASCII digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use gwac_relpos::core::CameraId;
    ///
    /// let cam = CameraId::parse("041").unwrap();
    /// assert_eq!(cam.number(), 41);
    /// assert_eq!(cam.label(), "041");
    /// assert!(CameraId::parse("4a").is_none());
    /// ```
    pub fn parse(label: &str) -> Option<Self> {
        if label.is_empty() || !label.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let number = label.parse().ok()?;
        Some(Self {
            label: label.to_string(),
            number,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    /// Classify the camera. Camera numbers that are multiples of `ffov_modulus`
    /// are FFoV cameras, every other camera is a JFoV.
    ///
    /// # Examples
    ///
    /// ```
    /// use gwac_relpos::core::{CameraId, FieldOfView};
    ///
    /// assert_eq!(CameraId::parse("040").unwrap().classify(5), FieldOfView::Ffov);
    /// assert_eq!(CameraId::parse("041").unwrap().classify(5), FieldOfView::Jfov);
    /// ```
    pub fn classify(&self, ffov_modulus: u32) -> FieldOfView {
        if ffov_modulus != 0 && self.number % ffov_modulus == 0 {
            FieldOfView::Ffov
        } else {
            FieldOfView::Jfov
        }
    }
}

impl fmt::Display for CameraId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// One solved pointing of a camera at a given instant.
///
/// The time of day is stored in seconds since midnight with the 0.01 s
/// resolution of the acquisition timestamps; the calendar date is kept as the
/// `YYMMDD` integer of the filename.
#[derive(Debug, Clone, PartialEq)]
pub struct AngularSample {
    ra: Degrees,
    dec: Degrees,
    time_of_day: f64,
    source_id: String,
    calendar_date: u32,
}

impl AngularSample {
    /// Creates a sample, rejecting a time of day outside `[0, 86400)`.
    pub fn new(
        ra: Degrees,
        dec: Degrees,
        time_of_day: f64,
        source_id: impl Into<String>,
        calendar_date: u32,
    ) -> RelposResult<Self> {
        if !(0.0..SECONDS_PER_DAY).contains(&time_of_day) {
            return Err(RelposError::InvalidTimeOfDay(time_of_day));
        }
        Ok(Self {
            ra,
            dec,
            time_of_day,
            source_id: source_id.into(),
            calendar_date,
        })
    }

    pub fn ra(&self) -> Degrees {
        self.ra
    }

    pub fn dec(&self) -> Degrees {
        self.dec
    }

    /// Seconds elapsed since midnight.
    pub fn time_of_day(&self) -> f64 {
        self.time_of_day
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// Observation date as the `YYMMDD` integer.
    pub fn calendar_date(&self) -> u32 {
        self.calendar_date
    }

    /// Observation date, if the `YYMMDD` value names a real day.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&format!("{:06}", self.calendar_date), "%y%m%d").ok()
    }
}

/// Time-ordered pointing samples of a single camera.
///
/// The series owns its samples and is read-only once built. Construction
/// enforces non-decreasing time of day; the single-date requirement is checked
/// separately by [`crate::services::validation`] so that it can be reported as
/// its own error.
#[derive(Debug, Clone)]
pub struct TimeSeries {
    camera: CameraId,
    field: FieldOfView,
    samples: Vec<AngularSample>,
}

impl TimeSeries {
    pub fn new(
        camera: CameraId,
        field: FieldOfView,
        samples: Vec<AngularSample>,
    ) -> RelposResult<Self> {
        if let Some(index) = samples
            .windows(2)
            .position(|w| w[1].time_of_day < w[0].time_of_day)
        {
            return Err(RelposError::UnorderedSeries {
                index: index + 1,
                previous: samples[index].time_of_day,
                current: samples[index + 1].time_of_day,
            });
        }
        Ok(Self {
            camera,
            field,
            samples,
        })
    }

    pub fn camera(&self) -> &CameraId {
        &self.camera
    }

    pub fn field(&self) -> FieldOfView {
        self.field
    }

    pub fn samples(&self) -> &[AngularSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&AngularSample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&AngularSample> {
        self.samples.last()
    }

    /// Seconds of day of every sample, in series order.
    pub fn seconds_of_day(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(AngularSample::time_of_day)
    }

    /// Date of the first sample.
    pub fn calendar_date(&self) -> Option<u32> {
        self.first().map(AngularSample::calendar_date)
    }
}

/// A JFoV sample joined with its nearest-in-time FFoV sample.
#[derive(Debug, Clone, Copy)]
pub struct MatchedPair<'a> {
    pub jfov: &'a AngularSample,
    pub ffov: &'a AngularSample,
    /// Index of `ffov` inside its series.
    pub ffov_index: usize,
    /// FFoV time minus JFoV time, in seconds.
    pub time_delta: f64,
}

impl<'a> MatchedPair<'a> {
    pub fn new(jfov: &'a AngularSample, ffov: &'a AngularSample, ffov_index: usize) -> Self {
        Self {
            jfov,
            ffov,
            ffov_index,
            time_delta: ffov.time_of_day - jfov.time_of_day,
        }
    }
}

/// Relative pointing of one JFoV sample against its matched FFoV sample.
///
/// Angles are in degrees. `rotation` is the JFoV longitude in the FFoV
/// centered frame, `tilt` is its co-latitude there. The residuals are the
/// reference baseline minus the computed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelativeResult {
    pub jfov_ra: f64,
    pub jfov_dec: f64,
    pub jfov_source_id: String,
    pub ffov_ra: f64,
    pub ffov_dec: f64,
    pub ffov_source_id: String,
    pub rotation: f64,
    pub tilt: f64,
    pub rotation_residual: f64,
    pub tilt_residual: f64,
}
