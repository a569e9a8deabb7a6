use anyhow::{Context, Result};
use log::{debug, info, warn};
use qtty::Degrees;
use std::path::Path;

use crate::core::domain::{AngularSample, CameraId, FieldOfView, TimeSeries};
use crate::core::error::{RelposError, RelposResult};
use crate::parsing::filename::parse_fits_filename;
use crate::parsing::pointing_parser::{self, PointingRecord};

/// Builds classified camera series from pointing list files
pub struct SeriesLoader;

impl SeriesLoader {
    /// Load a pointing list file and classify it by its first camera.
    ///
    /// Returns `Ok(None)` for a file without records.
    pub fn load_from_file(path: &Path, ffov_modulus: u32) -> Result<Option<TimeSeries>> {
        let records = pointing_parser::parse_pointing_file(path)?;

        let series = Self::build_series(&records, ffov_modulus)
            .with_context(|| format!("Failed to load series from {}", path.display()))?;

        match &series {
            Some(series) => info!(
                "{}: camera G{} classified as {}, {} points",
                path.display(),
                series.camera(),
                series.field(),
                series.len()
            ),
            None => warn!("{}: no pointing records", path.display()),
        }

        Ok(series)
    }

    /// Load pointing list content already held in memory
    pub fn load_from_str(content: &str, ffov_modulus: u32) -> Result<Option<TimeSeries>> {
        let records = pointing_parser::parse_pointing_str(content)?;
        Self::build_series(&records, ffov_modulus)
    }

    /// Turn parsed records into a time series of a single camera.
    pub fn build_series(
        records: &[PointingRecord],
        ffov_modulus: u32,
    ) -> Result<Option<TimeSeries>> {
        let mut camera: Option<(CameraId, FieldOfView)> = None;
        let mut samples = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            let name = parse_fits_filename(&record.filename)
                .with_context(|| format!("Record {}: {}", index + 1, record.filename))?;

            let (expected, field) = camera.get_or_insert_with(|| {
                let field = name.camera.classify(ffov_modulus);
                debug!(
                    "camera G{} ({}{} frames) classified as {}",
                    name.camera,
                    if name.monitor { "mon_" } else { "" },
                    name.image_type,
                    field
                );
                (name.camera.clone(), field)
            });
            if *expected != name.camera {
                let mixed = RelposError::MixedCameras {
                    field: *field,
                    expected: expected.label().to_string(),
                    found: name.camera.label().to_string(),
                };
                return Err(anyhow::Error::new(mixed)
                    .context(format!("Record {}: {}", index + 1, record.filename)));
            }

            let sample = AngularSample::new(
                Degrees::new(record.ra),
                Degrees::new(record.dec),
                name.time_of_day,
                record.filename.clone(),
                name.calendar_date,
            )?;
            samples.push(sample);
        }

        let Some((camera, field)) = camera else {
            return Ok(None);
        };

        let series = TimeSeries::new(camera, field, samples)?;
        Ok(Some(series))
    }
}

/// Sort two loaded series into `(jfov, ffov)` regardless of argument order.
///
/// A missing class, whether from an empty file or from two files of the same
/// class, is reported as [`RelposError::EmptySeries`].
pub fn assign_streams(
    first: Option<TimeSeries>,
    second: Option<TimeSeries>,
) -> RelposResult<(TimeSeries, TimeSeries)> {
    let mut jfov = None;
    let mut ffov = None;

    for series in [first, second].into_iter().flatten() {
        let slot = match series.field() {
            FieldOfView::Jfov => &mut jfov,
            FieldOfView::Ffov => &mut ffov,
        };
        if let Some(previous) = slot.replace(series) {
            warn!(
                "two {} inputs given, ignoring camera G{}",
                previous.field(),
                previous.camera()
            );
        }
    }

    let jfov = jfov.ok_or(RelposError::EmptySeries(FieldOfView::Jfov))?;
    let ffov = ffov.ok_or(RelposError::EmptySeries(FieldOfView::Ffov))?;
    Ok((jfov, ffov))
}
