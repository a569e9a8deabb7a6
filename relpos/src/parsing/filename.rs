use anyhow::{bail, Context, Result};
use std::path::Path;

use crate::core::domain::CameraId;
use crate::time::{parse_calendar_date, parse_time_of_day};

/// Observation-type marker that inserts an extra field before the image type
const MONITOR_MARKER: &str = "mon";

/// Recognised FITS extensions, stripped case-insensitively
const FITS_EXTENSIONS: &[&str] = &[".fit", ".fits"];

/// Fields decoded from a GWAC FITS filename.
#[derive(Debug, Clone, PartialEq)]
pub struct FitsName {
    pub camera: CameraId,
    /// `true` for `G<cid>_mon_<imgtype>_...` names
    pub monitor: bool,
    pub image_type: String,
    /// Acquisition date as `YYMMDD`
    pub calendar_date: u32,
    /// Acquisition time in seconds since midnight
    pub time_of_day: f64,
}

/// Decode a FITS filename of the form `G<cid>_<imgtype>_<YYMMDD>T<hhmmssff>.fit`
/// or `G<cid>_mon_<imgtype>_<YYMMDD>T<hhmmssff>.fit`.
///
/// Any leading directory is ignored. `ff` is hundredths of a second.
pub fn parse_fits_filename(name: &str) -> Result<FitsName> {
    let base = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("Not a file name: {:?}", name))?;

    let stem = strip_fits_extension(base);
    let body = stem
        .strip_prefix('G')
        .with_context(|| format!("FITS name does not start with 'G': {}", base))?;

    let fields: Vec<&str> = body.split('_').collect();
    let (camera_field, middle, stamp) = match fields.as_slice() {
        [camera, middle @ .., stamp] if !middle.is_empty() => (*camera, middle, *stamp),
        _ => bail!("FITS name has too few fields: {}", base),
    };

    let camera = CameraId::parse(camera_field)
        .with_context(|| format!("Invalid camera id {:?} in {}", camera_field, base))?;

    let (monitor, image_type) = match middle {
        [marker, image_type] if marker.eq_ignore_ascii_case(MONITOR_MARKER) => {
            (true, *image_type)
        }
        [image_type] => (false, *image_type),
        _ => bail!("Unexpected image type fields in {}", base),
    };

    let (date_field, time_field) = stamp
        .split_once(['T', 't'])
        .with_context(|| format!("Timestamp is not YYMMDDThhmmssff in {}", base))?;

    let calendar_date =
        parse_calendar_date(date_field).with_context(|| format!("Bad date in {}", base))?;
    let time_of_day =
        parse_time_of_day(time_field).with_context(|| format!("Bad time in {}", base))?;

    Ok(FitsName {
        camera,
        monitor,
        image_type: image_type.to_string(),
        calendar_date,
        time_of_day,
    })
}

fn strip_fits_extension(name: &str) -> &str {
    for ext in FITS_EXTENSIONS {
        let Some(cut) = name.len().checked_sub(ext.len()) else {
            continue;
        };
        if let (Some(stem), Some(tail)) = (name.get(..cut), name.get(cut..)) {
            if tail.eq_ignore_ascii_case(ext) {
                return stem;
            }
        }
    }
    name
}
