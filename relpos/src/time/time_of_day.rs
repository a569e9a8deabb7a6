use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, NaiveTime, Timelike};

/// Parse a `YYMMDD` date field and return it as the `YYMMDD` integer.
///
/// The value must name a real calendar day.
///
/// # Example
/// ```
/// use gwac_relpos::time::parse_calendar_date;
/// assert_eq!(parse_calendar_date("171028").unwrap(), 171028);
/// assert!(parse_calendar_date("171301").is_err());
/// ```
pub fn parse_calendar_date(field: &str) -> Result<u32> {
    if field.len() != 6 || !field.bytes().all(|b| b.is_ascii_digit()) {
        bail!("Date field must be six digits (YYMMDD): {:?}", field);
    }
    NaiveDate::parse_from_str(field, "%y%m%d")
        .with_context(|| format!("Invalid calendar date: {}", field))?;
    Ok(field.parse()?)
}

/// Parse a `hhmmssff` time field (`ff` in hundredths of a second) into seconds
/// since midnight.
///
/// # Example
/// ```
/// use gwac_relpos::time::parse_time_of_day;
/// let secs = parse_time_of_day("01010150").unwrap();
/// assert!((secs - 3661.5).abs() < 1e-9);
/// ```
pub fn parse_time_of_day(field: &str) -> Result<f64> {
    if field.len() != 8 || !field.bytes().all(|b| b.is_ascii_digit()) {
        bail!("Time field must be eight digits (hhmmssff): {:?}", field);
    }
    let hh: u32 = field[0..2].parse()?;
    let mm: u32 = field[2..4].parse()?;
    let ss: u32 = field[4..6].parse()?;
    let ff: u32 = field[6..8].parse()?;

    let time = NaiveTime::from_hms_milli_opt(hh, mm, ss, ff * 10)
        .with_context(|| format!("Invalid time of day: {}", field))?;

    Ok(seconds_of_day(&time))
}

/// Seconds elapsed since midnight, with sub-second resolution.
pub fn seconds_of_day(time: &NaiveTime) -> f64 {
    time.num_seconds_from_midnight() as f64 + time.nanosecond() as f64 / 1e9
}

/// Format a time of day as `hhmm`, truncating seconds.
///
/// # Example
/// ```
/// use gwac_relpos::time::format_hhmm;
/// assert_eq!(format_hhmm(3661.0), "0101");
/// assert_eq!(format_hhmm(86399.99), "2359");
/// ```
pub fn format_hhmm(seconds: f64) -> String {
    let total_minutes = (seconds.max(0.0) / 60.0).floor() as u64;
    format!("{:02}{:02}", (total_minutes / 60) % 24, total_minutes % 60)
}
