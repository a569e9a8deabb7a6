//! Fixed-width result table, statistics block and JSON dump.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::algorithms::statistics::Statistics;
use crate::core::domain::{RelativeResult, TimeSeries};
use crate::time::format_hhmm;

/// Console rendition of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Fixed-width table followed by the statistics block
    #[default]
    Table,
    /// JSON document with results and statistics
    Json,
}

const STATISTICS_BANNER: &str =
    "****************************** Statistical results ******************************";

/// Column header of the result table
pub fn table_header() -> String {
    format!(
        "{:>8} {:>8} {:>33} {:>8} {:>8} {:>33} {:>5} {:>4} {:>6} {:>5}",
        "R.A.  ",
        "DEC.  ",
        "FileName            ",
        "R.A.0 ",
        "DEC.0 ",
        "FileName.0          ",
        "Rot ",
        "Tilt",
        "rRot ",
        "rTilt"
    )
}

/// One table row
pub fn format_row(result: &RelativeResult) -> String {
    format!(
        "{:8.4} {:8.4} {:>33} {:8.4} {:8.4} {:>33} {:5.1} {:4.1} {:6.1} {:5.1}",
        result.jfov_ra,
        result.jfov_dec,
        result.jfov_source_id,
        result.ffov_ra,
        result.ffov_dec,
        result.ffov_source_id,
        result.rotation,
        result.tilt,
        result.rotation_residual,
        result.tilt_residual
    )
}

/// Write the header and one row per result. Nothing is written for an empty
/// result list.
pub fn write_table<W: Write>(out: &mut W, results: &[RelativeResult]) -> std::io::Result<()> {
    if results.is_empty() {
        return Ok(());
    }

    writeln!(out, "{}", table_header())?;
    for result in results {
        writeln!(out, "{}", format_row(result))?;
    }
    Ok(())
}

pub fn write_statistics<W: Write>(out: &mut W, stats: &Statistics) -> std::io::Result<()> {
    writeln!(out, "{}", STATISTICS_BANNER)?;
    writeln!(
        out,
        "Rotation Minimum = {:6.1} \t Rotation Maximum = {:6.1}",
        stats.rotation_min, stats.rotation_max
    )?;
    writeln!(
        out,
        "Rotation Mean    = {:6.2} \t Rotation Stdev   = {:6.2}",
        stats.rotation_mean, stats.rotation_stdev
    )?;
    writeln!(
        out,
        "Tilt Minimum     = {:6.1} \t Tilt Maximum     = {:6.1}",
        stats.tilt_min, stats.tilt_max
    )?;
    writeln!(
        out,
        "Tilt Mean        = {:6.2} \t Tilt Stdev       = {:6.2}",
        stats.tilt_mean, stats.tilt_stdev
    )?;
    writeln!(out, "{}", STATISTICS_BANNER)
}

/// Console rendition: table followed by the statistics block
pub fn write_console_report<W: Write>(
    out: &mut W,
    results: &[RelativeResult],
    stats: Option<&Statistics>,
) -> std::io::Result<()> {
    write_table(out, results)?;
    if let Some(stats) = stats {
        write_statistics(out, stats)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    results: &'a [RelativeResult],
    statistics: Option<&'a Statistics>,
}

/// Pretty-printed JSON document with the results and statistics
pub fn write_json<W: Write>(
    out: &mut W,
    results: &[RelativeResult],
    stats: Option<&Statistics>,
) -> Result<()> {
    let report = JsonReport {
        results,
        statistics: stats,
    };
    serde_json::to_writer_pretty(&mut *out, &report).context("Failed to serialize report")?;
    writeln!(out)?;
    Ok(())
}

/// `G<cid>_<hhmm>-<hhmm>.txt` from the JFoV camera and its first and last
/// sample times; `None` for an empty series.
pub fn report_file_name(jfov: &TimeSeries) -> Option<String> {
    let first = jfov.first()?;
    let last = jfov.last()?;
    Some(format!(
        "G{}_{}-{}.txt",
        jfov.camera(),
        format_hhmm(first.time_of_day()),
        format_hhmm(last.time_of_day())
    ))
}

/// Write the result table into `directory` and return the file path.
pub fn write_report_file(
    directory: &Path,
    jfov: &TimeSeries,
    results: &[RelativeResult],
) -> Result<PathBuf> {
    let name = report_file_name(jfov).context("JFoV series is empty")?;
    let path = directory.join(name);

    let file = File::create(&path)
        .with_context(|| format!("Failed to create result file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_table(&mut writer, results)
        .and_then(|_| writer.flush())
        .with_context(|| format!("Failed to write result file {}", path.display()))?;

    Ok(path)
}
