//! End-to-end relative pointing of a JFoV series against an FFoV series.

use anyhow::Context;
use log::{info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::algorithms::matching::{find_matches, DEFAULT_MAX_GAP_SECONDS};
use crate::algorithms::relative::{self, ReferenceAngles};
use crate::algorithms::statistics::{compute_statistics, Statistics};
use crate::core::domain::{RelativeResult, TimeSeries};
use crate::config::RelposConfig;
use crate::core::error::{RelposError, RelposResult};
use crate::io::loaders::{assign_streams, SeriesLoader};
use crate::io::report::{write_console_report, write_json, write_report_file, ReportFormat};
use crate::services::validation::check_preconditions;

/// Parameters of a single run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchSettings {
    pub max_gap_seconds: f64,
    pub reference: ReferenceAngles,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            max_gap_seconds: DEFAULT_MAX_GAP_SECONDS,
            reference: ReferenceAngles::default(),
        }
    }
}

/// Output of a run: one result per matched JFoV sample, in JFoV order.
#[derive(Debug, Clone, PartialEq)]
pub struct RelposRun {
    pub results: Vec<RelativeResult>,
    /// `None` when nothing matched
    pub statistics: Option<Statistics>,
}

impl RelposRun {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Statistics of a non-empty run, or [`RelposError::NoMatches`].
    pub fn require_matches(&self) -> RelposResult<&Statistics> {
        self.statistics.as_ref().ok_or(RelposError::NoMatches)
    }
}

/// Validate, match, project and aggregate.
///
/// Precondition failures abort before any matching. An empty match set is
/// returned as an empty run; callers decide how to report it.
pub fn run(
    jfov: &TimeSeries,
    ffov: &TimeSeries,
    settings: &MatchSettings,
) -> RelposResult<RelposRun> {
    check_preconditions(jfov, ffov)?;

    let pairs = find_matches(jfov, ffov, settings.max_gap_seconds)?;
    info!(
        "found {} matched points (JFoV G{}: {}, FFoV G{}: {})",
        pairs.len(),
        jfov.camera(),
        jfov.len(),
        ffov.camera(),
        ffov.len()
    );
    if pairs.is_empty() {
        warn!("{}", RelposError::NoMatches);
    }

    let results: Vec<RelativeResult> = pairs
        .iter()
        .map(|pair| relative::compute(pair, &settings.reference))
        .collect();
    let statistics = compute_statistics(&results);

    Ok(RelposRun {
        results,
        statistics,
    })
}

/// Run the whole tool on two pointing list files.
///
/// Loads and classifies both lists, runs the pipeline, prints the console
/// report to `out` and writes the result file when the configuration asks
/// for it. Returns the path of the written file; `None` when nothing matched,
/// when file output is disabled or when the file could not be created.
/// Fatal errors return before anything is printed or written.
pub fn execute<W: Write>(
    config: &RelposConfig,
    paths: [&Path; 2],
    format: ReportFormat,
    out: &mut W,
) -> anyhow::Result<Option<PathBuf>> {
    config.validate()?;

    let modulus = config.classification.ffov_camera_modulus;
    let load = |path: &Path| {
        info!("Resolving file: {}", path.display());
        SeriesLoader::load_from_file(path, modulus)
            .with_context(|| format!("fail to resolve file {}", path.display()))
    };
    let [first, second] = paths;
    let (jfov, ffov) = assign_streams(load(first)?, load(second)?)?;

    let outcome = run(&jfov, &ffov, &config.match_settings())?;

    if format == ReportFormat::Json {
        write_json(out, &outcome.results, outcome.statistics.as_ref())?;
    }

    let stats = match outcome.require_matches() {
        Ok(stats) => stats,
        Err(e) if !e.is_fatal() => {
            if format == ReportFormat::Table {
                writeln!(out, "{}", e)?;
            }
            out.flush()?;
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    if format == ReportFormat::Table {
        write_console_report(out, &outcome.results, Some(stats))?;
    }
    out.flush()?;

    if !config.output.write_file {
        return Ok(None);
    }

    match write_report_file(&config.output.directory, &jfov, &outcome.results) {
        Ok(path) => {
            info!("results are saved as file {}", path.display());
            Ok(Some(path))
        }
        Err(e) => {
            warn!("{:#}", e);
            Ok(None)
        }
    }
}
