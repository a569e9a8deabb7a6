//! Relative pointing command-line tool
//!
//! Matches the pointings of a JFoV camera against its FFoV reference camera
//! and reports rotation and tilt of the JFoV center for every matched image.
//!
//! # Usage
//!
//! ```bash
//! relpos G041_list.txt G040_list.txt 180.0 1.5
//! relpos G040_list.txt G041_list.txt --max-gap 5 --format json --no-file
//! ```
//!
//! The two lists may be given in any order. The optional positional angles
//! are the reference rotation and tilt used for the residual columns.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use gwac_relpos::config::RelposConfig;
use gwac_relpos::io::report::ReportFormat;
use gwac_relpos::services::relpos::execute;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Fixed-width table followed by the statistics block
    Table,
    /// JSON document with results and statistics
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => ReportFormat::Table,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "relpos",
    version,
    about = "GWAC JFoV rotation and tilt relative to the FFoV"
)]
struct Args {
    /// First pointing list (`ra dec fits_filename` per line)
    path1: PathBuf,

    /// Second pointing list
    path2: PathBuf,

    /// Reference rotation in degrees
    #[arg(allow_negative_numbers = true)]
    rotation_base: Option<f64>,

    /// Reference tilt in degrees
    #[arg(allow_negative_numbers = true)]
    tilt_base: Option<f64>,

    /// Configuration file (default: relpos.toml in the working or parent directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Largest accepted time difference between matched images, in seconds
    #[arg(long)]
    max_gap: Option<f64>,

    /// Directory receiving the result file
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Do not write the result file
    #[arg(long)]
    no_file: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

impl Args {
    fn apply_to(&self, config: &mut RelposConfig) {
        if let Some(rotation) = self.rotation_base {
            config.reference.rotation_deg = rotation;
        }
        if let Some(tilt) = self.tilt_base {
            config.reference.tilt_deg = tilt;
        }
        if let Some(gap) = self.max_gap {
            config.matching.max_gap_seconds = gap;
        }
        if let Some(dir) = &self.output_dir {
            config.output.directory = dir.clone();
        }
        if self.no_file {
            config.output.write_file = false;
        }
    }
}

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => RelposConfig::from_file(path)?,
        None => RelposConfig::from_default_location()?,
    };
    args.apply_to(&mut config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(
        &config,
        [args.path1.as_path(), args.path2.as_path()],
        args.format.into(),
        &mut out,
    )?;

    Ok(())
}
