//! Loading of pointing lists into classified series, and report output.
//!
//! # Example
//!
//! ```no_run
//! use gwac_relpos::io::loaders::{assign_streams, SeriesLoader};
//! use std::path::Path;
//!
//! let a = SeriesLoader::load_from_file(Path::new("G041.txt"), 5).expect("Failed to load");
//! let b = SeriesLoader::load_from_file(Path::new("G040.txt"), 5).expect("Failed to load");
//! let (jfov, ffov) = assign_streams(a, b).expect("Missing field of view");
//! println!("{} JFoV points, {} FFoV points", jfov.len(), ffov.len());
//! ```

pub mod loaders;
pub mod report;


pub use loaders::{assign_streams, SeriesLoader};
pub use report::{
    report_file_name, write_console_report, write_json, write_report_file, ReportFormat,
};
