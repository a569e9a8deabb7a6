//! Parsers for GWAC pointing list files.
//!
//! A pointing list is a plain text file with one solved image per line:
//! right ascension and declination of the field center (degrees) followed by
//! the FITS filename the solution came from. The filename itself encodes the
//! camera and the acquisition timestamp.
//!
//! # Parsers
//!
//! - [`pointing_parser`]: Parse the `ra dec filename` lines
//! - [`filename`]: Decode `G<cid>_<imgtype>_<YYMMDD>T<hhmmssff>.fit` names
//!
//! # Example
//!
//! ```no_run
//! use gwac_relpos::parsing::pointing_parser::parse_pointing_file;
//! use std::path::Path;
//!
//! let records = parse_pointing_file(Path::new("G041.txt"))
//!     .expect("Failed to parse pointing list");
//! ```

pub mod filename;
pub mod pointing_parser;


pub use filename::{parse_fits_filename, FitsName};
pub use pointing_parser::{parse_pointing_file, parse_pointing_str, PointingRecord};
