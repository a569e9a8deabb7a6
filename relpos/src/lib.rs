//! GWAC relative pointing.
//!
//! Determines the rotation and tilt of a narrow-field (JFoV) camera relative
//! to the wide-field (FFoV) reference camera sharing its mount, from two
//! independently sampled streams of solved pointings.
//!
//! Pipeline: [`io::loaders`] builds two classified [`core::TimeSeries`],
//! [`services::validation`] checks them, [`algorithms::matching`] pairs them
//! in time, [`algorithms::relative`] projects each pair and
//! [`algorithms::statistics`] summarizes the results for [`io::report`].

pub mod algorithms;
pub mod config;
pub mod core;
pub mod geometry;
pub mod io;
pub mod parsing;
pub mod services;
pub mod time;
