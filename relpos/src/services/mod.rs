//! Service layer wiring loading, validation, matching, aggregation and
//! reporting into a run.

pub mod relpos;
pub mod validation;

pub use relpos::{execute, run, MatchSettings, RelposRun};
pub use validation::{check_preconditions, overlaps, validate_single_day};
