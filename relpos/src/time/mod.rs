pub mod time_of_day;

pub use time_of_day::{
    format_hhmm, parse_calendar_date, parse_time_of_day, seconds_of_day,
};
