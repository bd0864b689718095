//! Bikeshare core library: the filter-and-aggregate trip pipeline.
//!
//! Loads city trip-record CSV files, attaches derived month and weekday
//! fields to every record, filters by a user-chosen month and day of week,
//! and computes descriptive statistics as typed summaries for a front end
//! to render.

mod city;
mod error;
mod filter;
mod loader;
mod stats;
mod table;

pub use crate::{
    city::{City, UnknownCity},
    error::{LoadError, Result},
    filter::{
        DayFilter, FilterParseError, FilterSelection, Month, MonthFilter, month_name,
        weekday_name,
    },
    loader::load_table,
    stats::{BirthYearStats, DurationStats, StationStats, TimeStats, UserStats, format_clock},
    table::{TripRecord, TripTable},
};
