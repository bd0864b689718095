//! Trip records and the loaded trip table.

use chrono::{NaiveDateTime, Weekday};

use crate::city::City;

/// One bicycle trip.
///
/// The `month` and `weekday` fields are derived from `start_time` when the
/// record is loaded and stay attached for the rest of the session iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// Parsed trip start timestamp.
    pub start_time: NaiveDateTime,
    /// Raw end-time string. Not analysed, but shown by the raw-data pager.
    pub end_time: String,
    /// Trip duration in seconds.
    pub duration_secs: f64,
    /// Start station name.
    pub start_station: String,
    /// End station name.
    pub end_station: String,
    /// User type, e.g. `Subscriber` or `Customer`.
    pub user_type: String,
    /// Rider gender, when the dataset records it.
    pub gender: Option<String>,
    /// Rider birth year, when the dataset records it.
    pub birth_year: Option<i32>,
    /// Derived month (1-12) of `start_time`.
    pub month: u32,
    /// Derived weekday of `start_time`.
    pub weekday: Weekday,
}

/// An ordered set of trip records loaded for one city.
///
/// The capability flags record which optional columns the source file
/// carried; demographic reporting branches on them instead of probing for
/// missing values at aggregation time.
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    city: City,
    records: Vec<TripRecord>,
    has_gender: bool,
    has_birth_year: bool,
}

impl TripTable {
    pub(crate) fn new(
        city: City,
        records: Vec<TripRecord>,
        has_gender: bool,
        has_birth_year: bool,
    ) -> Self {
        Self {
            city,
            records,
            has_gender,
            has_birth_year,
        }
    }

    /// City this table was loaded for.
    #[must_use]
    pub const fn city(&self) -> City {
        self.city
    }

    /// Records in source-file order.
    #[must_use]
    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    /// Whether the source file carried a `Gender` column.
    #[must_use]
    pub const fn has_gender(&self) -> bool {
        self.has_gender
    }

    /// Whether the source file carried a `Birth Year` column.
    #[must_use]
    pub const fn has_birth_year(&self) -> bool {
        self.has_birth_year
    }

    /// Number of records that survived filtering.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records survived filtering.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
