//! Descriptive statistics over a loaded trip table.
//!
//! Every computation borrows the table, never mutates it, and returns a
//! typed summary for a front end to render. Mode ties break toward the
//! smallest value (numeric order, weekday order, or lexicographic order as
//! appropriate) so repeated runs report identically.

use std::hash::Hash;

use chrono::{Timelike, Weekday};
use itertools::Itertools;

use crate::table::TripTable;

/// Most frequent travel times for one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeStats {
    /// Most frequent derived month (1-12).
    pub month: u32,
    /// Most frequent derived weekday.
    pub weekday: Weekday,
    /// Most frequent start hour (0-23).
    pub start_hour: u32,
}

impl TimeStats {
    /// Computes time-of-travel statistics, or `None` for an empty table.
    #[must_use]
    pub fn compute(table: &TripTable) -> Option<Self> {
        let records = table.records();
        let month = mode(records.iter().map(|record| record.month))?;
        let weekday = mode(
            records
                .iter()
                .map(|record| record.weekday.num_days_from_monday()),
        )?;
        let start_hour = mode(records.iter().map(|record| record.start_time.hour()))?;
        Some(Self {
            month,
            weekday: weekday_from_index(weekday),
            start_hour,
        })
    }
}

/// Most popular stations and station pair for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    /// Most commonly used start station.
    pub start_station: String,
    /// Most commonly used end station.
    pub end_station: String,
    /// Most frequent `<start> - <end>` trip label.
    pub trip: String,
}

impl StationStats {
    /// Computes station statistics, or `None` for an empty table.
    ///
    /// The combined trip label is built locally to rank station pairs; the
    /// caller's table is untouched.
    #[must_use]
    pub fn compute(table: &TripTable) -> Option<Self> {
        let records = table.records();
        let start_station = mode(records.iter().map(|record| record.start_station.as_str()))?;
        let end_station = mode(records.iter().map(|record| record.end_station.as_str()))?;
        let trip = mode(
            records
                .iter()
                .map(|record| format!("{} - {}", record.start_station, record.end_station)),
        )?;
        Some(Self {
            start_station: start_station.to_owned(),
            end_station: end_station.to_owned(),
            trip,
        })
    }
}

/// Total and mean trip durations, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    /// Sum of all trip durations.
    pub total_secs: f64,
    /// Mean trip duration.
    pub mean_secs: f64,
}

impl DurationStats {
    /// Computes duration statistics, or `None` for an empty table (the mean
    /// is undefined there).
    #[must_use]
    pub fn compute(table: &TripTable) -> Option<Self> {
        if table.is_empty() {
            return None;
        }
        let total_secs: f64 = table
            .records()
            .iter()
            .map(|record| record.duration_secs)
            .sum();
        let mean_secs = total_secs / table.len() as f64;
        Some(Self {
            total_secs,
            mean_secs,
        })
    }
}

/// Rider demographics for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// User-type counts, in descending frequency.
    pub user_types: Vec<(String, usize)>,
    /// Gender counts in descending frequency, when the dataset records
    /// gender.
    pub genders: Option<Vec<(String, usize)>>,
    /// Birth-year extremes and mode, when the dataset records birth years
    /// and at least one record carries one.
    pub birth_years: Option<BirthYearStats>,
}

/// Earliest, most recent, and most common rider birth years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    /// Earliest (minimum) birth year.
    pub earliest: i32,
    /// Most recent (maximum) birth year.
    pub most_recent: i32,
    /// Most common (mode) birth year.
    pub most_common: i32,
}

impl UserStats {
    /// Computes demographic statistics.
    ///
    /// The optional sections follow the table's capability flags: they are
    /// `None` when the source dataset lacks the corresponding column, never
    /// because a lookup failed at aggregation time.
    #[must_use]
    pub fn compute(table: &TripTable) -> Self {
        let records = table.records();
        let user_types = frequency_table(records.iter().map(|record| record.user_type.as_str()));
        let genders = table.has_gender().then(|| {
            frequency_table(records.iter().filter_map(|record| record.gender.as_deref()))
        });
        let birth_years = if table.has_birth_year() {
            birth_year_stats(table)
        } else {
            None
        };
        Self {
            user_types,
            genders,
            birth_years,
        }
    }
}

fn birth_year_stats(table: &TripTable) -> Option<BirthYearStats> {
    let years = || table.records().iter().filter_map(|record| record.birth_year);
    let earliest = years().min()?;
    let most_recent = years().max()?;
    let most_common = mode(years())?;
    Some(BirthYearStats {
        earliest,
        most_recent,
        most_common,
    })
}

/// Renders a whole-second count as `HH:MM:SS`.
///
/// Totals of 24 hours or more wrap modulo 24 hours: the output is a
/// time-of-day clock face, not a multi-day duration. Negative inputs clamp
/// to zero.
#[must_use]
pub fn format_clock(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64 % 86_400;
    let hours = total / 3_600;
    let minutes = total % 3_600 / 60;
    let secs = total % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Statistical mode with ties broken toward the smallest value.
fn mode<T>(items: impl Iterator<Item = T>) -> Option<T>
where
    T: Eq + Hash + Ord,
{
    items
        .counts()
        .into_iter()
        .max_by(|(left, left_count), (right, right_count)| {
            left_count
                .cmp(right_count)
                .then_with(|| right.cmp(left))
        })
        .map(|(value, _)| value)
}

/// Counts distinct values, descending by frequency with ties in value order.
fn frequency_table<'a>(items: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    items
        .counts()
        .into_iter()
        .sorted_by(|(left, left_count), (right, right_count)| {
            right_count.cmp(left_count).then_with(|| left.cmp(right))
        })
        .map(|(value, count)| (value.to_owned(), count))
        .collect()
}

const fn weekday_from_index(index: u32) -> Weekday {
    match index {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        _ => Weekday::Sun,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{Datelike, NaiveDateTime};
    use rstest::rstest;

    use crate::city::City;
    use crate::table::TripRecord;

    fn record(
        start: &str,
        duration_secs: f64,
        start_station: &str,
        end_station: &str,
        user_type: &str,
        gender: Option<&str>,
        birth_year: Option<i32>,
    ) -> TripRecord {
        let start_time = NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S")
            .expect("fixture timestamp must parse");
        TripRecord {
            month: start_time.month(),
            weekday: start_time.weekday(),
            start_time,
            end_time: String::new(),
            duration_secs,
            start_station: start_station.to_owned(),
            end_station: end_station.to_owned(),
            user_type: user_type.to_owned(),
            gender: gender.map(ToOwned::to_owned),
            birth_year,
        }
    }

    fn trip(start: &str, start_station: &str, end_station: &str) -> TripRecord {
        record(start, 60.0, start_station, end_station, "Subscriber", None, None)
    }

    fn table(records: Vec<TripRecord>, has_gender: bool, has_birth_year: bool) -> TripTable {
        TripTable::new(City::Chicago, records, has_gender, has_birth_year)
    }

    fn empty_table() -> TripTable {
        table(Vec::new(), true, true)
    }

    #[test]
    fn time_stats_pick_the_most_frequent_values() {
        let stats = TimeStats::compute(&table(
            vec![
                trip("2017-06-05 08:10:00", "A", "B"),
                trip("2017-06-12 08:45:00", "A", "B"),
                trip("2017-01-02 17:00:00", "A", "B"),
            ],
            false,
            false,
        ))
        .expect("non-empty table must produce stats");

        assert_eq!(stats.month, 6);
        assert_eq!(stats.weekday, Weekday::Mon);
        assert_eq!(stats.start_hour, 8);
    }

    #[test]
    fn time_stats_break_ties_toward_the_smallest_value() {
        // One June trip and one January trip: January (1) wins the tie.
        // Hours 8 and 17 are likewise tied, so 8 wins.
        let stats = TimeStats::compute(&table(
            vec![
                trip("2017-06-05 17:10:00", "A", "B"),
                trip("2017-01-02 08:00:00", "A", "B"),
            ],
            false,
            false,
        ))
        .expect("non-empty table must produce stats");

        assert_eq!(stats.month, 1);
        assert_eq!(stats.weekday, Weekday::Mon);
        assert_eq!(stats.start_hour, 8);
    }

    #[test]
    fn time_stats_are_none_for_an_empty_table() {
        assert_eq!(TimeStats::compute(&empty_table()), None);
    }

    #[test]
    fn station_stats_report_the_repeated_pair_as_mode_trip() {
        let stats = StationStats::compute(&table(
            vec![
                trip("2017-06-05 08:00:00", "Canal St", "Clark St"),
                trip("2017-06-05 09:00:00", "Canal St", "Clark St"),
                trip("2017-06-05 10:00:00", "State St", "Canal St"),
            ],
            false,
            false,
        ))
        .expect("non-empty table must produce stats");

        assert_eq!(stats.start_station, "Canal St");
        assert_eq!(stats.end_station, "Clark St");
        assert_eq!(stats.trip, "Canal St - Clark St");
    }

    #[test]
    fn station_stats_are_none_for_an_empty_table() {
        assert_eq!(StationStats::compute(&empty_table()), None);
    }

    #[test]
    fn duration_stats_report_sum_and_mean() {
        let stats = DurationStats::compute(&table(
            vec![
                record("2017-06-05 08:00:00", 30.0, "A", "B", "Subscriber", None, None),
                record("2017-06-05 09:00:00", 90.0, "A", "B", "Subscriber", None, None),
                record("2017-06-05 10:00:00", 3600.0, "A", "B", "Subscriber", None, None),
            ],
            false,
            false,
        ))
        .expect("non-empty table must produce stats");

        assert!((stats.total_secs - 3720.0).abs() < f64::EPSILON);
        assert!((stats.mean_secs - 1240.0).abs() < f64::EPSILON);
        assert_eq!(format_clock(stats.total_secs), "01:02:00");
        assert_eq!(format_clock(stats.mean_secs), "00:20:40");
    }

    #[test]
    fn duration_stats_are_none_for_an_empty_table() {
        assert_eq!(DurationStats::compute(&empty_table()), None);
    }

    #[rstest]
    #[case(0.0, "00:00:00")]
    #[case(59.9, "00:00:59")]
    #[case(3_661.0, "01:01:01")]
    #[case(86_400.0, "00:00:00")]
    #[case(90_000.0, "01:00:00")]
    #[case(-5.0, "00:00:00")]
    fn format_clock_wraps_on_a_24_hour_clock(#[case] seconds: f64, #[case] expected: &str) {
        assert_eq!(format_clock(seconds), expected);
    }

    #[test]
    fn user_stats_count_types_in_descending_frequency() {
        let stats = UserStats::compute(&table(
            vec![
                record("2017-06-05 08:00:00", 60.0, "A", "B", "Customer", Some("Male"), Some(1984)),
                record("2017-06-05 09:00:00", 60.0, "A", "B", "Subscriber", Some("Female"), Some(1990)),
                record("2017-06-05 10:00:00", 60.0, "A", "B", "Subscriber", Some("Male"), Some(1984)),
            ],
            true,
            true,
        ));

        assert_eq!(
            stats.user_types,
            vec![("Subscriber".to_owned(), 2), ("Customer".to_owned(), 1)]
        );
        assert_eq!(
            stats.genders,
            Some(vec![("Male".to_owned(), 2), ("Female".to_owned(), 1)])
        );
        assert_eq!(
            stats.birth_years,
            Some(BirthYearStats {
                earliest: 1984,
                most_recent: 1990,
                most_common: 1984,
            })
        );
    }

    #[test]
    fn user_stats_skip_demographics_without_the_columns() {
        let stats = UserStats::compute(&table(
            vec![record(
                "2017-02-14 07:00:00",
                60.0,
                "A",
                "B",
                "Subscriber",
                None,
                None,
            )],
            false,
            false,
        ));

        assert_eq!(stats.user_types, vec![("Subscriber".to_owned(), 1)]);
        assert_eq!(stats.genders, None);
        assert_eq!(stats.birth_years, None);
    }

    #[test]
    fn user_stats_tolerate_a_birth_year_column_with_no_values() {
        let stats = UserStats::compute(&table(
            vec![record(
                "2017-06-05 08:00:00",
                60.0,
                "A",
                "B",
                "Subscriber",
                None,
                None,
            )],
            true,
            true,
        ));

        assert_eq!(stats.genders, Some(Vec::new()));
        assert_eq!(stats.birth_years, None);
    }

    #[test]
    fn frequency_ties_sort_by_value() {
        let stats = UserStats::compute(&table(
            vec![
                record("2017-06-05 08:00:00", 60.0, "A", "B", "Subscriber", None, None),
                record("2017-06-05 09:00:00", 60.0, "A", "B", "Customer", None, None),
            ],
            false,
            false,
        ));

        assert_eq!(
            stats.user_types,
            vec![("Customer".to_owned(), 1), ("Subscriber".to_owned(), 1)]
        );
    }
}
