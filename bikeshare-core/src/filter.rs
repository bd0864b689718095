//! Filter selection types for one session iteration.
//!
//! A [`FilterSelection`] is the user-chosen (city, month, day) triple. The
//! month vocabulary covers January through June only; that is the span the
//! bundled datasets record.

use chrono::Weekday;
use thiserror::Error;

use crate::city::City;

/// Months available for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Month {
    /// January (month 1).
    January,
    /// February (month 2).
    February,
    /// March (month 3).
    March,
    /// April (month 4).
    April,
    /// May (month 5).
    May,
    /// June (month 6).
    June,
}

impl Month {
    /// Every filterable month, in calendar order.
    pub const ALL: [Self; 6] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
    ];

    /// 1-based month number, matching the field derived from start timestamps.
    #[must_use]
    pub const fn number(self) -> u32 {
        match self {
            Self::January => 1,
            Self::February => 2,
            Self::March => 3,
            Self::April => 4,
            Self::May => 5,
            Self::June => 6,
        }
    }

    /// Lowercase month name as used by the prompt vocabulary.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::January => "january",
            Self::February => "february",
            Self::March => "march",
            Self::April => "april",
            Self::May => "may",
            Self::June => "june",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|month| month.name() == name)
    }
}

/// Error returned when a value is outside the filter vocabulary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("`{value}` is not a valid {field} filter")]
pub struct FilterParseError {
    /// Which filter rejected the value (`month` or `day`).
    pub field: &'static str,
    /// The rejected value.
    pub value: String,
}

/// Month filter: everything, or one supported month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    /// Keep every month.
    All,
    /// Keep only the given month.
    Month(Month),
}

impl MonthFilter {
    /// Answers accepted by the month prompt, `all` first.
    pub const CHOICES: [&'static str; 7] = [
        "all", "january", "february", "march", "april", "may", "june",
    ];

    /// Parses a prompt answer, case-insensitively.
    ///
    /// # Errors
    /// Returns [`FilterParseError`] when `value` is not in [`Self::CHOICES`].
    pub fn parse(value: &str) -> Result<Self, FilterParseError> {
        let lowered = value.to_lowercase();
        if lowered == "all" {
            return Ok(Self::All);
        }
        Month::from_name(&lowered)
            .map(Self::Month)
            .ok_or_else(|| FilterParseError {
                field: "month",
                value: value.to_owned(),
            })
    }

    /// Whether a derived month number (1-12) passes this filter.
    #[must_use]
    pub const fn matches(self, month: u32) -> bool {
        match self {
            Self::All => true,
            Self::Month(wanted) => wanted.number() == month,
        }
    }
}

/// Day-of-week filter: everything, or one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    /// Keep every day.
    All,
    /// Keep only the given weekday.
    Day(Weekday),
}

impl DayFilter {
    /// Answers accepted by the day prompt, `all` first.
    pub const CHOICES: [&'static str; 8] = [
        "all",
        "monday",
        "tuesday",
        "wednesday",
        "thursday",
        "friday",
        "saturday",
        "sunday",
    ];

    /// Parses a prompt answer, case-insensitively.
    ///
    /// # Errors
    /// Returns [`FilterParseError`] when `value` is not in [`Self::CHOICES`].
    pub fn parse(value: &str) -> Result<Self, FilterParseError> {
        let lowered = value.to_lowercase();
        if lowered == "all" {
            return Ok(Self::All);
        }
        weekday_from_name(&lowered)
            .map(Self::Day)
            .ok_or_else(|| FilterParseError {
                field: "day",
                value: value.to_owned(),
            })
    }

    /// Whether a derived weekday passes this filter.
    #[must_use]
    pub fn matches(self, weekday: Weekday) -> bool {
        match self {
            Self::All => true,
            Self::Day(wanted) => wanted == weekday,
        }
    }
}

/// The user-chosen (city, month, day) triple for one session iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    /// City whose dataset is analysed.
    pub city: City,
    /// Month filter applied to the derived month field.
    pub month: MonthFilter,
    /// Day filter applied to the derived weekday field.
    pub day: DayFilter,
}

fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Full English weekday name, e.g. `Monday`.
#[must_use]
pub const fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Title-cased month name for a derived month number (1-12).
///
/// Out-of-range numbers render as `Unknown`; derived months never produce
/// them, but the renderer should not panic if one slips through.
#[must_use]
pub fn month_name(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    month
        .checked_sub(1)
        .and_then(|index| NAMES.get(index as usize))
        .copied()
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("all", MonthFilter::All)]
    #[case("january", MonthFilter::Month(Month::January))]
    #[case("JUNE", MonthFilter::Month(Month::June))]
    fn month_filter_parses_vocabulary(#[case] value: &str, #[case] expected: MonthFilter) {
        let filter = MonthFilter::parse(value).expect("vocabulary value must parse");
        assert_eq!(filter, expected);
    }

    #[rstest]
    #[case("july")]
    #[case("jan")]
    #[case("")]
    fn month_filter_rejects_unknown_months(#[case] value: &str) {
        let err = MonthFilter::parse(value).expect_err("value must be rejected");
        assert_eq!(err.field, "month");
        assert_eq!(err.value, value);
    }

    #[rstest]
    #[case("all", DayFilter::All)]
    #[case("monday", DayFilter::Day(Weekday::Mon))]
    #[case("Sunday", DayFilter::Day(Weekday::Sun))]
    fn day_filter_parses_vocabulary(#[case] value: &str, #[case] expected: DayFilter) {
        let filter = DayFilter::parse(value).expect("vocabulary value must parse");
        assert_eq!(filter, expected);
    }

    #[test]
    fn day_filter_rejects_unknown_days() {
        let err = DayFilter::parse("mon").expect_err("abbreviations are not accepted");
        assert_eq!(err.field, "day");
    }

    #[test]
    fn month_filter_matches_only_its_month() {
        let june = MonthFilter::Month(Month::June);
        assert!(june.matches(6));
        assert!(!june.matches(1));
        assert!(MonthFilter::All.matches(12));
    }

    #[test]
    fn day_filter_matches_only_its_day() {
        let monday = DayFilter::Day(Weekday::Mon);
        assert!(monday.matches(Weekday::Mon));
        assert!(!monday.matches(Weekday::Sun));
        assert!(DayFilter::All.matches(Weekday::Sat));
    }

    #[test]
    fn month_numbers_are_list_positions() {
        let numbers: Vec<_> = Month::ALL.iter().map(|month| month.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    }

    #[rstest]
    #[case(1, "January")]
    #[case(6, "June")]
    #[case(12, "December")]
    #[case(0, "Unknown")]
    #[case(13, "Unknown")]
    fn month_name_renders_title_case(#[case] month: u32, #[case] expected: &str) {
        assert_eq!(month_name(month), expected);
    }
}
