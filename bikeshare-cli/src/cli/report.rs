//! Report rendering: the four statistics sections with per-section timing.
//!
//! The computations live in `bikeshare-core`; this module renders their
//! typed summaries and measures the wall-clock time each section took. An
//! empty table degrades each section to a single no-data notice.

use std::io::{self, Write};
use std::time::Instant;

use bikeshare_core::{
    DurationStats, StationStats, TimeStats, TripTable, UserStats, format_clock, month_name,
    weekday_name,
};

pub(crate) const RULE: &str = "----------------------------------------";
const NO_DATA_NOTICE: &str = "No data for this selection.";

/// Renders the four statistics sections in fixed order: times, stations,
/// durations, users.
pub(crate) fn render_report<W: Write>(table: &TripTable, writer: &mut W) -> io::Result<()> {
    render_time_stats(table, writer)?;
    render_station_stats(table, writer)?;
    render_duration_stats(table, writer)?;
    render_user_stats(table, writer)?;
    Ok(())
}

fn render_time_stats<W: Write>(table: &TripTable, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "\nCalculating the most frequent times of travel...\n")?;
    let started = Instant::now();
    match TimeStats::compute(table) {
        Some(stats) => {
            writeln!(writer, "Most frequent month: {}", month_name(stats.month))?;
            writeln!(
                writer,
                "Most common day of week: {}",
                weekday_name(stats.weekday)
            )?;
            writeln!(writer, "Most common start hour: {}", stats.start_hour)?;
        }
        None => writeln!(writer, "{NO_DATA_NOTICE}")?,
    }
    finish_section(writer, started)
}

fn render_station_stats<W: Write>(table: &TripTable, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "\nCalculating the most popular stations and trip...\n")?;
    let started = Instant::now();
    match StationStats::compute(table) {
        Some(stats) => {
            writeln!(
                writer,
                "Most commonly used start station: {}",
                stats.start_station
            )?;
            writeln!(
                writer,
                "Most commonly used end station: {}",
                stats.end_station
            )?;
            writeln!(writer, "Most frequent trip: {}", stats.trip)?;
        }
        None => writeln!(writer, "{NO_DATA_NOTICE}")?,
    }
    finish_section(writer, started)
}

fn render_duration_stats<W: Write>(table: &TripTable, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "\nCalculating trip duration...\n")?;
    let started = Instant::now();
    match DurationStats::compute(table) {
        Some(stats) => {
            writeln!(
                writer,
                "Total travel time: {}",
                format_clock(stats.total_secs)
            )?;
            writeln!(
                writer,
                "Average travel time: {}",
                format_clock(stats.mean_secs)
            )?;
        }
        None => writeln!(writer, "{NO_DATA_NOTICE}")?,
    }
    finish_section(writer, started)
}

fn render_user_stats<W: Write>(table: &TripTable, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "\nCalculating user stats...\n")?;
    let started = Instant::now();
    let stats = UserStats::compute(table);

    if stats.user_types.is_empty() {
        writeln!(writer, "{NO_DATA_NOTICE}")?;
        return finish_section(writer, started);
    }

    writeln!(writer, "User type counts:")?;
    for (value, count) in &stats.user_types {
        writeln!(writer, "  {value}: {count}")?;
    }

    if stats.genders.is_none() && stats.birth_years.is_none() {
        writeln!(writer, "\nSome statistics are not available for this city.")?;
        return finish_section(writer, started);
    }

    if let Some(genders) = &stats.genders {
        writeln!(writer, "\nGender counts:")?;
        for (value, count) in genders {
            writeln!(writer, "  {value}: {count}")?;
        }
    }
    if let Some(span) = &stats.birth_years {
        writeln!(writer, "\nEarliest year of birth: {}", span.earliest)?;
        writeln!(writer, "Most recent year of birth: {}", span.most_recent)?;
        writeln!(writer, "Most common year of birth: {}", span.most_common)?;
    }
    finish_section(writer, started)
}

fn finish_section<W: Write>(writer: &mut W, started: Instant) -> io::Result<()> {
    writeln!(
        writer,
        "\nThis took {:.6} seconds.",
        started.elapsed().as_secs_f64()
    )?;
    writeln!(writer, "{RULE}")
}
