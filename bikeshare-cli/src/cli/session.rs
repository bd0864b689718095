//! Session state machine: prompt, load, report, page, ask to restart.

use std::io::{self, BufRead, Write};
use std::path::Path;

use bikeshare_core::{
    City, DayFilter, FilterParseError, FilterSelection, LoadError, MonthFilter, UnknownCity,
    load_table,
};
use thiserror::Error;
use tracing::{info, instrument};

use super::pager::page_records;
use super::prompt::{prompt_choice, read_answer};
use super::report::{RULE, render_report};

const CITY_PROMPT: &str =
    "Please enter the code for the city to analyse: ch (Chicago), nyc (New York City), wa (Washington)";
const MONTH_PROMPT: &str =
    "Please enter the month to analyse: all, january, february, march, april, may, june";
const DAY_PROMPT: &str =
    "Please enter the day to analyse: all, monday, tuesday, wednesday, thursday, friday, saturday, sunday";
const RESTART_PROMPT: &str = "\nWould you like to restart? Answer 'yes' to continue.";

/// Errors that end an interactive session.
///
/// Prompt validation failures are not among them: those recover by
/// re-prompting and never surface here.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Console input or output failed, including input closing mid-prompt.
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
    /// A dataset failed to load; the diagnostic names the file.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// A validated prompt answer failed to parse into a filter.
    #[error(transparent)]
    Filter(#[from] FilterParseError),
    /// A validated prompt answer named an unregistered city.
    #[error(transparent)]
    City(#[from] UnknownCity),
}

/// Runs the interactive session loop until the user declines a restart.
///
/// Each iteration prompts for a filter selection, loads the filtered table,
/// renders the statistics report, pages raw records on demand, and then asks
/// whether to restart. Any answer other than `yes` (case-insensitive) ends
/// the session.
///
/// # Errors
/// Returns [`SessionError`] when console I/O fails or a dataset cannot be
/// loaded.
#[instrument(
    name = "cli.session",
    err,
    skip_all,
    fields(data_dir = %data_dir.display()),
)]
pub fn run_session<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    data_dir: &Path,
) -> Result<(), SessionError> {
    writeln!(writer, "Hello! Let's explore some US bikeshare data!").map_err(SessionError::Io)?;

    loop {
        let selection = prompt_selection(reader, writer)?;
        let table = load_table(data_dir, &selection)?;
        render_report(&table, writer).map_err(SessionError::Io)?;
        page_records(reader, writer, &table).map_err(SessionError::Io)?;

        writeln!(writer, "{RESTART_PROMPT}").map_err(SessionError::Io)?;
        if read_answer(reader, writer)? != "yes" {
            break;
        }
    }

    info!("session finished");
    Ok(())
}

fn prompt_selection<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<FilterSelection, SessionError> {
    let city = prompt_choice(reader, writer, CITY_PROMPT, &City::KEYS, "city")?;
    let month = prompt_choice(reader, writer, MONTH_PROMPT, &MonthFilter::CHOICES, "month")?;
    let day = prompt_choice(reader, writer, DAY_PROMPT, &DayFilter::CHOICES, "day")?;

    writeln!(
        writer,
        "You have selected -> city: {city}, month: {month}, day: {day}"
    )?;
    writeln!(writer, "{RULE}")?;

    Ok(FilterSelection {
        city: City::from_key(&city)?,
        month: MonthFilter::parse(&month)?,
        day: DayFilter::parse(&day)?,
    })
}
