//! Dataset loading: CSV parsing, derived fields, and month/day filtering.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::{Datelike, NaiveDateTime};
use serde::Deserialize;
use tracing::{Span, field, info, instrument};

use crate::error::LoadError;
use crate::filter::FilterSelection;
use crate::table::{TripRecord, TripTable};

const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One CSV row as it appears on disk. Columns are matched by header name, so
/// the unnamed leading index column some exports carry is ignored, and the
/// optional demographic columns deserialise to `None` when absent.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type")]
    user_type: String,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    // Stored as a float in the source files ("1992.0").
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// Loads the trip table for `selection.city` from `data_dir`, attaches the
/// derived month and weekday fields, and keeps only the records passing the
/// month and day filters.
///
/// Source-file row order is preserved; filtering never reorders or mutates
/// surviving records. The optional-column capability flags on the returned
/// table reflect the file's header row.
///
/// # Errors
/// Returns [`LoadError`] when the file cannot be read, a row fails CSV
/// deserialisation, or a start timestamp does not parse.
#[instrument(
    name = "core.load_table",
    err,
    skip_all,
    fields(city = %selection.city, path = field::Empty),
)]
pub fn load_table(data_dir: &Path, selection: &FilterSelection) -> Result<TripTable, LoadError> {
    let path = data_dir.join(selection.city.data_file());
    Span::current().record("path", field::display(path.display()));

    let file = File::open(&path).map_err(|source| LoadError::Io {
        path: path.clone(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let headers = reader.headers().map_err(|source| LoadError::Csv {
        path: path.clone(),
        source,
    })?;
    let has_gender = headers.iter().any(|name| name == "Gender");
    let has_birth_year = headers.iter().any(|name| name == "Birth Year");

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = row.map_err(|source| LoadError::Csv {
            path: path.clone(),
            source,
        })?;
        let record = build_record(&path, index + 1, raw)?;
        if selection.month.matches(record.month) && selection.day.matches(record.weekday) {
            records.push(record);
        }
    }

    info!(records = records.len(), "dataset loaded");
    Ok(TripTable::new(
        selection.city,
        records,
        has_gender,
        has_birth_year,
    ))
}

fn build_record(path: &Path, record_number: usize, raw: RawRecord) -> Result<TripRecord, LoadError> {
    let start_time = NaiveDateTime::parse_from_str(&raw.start_time, START_TIME_FORMAT).map_err(
        |source| LoadError::Timestamp {
            path: path.to_path_buf(),
            record: record_number,
            value: raw.start_time.clone(),
            source,
        },
    )?;

    Ok(TripRecord {
        month: start_time.month(),
        weekday: start_time.weekday(),
        start_time,
        end_time: raw.end_time,
        duration_secs: raw.trip_duration,
        start_station: raw.start_station,
        end_station: raw.end_station,
        user_type: raw.user_type,
        gender: raw.gender,
        birth_year: raw.birth_year.map(|year| year as i32),
    })
}
