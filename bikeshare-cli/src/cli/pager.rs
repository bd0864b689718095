//! Raw-data pager: shows the filtered records five at a time on demand.

use std::io::{self, BufRead, Write};

use bikeshare_core::{TripRecord, TripTable};

use super::prompt::read_answer;
use super::report::RULE;

const PAGE_SIZE: usize = 5;
const PAGE_RULE: &str = "****************************************";

/// Pages through `table` in blocks of [`PAGE_SIZE`] records.
///
/// Each `yes` answer (case-insensitive) prints the next block and advances
/// the cursor; any other answer stops. A short tail prints whatever remains,
/// and once the table is exhausted further `yes` answers print an empty
/// page. There is no wraparound.
///
/// # Errors
/// Returns an error when the writer fails or input closes mid-question.
pub(crate) fn page_records<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    table: &TripTable,
) -> io::Result<()> {
    let mut cursor = 0;
    loop {
        writeln!(
            writer,
            "\nWould you like to view {PAGE_SIZE} more rows of raw data? Answer 'yes' to continue."
        )?;
        if read_answer(reader, writer)? != "yes" {
            break;
        }
        for record in table.records().iter().skip(cursor).take(PAGE_SIZE) {
            writeln!(writer, "{}", render_record(record))?;
        }
        cursor += PAGE_SIZE;
        writeln!(writer, "{PAGE_RULE}")?;
    }
    writeln!(writer, "{RULE}")
}

fn render_record(record: &TripRecord) -> String {
    let gender = record.gender.as_deref().unwrap_or("-");
    let birth_year = record
        .birth_year
        .map_or_else(|| "-".to_owned(), |year| year.to_string());
    format!(
        "{} | {:>8.1}s | {} -> {} | {} | {} | {}",
        record.start_time,
        record.duration_secs,
        record.start_station,
        record.end_station,
        record.user_type,
        gender,
        birth_year,
    )
}
