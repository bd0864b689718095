//! Prompt helpers: validated choice prompts and free-text questions.

use std::io::{self, BufRead, Write};

/// Asks `message` until the answer matches a member of `allowed`
/// case-insensitively, then returns the lowercased answer.
///
/// Invalid answers print an error naming `field` and re-prompt; there is no
/// retry limit.
///
/// # Errors
/// Returns an error when the writer fails, or when the reader reaches end of
/// input before a valid answer arrives ([`io::ErrorKind::UnexpectedEof`]).
pub(crate) fn prompt_choice<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    message: &str,
    allowed: &[&str],
    field: &str,
) -> io::Result<String> {
    loop {
        writeln!(writer, "{message}")?;
        let answer = read_answer(reader, writer)?;
        if allowed.iter().any(|value| value.eq_ignore_ascii_case(&answer)) {
            return Ok(answer);
        }
        writeln!(writer, "You entered an incorrect value for '{field}'!")?;
    }
}

/// Reads one line of input, trimmed and lowercased. Flushes the writer first
/// so a buffered prompt is visible before the read blocks.
///
/// # Errors
/// Returns [`io::ErrorKind::UnexpectedEof`] when the reader is exhausted.
pub(crate) fn read_answer<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> io::Result<String> {
    writer.flush()?;
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed during a prompt",
        ));
    }
    Ok(line.trim().to_lowercase())
}
