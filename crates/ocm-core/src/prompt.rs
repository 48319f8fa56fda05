//! Interactive confirmation and the overwrite guard.

use crate::error::Result;
use crate::init::StepReport;
use std::io::{BufRead, Write};
use std::path::Path;

/// The interactive side of an install run.
///
/// The library never touches process stdio; the CLI supplies a terminal
/// implementation and tests supply scripted answers.
pub trait Console {
    /// Ask a yes/no question. `Ok(true)` only for an explicit yes.
    fn confirm(&mut self, question: &str) -> Result<bool>;

    /// Surface a recoverable problem (e.g. an unparsable config file).
    fn warn(&mut self, _message: &str) {}

    /// Called once per finished step, in order.
    fn report(&mut self, _report: &StepReport) {}
}

/// `y` or `yes`, ignoring surrounding whitespace and case.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Write `question` (no newline), then read one line of input.
/// A closed input stream counts as "no".
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<bool> {
    output.write_all(question.as_bytes())?;
    output.flush()?;

    // Raw bytes: an answer that is not valid UTF-8 is just not a yes
    let mut line = Vec::new();
    let read = input.read_until(b'\n', &mut line)?;
    if read == 0 {
        // EOF leaves the cursor on the question line
        writeln!(output)?;
        return Ok(false);
    }
    Ok(is_affirmative(&String::from_utf8_lossy(&line)))
}

/// Decide whether `path` may be written.
///
/// Absent files and `force` need no interaction; otherwise the user is asked
/// and anything but an explicit yes keeps the existing file.
pub fn should_overwrite(path: &Path, force: bool, console: &mut dyn Console) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    if force {
        tracing::debug!(path = %path.display(), "overwriting existing file (force)");
        return Ok(true);
    }
    let allowed = console.confirm(&format!(
        "{} already exists. Overwrite? (y/N) ",
        path.display()
    ))?;
    tracing::debug!(path = %path.display(), allowed, "overwrite confirmation");
    Ok(allowed)
}
