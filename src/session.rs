//! Interactive enrollment session.
//!
//! Asks for the semester, the wanted courses and (optionally) preferred
//! instructors, then runs the selection and prints the report. Reader and
//! writer are injected so the whole conversation can be driven from tests.

use std::io::{self, BufRead, Write};

use log::info;

use crate::algorithm::{filter_by_course_names, filter_by_instructors, is_offered_semester, select_with_limits, split_preferences};
use crate::catalog::Catalog;
use crate::config::{Config, OutputFormat};
use crate::errors::Result;
use crate::input::prompt_line;
use crate::report::SelectionReport;

pub const SEMESTER_PROMPT: &str = "Which semester do you want to enroll in? ";
pub const COURSE_PROMPT: &str = "List your course preferences by name, separated by commas (or press enter to exit):";
pub const INSTRUCTOR_PROMPT: &str = "List your instructor preferences by name, separated by commas (optional):";

#[derive(Debug, Clone)]
pub enum SessionOutcome {
    /// The requested semester has no offering.
    NotOffered,
    /// The user left at the course prompt.
    Exited,
    Completed(SelectionReport),
}

pub fn run_session<R: BufRead, W: Write>(
    config: &Config,
    catalog: &Catalog,
    reader: &mut R,
    writer: &mut W,
) -> Result<SessionOutcome> {
    let semester = prompt_line(reader, writer, SEMESTER_PROMPT)?.unwrap_or_default();
    if !is_offered_semester(&semester, &config.semester) {
        writeln!(writer, "Sorry, only {} semester courses are available.", config.semester)?;
        return Ok(SessionOutcome::NotOffered);
    }

    let candidates = loop {
        let answer = match prompt_line(reader, writer, COURSE_PROMPT)? {
            Some(a) if !a.is_empty() => a,
            _ => {
                writeln!(writer, "Exiting course selection.")?;
                return Ok(SessionOutcome::Exited);
            }
        };

        let prefs = split_preferences(&answer);
        if prefs.is_empty() {
            writeln!(writer, "Please enter at least one course name.")?;
            continue;
        }

        match filter_by_course_names(catalog.courses(), &prefs) {
            Ok(found) => break found,
            Err(unmatched) => {
                writeln!(writer, "No matching courses found for: {}. Please try again.", unmatched.names.join(", "))?;
                for (name, suggestions) in unmatched.names.iter().zip(&unmatched.suggestions) {
                    if !suggestions.is_empty() {
                        writeln!(writer, "  '{}': did you mean {}?", name, suggestions.join(" or "))?;
                    }
                }
            }
        }
    };

    let instructors = prompt_line(reader, writer, INSTRUCTOR_PROMPT)?
        .map(|a| split_preferences(&a))
        .unwrap_or_default();
    let candidates = filter_by_instructors(&candidates, &instructors);
    info!("{} candidate sections after preference filters", candidates.len());

    let selection = select_with_limits(&candidates, &config.limits());
    let report = SelectionReport::new(&config.semester, config.max_credits, selection.courses);

    match config.output {
        OutputFormat::Text => writeln!(writer, "{}", report.to_text())?,
        OutputFormat::Json => writeln!(writer, "{}", report.to_json().map_err(io::Error::from)?)?,
    }

    Ok(SessionOutcome::Completed(report))
}
