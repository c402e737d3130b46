//! Report formatting and printing utilities.
//!
//! Separate from core logic so the engine can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;

use super::args::OutputFormat;
use super::commands::CheckOutcome;
use crate::issues::{Report, SearchFailure};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

/// Print a check outcome to stdout, and search failures to stderr.
pub fn print(outcome: &CheckOutcome, format: OutputFormat, verbose: bool) {
    print_to(outcome, format, &mut io::stdout().lock());
    print_search_failures_to(
        &outcome.report.search_failures,
        verbose,
        &mut io::stderr().lock(),
    );
}

/// Print a check outcome to a custom writer.
pub fn print_to<W: Write>(outcome: &CheckOutcome, format: OutputFormat, writer: &mut W) {
    match format {
        OutputFormat::Text => print_text(&outcome.report, &outcome.manifest_name, writer),
        OutputFormat::Json => print_json(&outcome.report, writer),
    }
}

fn print_text<W: Write>(report: &Report, manifest_name: &str, writer: &mut W) {
    if !report.undefined_keys.is_empty() {
        let _ = writeln!(
            writer,
            "{}",
            format!("The following keys used by {} are undefined:", manifest_name).bold()
        );
        print_keys(&report.undefined_keys, writer);
    }

    if !report.unused_keys.is_empty() {
        let _ = writeln!(
            writer,
            "{}",
            "Could not find uses of the following keys:".bold()
        );
        print_keys(&report.unused_keys, writer);
    }

    let counts = format!(
        "({} catalog {}, {} searched)",
        report.catalog_key_count,
        plural(report.catalog_key_count, "key", "keys"),
        report.searched_key_count
    );

    if report.passed() {
        let _ = writeln!(
            writer,
            "{} {} {}",
            SUCCESS_MARK.green(),
            "All keys found successfully!".green(),
            counts.dimmed()
        );
    } else {
        let problems = report.problem_count();
        let _ = writeln!(
            writer,
            "{} {} {} {}",
            FAILURE_MARK.red(),
            problems,
            plural(problems, "problem", "problems").red(),
            counts.dimmed()
        );
    }
}

fn print_keys<W: Write>(keys: &[String], writer: &mut W) {
    for key in keys {
        let _ = writeln!(writer, "  - {}", key.cyan());
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    passed: bool,
    #[serde(flatten)]
    report: &'a Report,
}

fn print_json<W: Write>(report: &Report, writer: &mut W) {
    let json = JsonReport {
        passed: report.passed(),
        report,
    };
    match serde_json::to_string_pretty(&json) {
        Ok(s) => {
            let _ = writeln!(writer, "{}", s);
        }
        Err(e) => {
            eprintln!("{} Failed to serialize report: {}", "error:".bold().red(), e);
        }
    }
}

/// Print a warning about keys whose search could not be performed.
pub fn print_search_failures_to<W: Write>(
    failures: &[SearchFailure],
    verbose: bool,
    writer: &mut W,
) {
    if failures.is_empty() {
        return;
    }

    if verbose {
        for failure in failures {
            let _ = writeln!(
                writer,
                "{} could not search for \"{}\": {}",
                "warning:".bold().yellow(),
                failure.key,
                failure.error
            );
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} key search(es) failed and were reported as unused (use {} for details)",
            "warning:".bold().yellow(),
            failures.len(),
            "-v".cyan()
        );
    }
}
