//! Report formatting and printing utilities.
//!
//! This module displays issues in cargo-style format. Separate from the
//! rules so glossa can be used as a library without dragging terminal
//! output along.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, KeysSummary, ResolveSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Severity};
use crate::store::ScanWarning;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command's result to stdout (issues, listings) and stderr
/// (scan warnings).
pub fn print(result: &CommandResult, verbose: bool) {
    let stdout = &mut io::stdout().lock();
    match &result.summary {
        CommandSummary::Check(summary) => {
            report_to(&result.issues, stdout);
            if result.issues.is_empty() {
                print_success_to(summary.locale_files_checked, stdout);
            }
            print_scan_warnings(&result.scan_warnings, verbose);
        }
        CommandSummary::Keys(summary) => print_keys_to(summary, stdout),
        CommandSummary::Resolve(summary) => print_resolve_to(summary, stdout),
        CommandSummary::Init(_) => {
            let _ = writeln!(
                stdout,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", CONFIG_FILE_NAME).green()
            );
        }
    }
}

/// Print issues in cargo-style format to a custom writer.
///
/// Useful for testing or redirecting output. Issues are expected to be
/// pre-sorted (the command layer sorts once).
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    for issue in issues {
        print_issue(issue, writer);
    }
    print_summary(issues, writer);
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        message(issue),
        issue.rule().to_string().dimmed().cyan()
    );
    let _ = writeln!(writer, "  {} {}", "-->".blue(), source(issue));
    for note in notes(issue) {
        let _ = writeln!(writer, "   {} {} {}", "=".blue(), "note:".bold(), note);
    }
    let _ = writeln!(writer); // Empty line between issues
}

fn message(issue: &Issue) -> String {
    match issue {
        Issue::MissingKey(issue) => {
            format!("\"{}\" is missing in {}", issue.key, issue.missing_in.join(", "))
        }
        Issue::OrphanKey(issue) => {
            format!(
                "\"{}\" in {} has no {} counterpart",
                issue.key, issue.locale, issue.reference
            )
        }
        Issue::ShapeMismatch(issue) => {
            format!("\"{}\" changes shape across locales", issue.key)
        }
        Issue::Untranslated(issue) => {
            format!(
                "\"{}\" looks untranslated in {}",
                issue.key,
                issue.identical_in.join(", ")
            )
        }
    }
}

fn source(issue: &Issue) -> &str {
    match issue {
        Issue::MissingKey(issue) => &issue.source,
        Issue::OrphanKey(issue) => &issue.source,
        Issue::ShapeMismatch(issue) => &issue.source,
        Issue::Untranslated(issue) => &issue.source,
    }
}

fn notes(issue: &Issue) -> Vec<String> {
    match issue {
        Issue::MissingKey(issue) => {
            vec![format!("{} value: \"{}\"", issue.reference, issue.value)]
        }
        Issue::OrphanKey(issue) => {
            vec![format!("{} value: \"{}\"", issue.locale, issue.value)]
        }
        Issue::ShapeMismatch(issue) => issue
            .mismatches
            .iter()
            .map(|mismatch| {
                format!(
                    "{} has {}, {} has {}",
                    issue.reference, issue.expected, mismatch.locale, mismatch.actual
                )
            })
            .collect(),
        Issue::Untranslated(issue) => vec![format!("value: \"{}\"", issue.value)],
    }
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|issue| issue.severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} problems ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

/// Print a success message when no issues are found.
pub fn print_success_to<W: Write>(locale_files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} locale {} - no issues found",
            locale_files,
            if locale_files == 1 {
                "catalog"
            } else {
                "catalogs"
            }
        )
        .green()
    );
}

fn print_scan_warnings(warnings: &[ScanWarning], verbose: bool) {
    if warnings.is_empty() {
        return;
    }

    let stderr = &mut io::stderr().lock();
    if verbose {
        for warning in warnings {
            let _ = writeln!(
                stderr,
                "{} {}: {}",
                "warning:".bold().yellow(),
                warning.file_path,
                warning.error
            );
        }
    } else {
        let _ = writeln!(
            stderr,
            "{} {} locale file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            warnings.len(),
            "-v".cyan()
        );
    }
}

/// Print a locale's keys and values, key column aligned.
fn print_keys_to<W: Write>(summary: &KeysSummary, writer: &mut W) {
    let width = summary
        .rows
        .iter()
        .map(|(key, _)| UnicodeWidthStr::width(key.as_str()))
        .max()
        .unwrap_or(0);

    for (key, value) in &summary.rows {
        // Pad before coloring; escape codes would throw the column off.
        let padding = width - UnicodeWidthStr::width(key.as_str());
        let _ = writeln!(
            writer,
            "{}{}  {}",
            key.cyan(),
            " ".repeat(padding),
            value
        );
    }
}

fn print_resolve_to<W: Write>(summary: &ResolveSummary, writer: &mut W) {
    match &summary.resolved {
        Some(value) => {
            let _ = writeln!(writer, "{}", value);
        }
        None => {
            // The raw-key fallback the page would render, plus why.
            let _ = writeln!(writer, "{}", summary.key);
            let stderr = &mut io::stderr().lock();
            let _ = writeln!(
                stderr,
                "{} \"{}\" does not resolve in {}",
                "error:".bold().red(),
                summary.key,
                summary.locale
            );
        }
    }
}
