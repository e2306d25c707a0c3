//! Command implementations and their results.

pub mod check;
pub mod keys;
pub mod resolve;

use crate::cli::ExitStatus;
use crate::issues::{Issue, Severity};
use crate::store::ScanWarning;

/// What a command wants printed besides its issues.
#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Keys(KeysSummary),
    Resolve(ResolveSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CheckSummary {
    /// Number of locale catalogs compared.
    pub locale_files_checked: usize,
}

#[derive(Debug)]
pub struct KeysSummary {
    pub locale: String,
    /// `(dot-path key, value preview)` rows, already key-sorted.
    pub rows: Vec<(String, String)>,
}

#[derive(Debug)]
pub struct ResolveSummary {
    pub key: String,
    pub locale: String,
    /// `None` when the key does not resolve; the page would fall back to
    /// the raw key.
    pub resolved: Option<String>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a glossa command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// All issues found, sorted for reporting. Empty for non-check commands.
    pub issues: Vec<Issue>,
    pub error_count: usize,
    pub warning_count: usize,
    /// Locale files that could not be parsed during a directory scan.
    pub scan_warnings: Vec<ScanWarning>,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        if self.error_count > 0 {
            return ExitStatus::Failure;
        }
        match &self.summary {
            // A key that does not resolve is the thing this command exists
            // to catch.
            CommandSummary::Resolve(summary) if summary.resolved.is_none() => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }
}

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    scan_warnings: Vec<ScanWarning>,
) -> CommandResult {
    issues.sort();

    let error_count = issues
        .iter()
        .filter(|issue| issue.severity() == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    CommandResult {
        summary,
        issues,
        error_count,
        warning_count,
        scan_warnings,
    }
}
