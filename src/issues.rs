//! Issue types produced by the catalog parity rules.
//!
//! Each issue is self-contained: everything the reporter needs to display
//! it (rule, severity, key, locales involved, source file) without going
//! back to the catalogs.

use std::fmt;

use crate::store::ValueShape;

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingKey,
    OrphanKey,
    ShapeMismatch,
    Untranslated,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::MissingKey => write!(f, "missing-key"),
            Rule::OrphanKey => write!(f, "orphan-key"),
            Rule::ShapeMismatch => write!(f, "shape-mismatch"),
            Rule::Untranslated => write!(f, "untranslated"),
        }
    }
}

/// Key present in the reference locale but absent from other locales.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MissingKeyIssue {
    /// The dot-path key.
    pub key: String,
    /// The reference locale's value, for context.
    pub value: String,
    /// Reference locale tag.
    pub reference: String,
    /// File the reference catalog came from.
    pub source: String,
    /// Locales lacking the key, sorted.
    pub missing_in: Vec<String>,
}

impl MissingKeyIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingKey
    }
}

/// Key present in a non-reference locale but absent from the reference.
///
/// Typically a leftover from a removed section that was cleaned up in the
/// reference catalog only.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct OrphanKeyIssue {
    pub key: String,
    pub value: String,
    /// Locale that still carries the key.
    pub locale: String,
    /// File that locale's catalog came from.
    pub source: String,
    pub reference: String,
}

impl OrphanKeyIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::OrphanKey
    }
}

/// A locale whose value shape differs from the reference for one key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct LocaleShapeMismatch {
    pub locale: String,
    pub actual: ValueShape,
}

/// Key whose value shape differs across locales.
///
/// Shape-divergent keys make lookups silently diverge: a list index that
/// resolves in one locale falls back in another.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShapeMismatchIssue {
    pub key: String,
    pub reference: String,
    pub source: String,
    /// The reference locale's shape.
    pub expected: ValueShape,
    /// Locales whose shape differs, sorted by tag.
    pub mismatches: Vec<LocaleShapeMismatch>,
}

impl ShapeMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ShapeMismatch
    }
}

/// Text value identical to the reference locale's, suggesting the string
/// was never translated.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct UntranslatedIssue {
    pub key: String,
    pub value: String,
    pub reference: String,
    pub source: String,
    /// Locales with the identical value, sorted.
    pub identical_in: Vec<String>,
}

impl UntranslatedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Untranslated
    }
}

/// Any issue a check run can produce.
///
/// The derived ordering groups issues by rule, then key: the order the
/// report prints them in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Issue {
    MissingKey(MissingKeyIssue),
    OrphanKey(OrphanKeyIssue),
    ShapeMismatch(ShapeMismatchIssue),
    Untranslated(UntranslatedIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::MissingKey(_) => MissingKeyIssue::severity(),
            Issue::OrphanKey(_) => OrphanKeyIssue::severity(),
            Issue::ShapeMismatch(_) => ShapeMismatchIssue::severity(),
            Issue::Untranslated(_) => UntranslatedIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::MissingKey(_) => MissingKeyIssue::rule(),
            Issue::OrphanKey(_) => OrphanKeyIssue::rule(),
            Issue::ShapeMismatch(_) => ShapeMismatchIssue::rule(),
            Issue::Untranslated(_) => UntranslatedIssue::rule(),
        }
    }

    /// The dot-path key the issue is about.
    pub fn key(&self) -> &str {
        match self {
            Issue::MissingKey(issue) => &issue.key,
            Issue::OrphanKey(issue) => &issue.key,
            Issue::ShapeMismatch(issue) => &issue.key,
            Issue::Untranslated(issue) => &issue.key,
        }
    }
}
