use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{CheckSummary, CommandResult, CommandSummary, finish};

use crate::config::Config;
use crate::issues::Issue;
use crate::rules::{
    check_missing_keys, check_orphan_keys, check_shape_mismatches, check_untranslated,
};
use crate::store::{LocaleCatalog, ScanWarning, TranslationTable, scan_locale_dir};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Missing,
    Orphan,
    Shape,
    Untranslated,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::Missing,
            CheckRule::Orphan,
            CheckRule::Shape,
            CheckRule::Untranslated,
        ]
    }
}

pub fn check(cmd: CheckCommand, config: &Config) -> Result<CommandResult> {
    let rules = if cmd.rules.is_empty() {
        CheckRule::all()
    } else {
        cmd.rules.clone()
    };

    let messages_root = cmd
        .messages_root
        .clone()
        .or_else(|| config.messages_root.as_ref().map(PathBuf::from));
    let (catalogs, scan_warnings) = load_catalogs(messages_root)?;

    let reference = cmd
        .reference
        .as_deref()
        .unwrap_or(config.reference())
        .to_string();
    if !catalogs.contains_key(&reference) {
        let found: Vec<&str> = catalogs.keys().map(String::as_str).collect();
        bail!(
            "Reference locale '{}' has no catalog (found: {})",
            reference,
            found.join(", ")
        );
    }

    let mut all_issues: Vec<Issue> = Vec::new();
    for rule in rules {
        match rule {
            CheckRule::Missing => {
                let issues = check_missing_keys(&reference, &catalogs);
                all_issues.extend(issues.into_iter().map(Issue::MissingKey));
            }
            CheckRule::Orphan => {
                let issues = check_orphan_keys(&reference, &catalogs);
                all_issues.extend(issues.into_iter().map(Issue::OrphanKey));
            }
            CheckRule::Shape => {
                let issues = check_shape_mismatches(&reference, &catalogs);
                all_issues.extend(issues.into_iter().map(Issue::ShapeMismatch));
            }
            CheckRule::Untranslated => {
                let issues = check_untranslated(&reference, &catalogs);
                all_issues.extend(issues.into_iter().map(Issue::Untranslated));
            }
        }
    }

    Ok(finish(
        CommandSummary::Check(CheckSummary {
            locale_files_checked: catalogs.len(),
        }),
        all_issues,
        scan_warnings,
    ))
}

/// Embedded catalogs by default; a scanned directory when configured.
fn load_catalogs(
    messages_root: Option<PathBuf>,
) -> Result<(BTreeMap<String, LocaleCatalog>, Vec<ScanWarning>)> {
    match messages_root {
        Some(dir) => {
            let scanned = scan_locale_dir(&dir)?;
            Ok((scanned.catalogs, scanned.warnings))
        }
        None => Ok((TranslationTable::load()?.catalogs(), Vec::new())),
    }
}
