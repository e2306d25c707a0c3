use anyhow::{Context, Result};

use super::super::args::KeysCommand;
use super::{CommandResult, CommandSummary, KeysSummary, finish};

use crate::config::Config;
use crate::locale::Locale;
use crate::store::TranslationTable;

pub fn keys(cmd: KeysCommand, config: &Config) -> Result<CommandResult> {
    let tag = cmd.locale.as_deref().unwrap_or(&config.default_locale);
    let locale = Locale::from_tag(tag).context("Cannot list keys")?;

    let table = TranslationTable::load()?;
    let rows: Vec<(String, String)> = table
        .get(locale)
        .flatten()
        .into_iter()
        .map(|(key, value)| (key, value.preview()))
        .collect();

    Ok(finish(
        CommandSummary::Keys(KeysSummary {
            locale: locale.tag().to_string(),
            rows,
        }),
        Vec::new(),
        Vec::new(),
    ))
}
