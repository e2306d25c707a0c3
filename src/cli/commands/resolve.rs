use anyhow::{Context, Result};

use super::super::args::ResolveCommand;
use super::{CommandResult, CommandSummary, ResolveSummary, finish};

use crate::config::Config;
use crate::locale::Locale;
use crate::store::TranslationTable;

pub fn resolve(cmd: ResolveCommand, config: &Config) -> Result<CommandResult> {
    let tag = cmd.locale.as_deref().unwrap_or(&config.default_locale);
    let locale = Locale::from_tag(tag).context("Cannot resolve key")?;

    let table = TranslationTable::load()?;
    let resolved = table.get(locale).resolve(&cmd.key).map(String::from);

    Ok(finish(
        CommandSummary::Resolve(ResolveSummary {
            key: cmd.key,
            locale: locale.tag().to_string(),
            resolved,
        }),
        Vec::new(),
        Vec::new(),
    ))
}
