//! Command dispatch.
//!
//! Loads the optional config file and hands each parsed command to its
//! implementation, returning a [`CommandResult`] for the reporter.

use std::{fs, path::Path};

use anyhow::Result;

use super::args::{Arguments, Command};
use super::commands::{
    CommandResult, CommandSummary, InitSummary, check::check, finish, keys::keys, resolve::resolve,
};
use crate::config::{CONFIG_FILE_NAME, Config, default_config_json};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => {
            let config = Config::load()?;
            check(cmd, &config)
        }
        Some(Command::Keys(cmd)) => {
            let config = Config::load()?;
            keys(cmd, &config)
        }
        Some(Command::Resolve(cmd)) => {
            let config = Config::load()?;
            resolve(cmd, &config)
        }
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn init() -> Result<CommandResult> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(finish(
        CommandSummary::Init(InitSummary { created: true }),
        Vec::new(),
        Vec::new(),
    ))
}
