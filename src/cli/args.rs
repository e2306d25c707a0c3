//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all glossa
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `check`: compare locale catalogs and report drift (missing keys,
//!   orphans, shape mismatches, untranslated values)
//! - `keys`: list one locale's keys and values
//! - `resolve`: resolve a dot-path key the way the page would
//! - `init`: write a default `.glossarc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Keys(cmd)) => cmd.common.verbose,
            Some(Command::Resolve(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub rules: Vec<CheckRule>,

    /// Reference locale for the parity rules (overrides config file)
    #[arg(long)]
    pub reference: Option<String>,

    /// Directory of <locale>.json files to check instead of the embedded
    /// catalogs (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct KeysCommand {
    /// Locale to list (defaults to the configured default locale)
    #[arg(long)]
    pub locale: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Dot-path key to resolve (e.g. "nav.home" or "skills.stack.0")
    pub key: String,

    /// Locale to resolve against (defaults to the configured default locale)
    #[arg(long)]
    pub locale: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check locale catalogs for drift
    Check(CheckCommand),
    /// List a locale's keys and values
    Keys(KeysCommand),
    /// Resolve a dot-path key like the page would
    Resolve(ResolveCommand),
    /// Create a default .glossarc.json config file
    Init,
}
