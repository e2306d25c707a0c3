//! Configuration file loading and parsing.
//!
//! `glossa` works without any configuration: the embedded catalogs and the
//! pt-BR default locale cover the page itself. A `.glossarc.json` at the
//! project root steers the CLI, pointing it at a directory of locale files
//! and picking the reference locale for the parity rules. CLI flags override
//! config values.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::locale::Locale;

pub const CONFIG_FILE_NAME: &str = ".glossarc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory of `<locale>.json` files to check instead of the embedded
    /// catalogs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages_root: Option<String>,
    /// Locale the `keys` and `resolve` commands use when `--locale` is not
    /// given.
    #[serde(default = "default_locale_tag")]
    pub default_locale: String,
    /// Locale the parity rules treat as the source of truth. Falls back to
    /// `defaultLocale`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_locale: Option<String>,
}

fn default_locale_tag() -> String {
    Locale::DEFAULT.tag().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages_root: None,
            default_locale: default_locale_tag(),
            reference_locale: None,
        }
    }
}

impl Config {
    /// Load `.glossarc.json` from the working directory, falling back to
    /// defaults when the file does not exist.
    pub fn load() -> Result<Config> {
        Self::load_from(Path::new(CONFIG_FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// `defaultLocale` must always be a supported locale (it selects an
    /// embedded catalog). `referenceLocale` must be supported too unless
    /// `messagesRoot` points at a directory, where free-form tags name the
    /// scanned files.
    pub fn validate(&self) -> Result<()> {
        Locale::from_tag(&self.default_locale)
            .with_context(|| format!("Invalid 'defaultLocale' in {}", CONFIG_FILE_NAME))?;

        if self.messages_root.is_none()
            && let Some(reference) = &self.reference_locale
        {
            Locale::from_tag(reference)
                .with_context(|| format!("Invalid 'referenceLocale' in {}", CONFIG_FILE_NAME))?;
        }
        Ok(())
    }

    /// The locale tag the parity rules compare against.
    pub fn reference(&self) -> &str {
        self.reference_locale
            .as_deref()
            .unwrap_or(&self.default_locale)
    }
}

/// The JSON written by `glossa init`.
pub fn default_config_json() -> Result<String> {
    let mut json = serde_json::to_string_pretty(&Config::default())?;
    json.push('\n');
    Ok(json)
}
