//! The Resource Store: locale catalogs loaded once and never mutated.
//!
//! The page's own catalogs are embedded in the binary and loaded through
//! [`TranslationTable::load`]. The CLI can additionally scan a directory of
//! `<locale>.json` files ([`scan_locale_dir`]) so the parity rules run
//! against catalogs that are still being edited.

pub mod dictionary;
pub mod json;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

pub use dictionary::{Dictionary, FlatValue, Value, ValueShape};

use crate::locale::Locale;

const EN_US_RESOURCE: &str = include_str!("../../resources/en-us.json");
const PT_BR_RESOURCE: &str = include_str!("../../resources/pt-br.json");

fn embedded_resource(locale: Locale) -> &'static str {
    match locale {
        Locale::EnUs => EN_US_RESOURCE,
        Locale::PtBr => PT_BR_RESOURCE,
    }
}

/// Repository-relative path of the embedded resource, used as the source
/// label in reports.
fn resource_path(locale: Locale) -> &'static str {
    match locale {
        Locale::EnUs => "resources/en-us.json",
        Locale::PtBr => "resources/pt-br.json",
    }
}

/// The immutable mapping from locale to dictionary.
///
/// Constructed once at startup and never mutated; every supported locale is
/// guaranteed to have a dictionary, so lookups by [`Locale`] cannot miss.
#[derive(Debug, Clone)]
pub struct TranslationTable {
    dictionaries: BTreeMap<Locale, Dictionary>,
}

impl TranslationTable {
    /// Load the embedded resource definitions for every supported locale.
    ///
    /// Fails when a resource does not parse into a [`Dictionary`]; callers
    /// treat that as a startup abort, since nothing meaningful can render
    /// without its string tables.
    pub fn load() -> Result<TranslationTable> {
        let mut dictionaries = BTreeMap::new();
        for locale in Locale::all() {
            let dictionary = json::parse_dictionary(embedded_resource(locale))
                .with_context(|| format!("malformed resource {}", resource_path(locale)))?;
            dictionaries.insert(locale, dictionary);
        }
        Ok(Self { dictionaries })
    }

    /// Build a table from explicit dictionaries.
    pub fn new(en_us: Dictionary, pt_br: Dictionary) -> TranslationTable {
        let mut dictionaries = BTreeMap::new();
        dictionaries.insert(Locale::EnUs, en_us);
        dictionaries.insert(Locale::PtBr, pt_br);
        Self { dictionaries }
    }

    /// The dictionary for a locale.
    pub fn get(&self, locale: Locale) -> &Dictionary {
        // Every supported locale is inserted by both constructors.
        &self.dictionaries[&locale]
    }

    /// The embedded catalogs in the tag-keyed form the parity rules consume.
    pub fn catalogs(&self) -> BTreeMap<String, LocaleCatalog> {
        self.dictionaries
            .iter()
            .map(|(locale, dictionary)| {
                (
                    locale.tag().to_string(),
                    LocaleCatalog {
                        tag: locale.tag().to_string(),
                        source: resource_path(*locale).to_string(),
                        entries: dictionary.flatten(),
                    },
                )
            })
            .collect()
    }
}

/// A locale catalog prepared for checking: where it came from plus the
/// flattened entries.
#[derive(Debug, Clone)]
pub struct LocaleCatalog {
    /// Locale tag (`en-US`, or a scanned file's stem).
    pub tag: String,
    /// File the catalog was read from, for reports.
    pub source: String,
    pub entries: BTreeMap<String, FlatValue>,
}

/// A locale file that could not be parsed during a directory scan.
#[derive(Debug, Clone)]
pub struct ScanWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct ScanResult {
    pub catalogs: BTreeMap<String, LocaleCatalog>,
    pub warnings: Vec<ScanWarning>,
}

/// Extracts the locale tag from a file name.
///
/// Examples:
/// - "en-US.json" -> Some("en-US")
/// - "/path/to/messages/pt-BR.json" -> Some("pt-BR")
fn extract_locale(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.to_string())
}

/// Read every `<locale>.json` file in a directory.
///
/// Files that fail to parse become [`ScanWarning`]s rather than aborting
/// the scan; this is the tool one reaches for precisely when a catalog is
/// broken. Only a missing or non-directory path is an error.
pub fn scan_locale_dir(dir: impl AsRef<Path>) -> Result<ScanResult> {
    let dir = dir.as_ref();
    let mut result = ScanResult::default();

    if !dir.exists() {
        bail!(
            "Messages directory '{}' does not exist.\n\
             Hint: Check the 'messagesRoot' setting or --messages-root flag.",
            dir.display()
        );
    }
    if !dir.is_dir() {
        bail!("'{}' is not a directory.", dir.display());
    }

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let Some(tag) = extract_locale(&path) else {
            continue;
        };
        let file_path = path.to_string_lossy().to_string();
        let parsed = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read locale file: {}", file_path))
            .and_then(|content| {
                json::parse_dictionary(&content)
                    .with_context(|| format!("Failed to parse locale file: {}", file_path))
            });
        match parsed {
            Ok(dictionary) => {
                result.catalogs.insert(
                    tag.clone(),
                    LocaleCatalog {
                        tag,
                        source: file_path,
                        entries: dictionary.flatten(),
                    },
                );
            }
            Err(error) => result.warnings.push(ScanWarning {
                file_path,
                error: format!("{:#}", error),
            }),
        }
    }

    Ok(result)
}
